//! SHAKE-based hash function implementations for SLH-DSA.
//!
//! FIPS 205, Section 11.1: every function is SHAKE256 over the
//! concatenated inputs, read to the required length. No padding.

use crate::address::Address;
use crate::hash::{HashSuite, Tlen};
use crate::params::HashFamily;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// SHAKE256-based hash suite, shared by every SHAKE parameter set.
#[derive(Debug)]
pub struct Shake256Hash;

/// Shared instance referenced by the parameter table.
pub(crate) static SHAKE256: Shake256Hash = Shake256Hash;

/// SHAKE256(parts[0] ‖ parts[1] ‖ ..., 8·out.len()).
fn shake256(out: &mut [u8], parts: &[&[u8]]) {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    let mut reader = hasher.finalize_xof();
    reader.read(out);
}

impl HashSuite for Shake256Hash {
    fn family(&self) -> HashFamily {
        HashFamily::Shake
    }

    fn prf(&self, out: &mut [u8], pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) {
        // Streamed so the secret seed is never copied into a joined buffer
        shake256(out, &[pk_seed, adrs.as_bytes(), sk_seed]);
    }

    fn prf_msg(&self, out: &mut [u8], sk_prf: &[u8], opt_rand: &[u8], msg: &[u8]) {
        shake256(out, &[sk_prf, opt_rand, msg]);
    }

    fn h_msg(&self, out: &mut [u8], r: &[u8], pk_seed: &[u8], pk_root: &[u8], msg: &[u8]) {
        shake256(out, &[r, pk_seed, pk_root, msg]);
    }

    fn f(&self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8]) {
        shake256(out, &[pk_seed, adrs.as_bytes(), m1]);
    }

    fn h(&self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) {
        shake256(out, &[pk_seed, adrs.as_bytes(), m1, m2]);
    }

    fn t_begin(&self, pk_seed: &[u8], adrs: &Address) -> Tlen {
        let mut hasher = Shake256::default();
        hasher.update(pk_seed);
        hasher.update(adrs.as_bytes());
        Tlen::Shake(hasher)
    }

    fn expand_seed(&self, out: &mut [u8], seed: &[u8]) {
        shake256(out, &[seed]);
    }
}
