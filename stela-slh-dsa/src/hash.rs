//! Hash function abstraction for SLH-DSA.
//!
//! SLH-DSA uses several specialized hash functions for different purposes.
//! This module defines the `HashSuite` trait that abstracts over SHAKE and SHA2 variants.
//!
//! FIPS 205 defines the following hash functions:
//! - **PRF**: Pseudorandom function for secret key generation
//! - **PRFmsg**: Pseudorandom function for message randomization
//! - **Hmsg**: Hash function for message digest generation
//! - **F**: Chaining function for WOTS+
//! - **H**: Two-to-one hash function for Merkle trees
//! - **Tl**: Multi-input hash function for WOTS+ and FORS public key compression
//!
//! Every method writes its result into a caller-owned buffer; the buffer's
//! length is the output length (n for everything except Hmsg).

use core::fmt::Debug;
use core::ops::Deref;

use sha2::{Sha256, Sha512};
use sha3::Shake256;

use crate::address::Address;
use crate::params::{HashFamily, ParameterSet};

/// Hash function suite for one SLH-DSA hash family and security category.
///
/// Implementations are stateless and shared through the static parameter
/// table, so the trait is object safe and `Sync`.
pub trait HashSuite: Debug + Send + Sync {
    /// Hash family implemented by this suite.
    fn family(&self) -> HashFamily;

    /// PRF(PK.seed, SK.seed, ADRS): secret WOTS+ and FORS values.
    fn prf(&self, out: &mut [u8], pk_seed: &[u8], sk_seed: &[u8], adrs: &Address);

    /// PRFmsg(SK.prf, OptRand, M): the signature randomizer R.
    fn prf_msg(&self, out: &mut [u8], sk_prf: &[u8], opt_rand: &[u8], msg: &[u8]);

    /// Hmsg(R, PK.seed, PK.root, M): the m-byte message digest.
    fn h_msg(&self, out: &mut [u8], r: &[u8], pk_seed: &[u8], pk_root: &[u8], msg: &[u8]);

    /// F(PK.seed, ADRS, M1): one chain step or tree leaf.
    fn f(&self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8]);

    /// H(PK.seed, ADRS, M1 ‖ M2): an internal tree node.
    fn h(&self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]);

    /// Start Tl(PK.seed, ADRS, ...). Inputs are streamed into the returned state.
    fn t_begin(&self, pk_seed: &[u8], adrs: &Address) -> Tlen;

    /// Expand a key-derivation seed to `out.len()` bytes.
    fn expand_seed(&self, out: &mut [u8], seed: &[u8]);
}

/// Streaming state of the variable-arity hash Tl.
#[derive(Clone)]
pub enum Tlen {
    /// SHA-256 backed (SHA2, n = 16).
    Sha256(Sha256),
    /// SHA-512 backed (SHA2, n = 24 or 32).
    Sha512(Sha512),
    /// SHAKE256 backed.
    Shake(Shake256),
}

impl Tlen {
    /// Absorb the next input block.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Tlen::Sha256(h) => sha2::Digest::update(h, data),
            Tlen::Sha512(h) => sha2::Digest::update(h, data),
            Tlen::Shake(h) => sha3::digest::Update::update(h, data),
        }
    }

    /// Finish and write the first `out.len()` output bytes.
    pub fn finalize_into(self, out: &mut [u8]) {
        match self {
            Tlen::Sha256(h) => out.copy_from_slice(&sha2::Digest::finalize(h)[..out.len()]),
            Tlen::Sha512(h) => out.copy_from_slice(&sha2::Digest::finalize(h)[..out.len()]),
            Tlen::Shake(h) => {
                let mut reader = sha3::digest::ExtendableOutput::finalize_xof(h);
                sha3::digest::XofReader::read(&mut reader, out);
            }
        }
    }
}

/// Public per-call state: parameter set plus PK.seed.
///
/// Everything verification needs. Created per call and dropped with it.
#[derive(Clone, Copy)]
pub(crate) struct PublicContext<'a> {
    pub(crate) params: &'static ParameterSet,
    pub(crate) pk_seed: &'a [u8],
}

impl<'a> PublicContext<'a> {
    pub(crate) fn new(params: &'static ParameterSet, pk_seed: &'a [u8]) -> Self {
        debug_assert_eq!(pk_seed.len(), params.n);
        Self { params, pk_seed }
    }

    /// Security parameter n.
    pub(crate) fn n(&self) -> usize {
        self.params.n
    }

    /// A zeroed address laid out for this parameter set's family.
    pub(crate) fn address(&self) -> Address {
        Address::new(self.params.family)
    }

    pub(crate) fn f(&self, out: &mut [u8], adrs: &Address, m1: &[u8]) {
        self.params.hash.f(out, self.pk_seed, adrs, m1);
    }

    pub(crate) fn h(&self, out: &mut [u8], adrs: &Address, m1: &[u8], m2: &[u8]) {
        self.params.hash.h(out, self.pk_seed, adrs, m1, m2);
    }

    pub(crate) fn t(&self, adrs: &Address) -> Tlen {
        self.params.hash.t_begin(self.pk_seed, adrs)
    }
}

/// Secret per-call state: adds SK.seed for PRF calls.
#[derive(Clone, Copy)]
pub(crate) struct SecretContext<'a> {
    public: PublicContext<'a>,
    sk_seed: &'a [u8],
}

impl<'a> SecretContext<'a> {
    pub(crate) fn new(params: &'static ParameterSet, pk_seed: &'a [u8], sk_seed: &'a [u8]) -> Self {
        debug_assert_eq!(sk_seed.len(), params.n);
        Self {
            public: PublicContext::new(params, pk_seed),
            sk_seed,
        }
    }

    /// PRF output is secret; callers scrub `out` after use.
    pub(crate) fn prf(&self, out: &mut [u8], adrs: &Address) {
        self.params.hash.prf(out, self.pk_seed, self.sk_seed, adrs);
    }
}

impl<'a> Deref for SecretContext<'a> {
    type Target = PublicContext<'a>;

    fn deref(&self) -> &PublicContext<'a> {
        &self.public
    }
}
