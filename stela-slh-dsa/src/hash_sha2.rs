//! SHA2-based hash function implementations for SLH-DSA.
//!
//! FIPS 205, Section 11.2 defines the SHA2-based hash functions:
//! - Category 1 (n=16): all functions use SHA-256
//! - Category 3/5 (n=24/32): F and PRF use SHA-256;
//!   H, T_l, PRFmsg, and Hmsg use SHA-512
//!
//! Addresses arrive already in the 22-byte compressed ADRSc layout.

use crate::address::Address;
use crate::hash::{HashSuite, Tlen};
use crate::params::HashFamily;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroize;

/// SHA2 hash suite for security category 1 (n=16).
#[derive(Debug)]
pub struct Sha2Cat1;

/// SHA2 hash suite for security categories 3 and 5 (n=24, n=32).
#[derive(Debug)]
pub struct Sha2Cat35;

/// Shared instance referenced by the parameter table.
pub(crate) static SHA2_CAT1: Sha2Cat1 = Sha2Cat1;
/// Shared instance referenced by the parameter table.
pub(crate) static SHA2_CAT35: Sha2Cat35 = Sha2Cat35;

/// Zero block large enough for toByte(0, 128-n) at every n.
const ZEROS: [u8; 128] = [0u8; 128];

/// Trunc_n(D(PK.seed ‖ toByte(0, block-n) ‖ ADRSc ‖ M...)).
fn block_hash<D: Digest>(out: &mut [u8], block: usize, pk_seed: &[u8], adrs: &Address, ms: &[&[u8]]) {
    let mut hasher = D::new();
    hasher.update(pk_seed);
    hasher.update(&ZEROS[..block - pk_seed.len()]);
    hasher.update(adrs.as_bytes());
    for m in ms {
        hasher.update(m);
    }
    let mut hash = hasher.finalize();
    out.copy_from_slice(&hash[..out.len()]);
    hash.as_mut_slice().zeroize();
}

/// Start Tl: absorb PK.seed, padding, and ADRSc, ready for streamed inputs.
fn block_hash_begin<D: Digest>(block: usize, pk_seed: &[u8], adrs: &Address) -> D {
    let mut hasher = D::new();
    hasher.update(pk_seed);
    hasher.update(&ZEROS[..block - pk_seed.len()]);
    hasher.update(adrs.as_bytes());
    hasher
}

/// MGF1 mask generation (RFC 8017, Appendix B.2.1) over the concatenated seed parts.
fn mgf1<D: Digest + Clone>(out: &mut [u8], seed_parts: &[&[u8]]) {
    // Pre-hash all seed parts once, then clone for each block
    let mut base_hasher = D::new();
    for part in seed_parts {
        base_hasher.update(part);
    }

    let hash_len = <D as Digest>::output_size();
    for (counter, chunk) in out.chunks_mut(hash_len).enumerate() {
        let mut hasher = base_hasher.clone();
        hasher.update((counter as u32).to_be_bytes());
        let mut block = hasher.finalize();
        chunk.copy_from_slice(&block[..chunk.len()]);
        block.as_mut_slice().zeroize();
    }
}

/// Hmsg = MGF1-D(R ‖ PK.seed ‖ D(R ‖ PK.seed ‖ PK.root ‖ M), m).
fn h_msg_mgf1<D: Digest + Clone>(out: &mut [u8], r: &[u8], pk_seed: &[u8], pk_root: &[u8], msg: &[u8]) {
    let inner = D::new()
        .chain_update(r)
        .chain_update(pk_seed)
        .chain_update(pk_root)
        .chain_update(msg)
        .finalize();
    mgf1::<D>(out, &[r, pk_seed, inner.as_slice()]);
}

/// Implements the SHA2 suite for one category.
///
/// `$big` is the hash used for H, T_l, PRFmsg, and Hmsg, `$block` its
/// block size in bytes, and `$tlen` the matching [`Tlen`] variant.
macro_rules! impl_sha2_hash_suite {
    ($name:ident, $big:ty, $block:expr, $tlen:ident) => {
        impl HashSuite for $name {
            fn family(&self) -> HashFamily {
                HashFamily::Sha2
            }

            fn prf(&self, out: &mut [u8], pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) {
                // PRF uses SHA-256 for all security levels
                block_hash::<Sha256>(out, 64, pk_seed, adrs, &[sk_seed]);
            }

            fn prf_msg(&self, out: &mut [u8], sk_prf: &[u8], opt_rand: &[u8], msg: &[u8]) {
                // PRFmsg = Trunc_n(HMAC(SK.prf, OptRand || M))
                let mut mac = <Hmac<$big>>::new_from_slice(sk_prf)
                    .expect("HMAC accepts any key length");
                mac.update(opt_rand);
                mac.update(msg);
                let mut tag = mac.finalize().into_bytes();
                out.copy_from_slice(&tag[..out.len()]);
                tag.as_mut_slice().zeroize();
            }

            fn h_msg(&self, out: &mut [u8], r: &[u8], pk_seed: &[u8], pk_root: &[u8], msg: &[u8]) {
                h_msg_mgf1::<$big>(out, r, pk_seed, pk_root, msg);
            }

            fn f(&self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8]) {
                block_hash::<Sha256>(out, 64, pk_seed, adrs, &[m1]);
            }

            fn h(&self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) {
                block_hash::<$big>(out, $block, pk_seed, adrs, &[m1, m2]);
            }

            fn t_begin(&self, pk_seed: &[u8], adrs: &Address) -> Tlen {
                Tlen::$tlen(block_hash_begin::<$big>($block, pk_seed, adrs))
            }

            fn expand_seed(&self, out: &mut [u8], seed: &[u8]) {
                // The counter occupies the seed's trailing 4 bytes.
                mgf1::<$big>(out, &[&seed[..seed.len().saturating_sub(4)]]);
            }
        }
    };
}

impl_sha2_hash_suite!(Sha2Cat1, Sha256, 64, Sha256);
impl_sha2_hash_suite!(Sha2Cat35, Sha512, 128, Sha512);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AdrsType;

    #[test]
    fn test_mgf1_first_block_is_hash_of_seed_and_zero_counter() {
        let mut out = [0u8; 40];
        mgf1::<Sha256>(&mut out, &[b"ab".as_slice(), b"c".as_slice()]);
        let expected = Sha256::new().chain_update(b"abc").chain_update([0u8; 4]).finalize();
        assert_eq!(&out[..32], expected.as_slice());

        let second = Sha256::new()
            .chain_update(b"abc")
            .chain_update(1u32.to_be_bytes())
            .finalize();
        assert_eq!(&out[32..], &second[..8]);
    }

    #[test]
    fn test_prf_msg_is_truncated_hmac() {
        let key = [0x0bu8; 16];
        let mut out = [0u8; 16];
        SHA2_CAT1.prf_msg(&mut out, &key, b"Hi ", b"There");

        let mut mac = Hmac::<Sha256>::new_from_slice(&key).unwrap();
        mac.update(b"Hi There");
        assert_eq!(out, mac.finalize().into_bytes()[..16]);
    }

    #[test]
    fn test_cat35_uses_sha512_for_h() {
        let pk_seed = [1u8; 24];
        let adrs = Address::new(HashFamily::Sha2);
        let mut out = [0u8; 24];
        SHA2_CAT35.h(&mut out, &pk_seed, &adrs, &[2u8; 24], &[3u8; 24]);

        let expected = Sha512::new()
            .chain_update(pk_seed)
            .chain_update([0u8; 104])
            .chain_update(adrs.as_bytes())
            .chain_update([2u8; 24])
            .chain_update([3u8; 24])
            .finalize();
        assert_eq!(out, expected[..24]);
    }

    #[test]
    fn test_f_pads_to_sha256_block_for_every_n() {
        for n in [16usize, 24, 32] {
            let pk_seed = vec![5u8; n];
            let mut adrs = Address::new(HashFamily::Sha2);
            adrs.set_type_and_clear(AdrsType::WotsHash);
            adrs.set_hash(3);
            let mut out = vec![0u8; n];
            SHA2_CAT35.f(&mut out, &pk_seed, &adrs, &vec![6u8; n]);

            let expected = Sha256::new()
                .chain_update(&pk_seed)
                .chain_update(vec![0u8; 64 - n])
                .chain_update(adrs.as_bytes())
                .chain_update(vec![6u8; n])
                .finalize();
            assert_eq!(out, expected[..n]);
        }
    }

    #[test]
    fn test_tlen_matches_one_shot_h_layout() {
        let pk_seed = [9u8; 16];
        let adrs = Address::new(HashFamily::Sha2);
        let mut t = SHA2_CAT1.t_begin(&pk_seed, &adrs);
        t.update(&[1u8; 16]);
        t.update(&[2u8; 16]);
        let mut via_t = [0u8; 16];
        t.finalize_into(&mut via_t);

        let mut via_h = [0u8; 16];
        SHA2_CAT1.h(&mut via_h, &pk_seed, &adrs, &[1u8; 16], &[2u8; 16]);
        assert_eq!(via_t, via_h);
    }

    #[test]
    fn test_h_msg_output_length_follows_buffer() {
        let mut short = [0u8; 30];
        let mut long = [0u8; 130];
        SHA2_CAT35.h_msg(&mut short, &[1u8; 24], &[2u8; 24], &[3u8; 24], b"msg");
        SHA2_CAT35.h_msg(&mut long, &[1u8; 24], &[2u8; 24], &[3u8; 24], b"msg");
        assert_eq!(short, long[..30]);
    }
}
