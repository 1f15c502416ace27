//! Core SLH-DSA signing algorithms.
//!
//! This module contains the main KeyGen, Sign, and Verify algorithms
//! as specified in FIPS 205. They operate on the already-encoded message
//! M'; the context-string wrapper lives in [`crate::message`].
//!
//! FIPS 205, Algorithms 18-20.

use rand_core::TryCryptoRng;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::address::{low_mask, AdrsType, TreeIndex};
use crate::fors;
use crate::hash::{PublicContext, SecretContext};
use crate::hypertree;
use crate::keys::{PrivateKey, PublicKey};
use crate::params::common::MAX_N;
use crate::params::{ParamId, ParameterSet};
use crate::signature::{self, Signature};
use crate::treehash::NodeStack;
use crate::utils::to_int;
use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec;

/// Largest message digest length m over all parameter sets.
const MAX_DIGEST: usize = 49;

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::InvalidSeedLength { expected, actual })
    }
}

/// Generate a key pair from fresh randomness.
///
/// FIPS 205, Algorithm 21: slh_keygen()
///
/// Draws SK.seed, SK.prf and PK.seed (n bytes each) from `rng`. A failing
/// generator yields [`Error::Randomness`].
#[instrument(level = "debug", skip_all, fields(param = %id))]
pub fn keygen<R: TryCryptoRng + ?Sized>(id: ParamId, rng: &mut R) -> Result<PrivateKey> {
    let n = id.params().n;
    let mut seeds = Zeroizing::new([0u8; 3 * MAX_N]);
    rng.try_fill_bytes(&mut seeds[..3 * n]).map_err(|_| Error::Randomness)?;
    keygen_internal(id, &seeds[..n], &seeds[n..2 * n], &seeds[2 * n..3 * n])
}

/// Deterministically derive a key pair from a 4n-byte seed.
///
/// The seed is expanded to SK.seed ‖ SK.prf ‖ PK.seed with MGF1 over the
/// family's message hash (SHA2 sets) or SHAKE256 (SHAKE sets). MGF1 takes
/// the 4-byte block counter in place of the seed's last 4 bytes, so those
/// bytes do not affect SHA2 keys.
#[instrument(level = "debug", skip_all, fields(param = %id))]
pub fn derive_key(id: ParamId, seed: &[u8]) -> Result<PrivateKey> {
    let p = id.params();
    let n = p.n;
    check_len(p.seed_size(), seed.len())?;

    let mut expanded = Zeroizing::new([0u8; 3 * MAX_N]);
    p.hash.expand_seed(&mut expanded[..3 * n], seed);
    keygen_internal(id, &expanded[..n], &expanded[n..2 * n], &expanded[2 * n..3 * n])
}

/// Build a key pair from explicit seeds.
///
/// FIPS 205, Algorithm 18: slh_keygen_internal(SK.seed, SK.prf, PK.seed)
///
/// Each seed must be n bytes. PK.root is the root of the single XMSS tree
/// on the top hypertree layer.
pub fn keygen_internal(id: ParamId, sk_seed: &[u8], sk_prf: &[u8], pk_seed: &[u8]) -> Result<PrivateKey> {
    let p = id.params();
    let n = p.n;
    check_len(n, sk_seed.len())?;
    check_len(n, sk_prf.len())?;
    check_len(n, pk_seed.len())?;

    let ctx = SecretContext::new(p, pk_seed, sk_seed);
    let mut stack = NodeStack::new(n, p.h_prime as u32);
    let mut root = [0u8; MAX_N];
    hypertree::root(&ctx, &mut stack, &mut root[..n])?;

    let public = PublicKey::new(id, pk_seed, &root[..n]);
    Ok(PrivateKey::new(id, sk_seed, sk_prf, public))
}

/// Split an m-byte digest into (md, idx_tree, idx_leaf).
///
/// FIPS 205, Algorithm 19, lines 7-10. The tree index has h - h' ≤ 64
/// significant bits and the leaf index h' ≤ 9.
fn parse_digest<'a>(p: &ParameterSet, digest: &'a [u8]) -> (&'a [u8], TreeIndex, u32) {
    let (md, rest) = digest.split_at(p.fors_msg_size());
    let (tree_bytes, leaf_bytes) = rest.split_at(p.tree_idx_size());

    let tree_bits = p.h - p.h_prime;
    let tree_mask = if tree_bits >= 64 { u64::MAX } else { (1u64 << tree_bits) - 1 };
    let tree = to_int(tree_bytes) & tree_mask;
    let idx_tree = TreeIndex([tree as u32, (tree >> 32) as u32, 0]);
    let idx_leaf = to_int(&leaf_bytes[..p.leaf_idx_size()]) as u32 & low_mask(p.h_prime as u32);

    (md, idx_tree, idx_leaf)
}

/// Sign an encoded message M'.
///
/// FIPS 205, Algorithm 19: slh_sign_internal(M, SK, addrnd)
///
/// `add_rand` is n bytes: fresh randomness, or PK.seed for the
/// deterministic variant.
#[instrument(level = "debug", skip_all, fields(param = %sk.param_id()))]
pub fn sign_internal(sk: &PrivateKey, msg: &[u8], add_rand: &[u8]) -> Result<Signature> {
    let id = sk.param_id();
    let p = id.params();
    let n = p.n;
    check_len(n, add_rand.len())?;

    let pk = sk.public_key();
    let mut sig = vec![0u8; p.signature_size()];
    let (r, fors_sig, ht_sig) = signature::split_mut(id, &mut sig);

    p.hash.prf_msg(r, sk.prf(), add_rand, msg);
    let mut digest = [0u8; MAX_DIGEST];
    p.hash.h_msg(&mut digest[..p.m], r, pk.seed(), pk.root(), msg);
    let (md, idx_tree, idx_leaf) = parse_digest(p, &digest[..p.m]);

    let ctx = SecretContext::new(p, pk.seed(), sk.seed());
    let mut adrs = ctx.address();
    adrs.set_tree(&idx_tree);
    adrs.set_type_and_clear(AdrsType::ForsTree);
    adrs.set_keypair(idx_leaf);

    let mut stack = NodeStack::new(n, p.a.max(p.h_prime) as u32);
    let mut fors_pk = [0u8; MAX_N];
    fors::sign(&ctx, &mut stack, md, &adrs, fors_sig, &mut fors_pk[..n])?;
    hypertree::sign(&ctx, &mut stack, &fors_pk[..n], idx_tree, idx_leaf, ht_sig)?;

    Ok(Signature::new(id, sig))
}

/// Verify a signature over an encoded message M'.
///
/// FIPS 205, Algorithm 20: slh_verify_internal(M, SIG, PK)
///
/// Any malformed or wrong signature yields `false`.
#[instrument(level = "debug", skip_all, fields(param = %pk.param_id()))]
pub fn verify_internal(pk: &PublicKey, msg: &[u8], sig: &[u8]) -> bool {
    match verify_checked(pk, msg, sig) {
        Ok(valid) => valid,
        Err(err) => {
            debug!(%err, "signature rejected");
            false
        }
    }
}

fn verify_checked(pk: &PublicKey, msg: &[u8], sig: &[u8]) -> Result<bool> {
    let id = pk.param_id();
    let p = id.params();
    let n = p.n;
    if sig.len() != p.signature_size() {
        return Err(Error::InvalidSignatureLength {
            expected: p.signature_size(),
            actual: sig.len(),
        });
    }

    let (r, fors_sig, ht_sig) = signature::split(id, sig);
    let mut digest = [0u8; MAX_DIGEST];
    p.hash.h_msg(&mut digest[..p.m], r, pk.seed(), pk.root(), msg);
    let (md, idx_tree, idx_leaf) = parse_digest(p, &digest[..p.m]);

    let ctx = PublicContext::new(p, pk.seed());
    let mut adrs = ctx.address();
    adrs.set_tree(&idx_tree);
    adrs.set_type_and_clear(AdrsType::ForsTree);
    adrs.set_keypair(idx_leaf);

    let mut fors_pk = [0u8; MAX_N];
    fors::pk_from_sig(&ctx, fors_sig, md, &adrs, &mut fors_pk[..n]);
    let valid = hypertree::verify(&ctx, &fors_pk[..n], ht_sig, idx_tree, idx_leaf, pk.root());
    if !valid {
        debug!("hypertree root mismatch");
    }
    Ok(valid)
}
