//! Pure SLH-DSA signing with a context string.
//!
//! FIPS 205, Algorithms 22 and 24. The message is encoded as
//! `0x00 ‖ len(ctx) ‖ ctx ‖ M` before reaching the internal functions.
//! Pre-hashed signing (HashSLH-DSA) is not provided.

use rand_core::TryCryptoRng;
use tracing::debug;
use zeroize::Zeroizing;

use crate::keys::{PrivateKey, PublicKey};
use crate::params::common::{MAX_CONTEXT_LEN, MAX_N};
use crate::sign::{sign_internal, verify_internal};
use crate::signature::Signature;
use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Domain separator for pure (not pre-hashed) signing.
const PURE: u8 = 0;

/// Encode `msg` and `ctx` as M' = 0x00 ‖ len(ctx) ‖ ctx ‖ msg.
///
/// Fails with [`Error::ContextTooLong`] if `ctx` exceeds 255 bytes.
pub fn encode_message(msg: &[u8], ctx: &[u8]) -> Result<Vec<u8>> {
    if ctx.len() > MAX_CONTEXT_LEN {
        return Err(Error::ContextTooLong { len: ctx.len() });
    }
    let mut encoded = Vec::with_capacity(2 + ctx.len() + msg.len());
    encoded.push(PURE);
    encoded.push(ctx.len() as u8);
    encoded.extend_from_slice(ctx);
    encoded.extend_from_slice(msg);
    Ok(encoded)
}

/// Sign `msg` under context `ctx` with no fresh randomness.
///
/// PK.seed stands in for the randomizer, so equal inputs give equal
/// signatures.
pub fn sign_deterministic(sk: &PrivateKey, msg: &[u8], ctx: &[u8]) -> Result<Signature> {
    let encoded = encode_message(msg, ctx)?;
    sign_internal(sk, &encoded, sk.public_key().seed())
}

/// Sign `msg` under context `ctx` with n fresh random bytes from `rng`.
///
/// FIPS 205, Algorithm 22: slh_sign(M, ctx, SK)
pub fn sign_randomized<R: TryCryptoRng + ?Sized>(
    sk: &PrivateKey,
    rng: &mut R,
    msg: &[u8],
    ctx: &[u8],
) -> Result<Signature> {
    let encoded = encode_message(msg, ctx)?;
    let n = sk.param_id().params().n;
    let mut add_rand = Zeroizing::new([0u8; MAX_N]);
    rng.try_fill_bytes(&mut add_rand[..n]).map_err(|_| Error::Randomness)?;
    sign_internal(sk, &encoded, &add_rand[..n])
}

/// Verify `sig` over `msg` under context `ctx`.
///
/// FIPS 205, Algorithm 24: slh_verify(M, SIG, ctx, PK)
///
/// Returns `false` for an over-long context, a signature of another
/// parameter set, or any invalid signature.
pub fn verify(pk: &PublicKey, msg: &[u8], sig: &Signature, ctx: &[u8]) -> bool {
    if sig.param_id() != pk.param_id() {
        let err = Error::ParameterMismatch {
            expected: pk.param_id().into(),
            actual: sig.param_id().into(),
        };
        debug!(%err, "signature rejected");
        return false;
    }
    match encode_message(msg, ctx) {
        Ok(encoded) => verify_internal(pk, &encoded, sig.as_bytes()),
        Err(err) => {
            debug!(%err, "signature rejected");
            false
        }
    }
}
