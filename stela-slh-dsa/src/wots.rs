//! WOTS+ (Winternitz One-Time Signature) implementation.
//!
//! WOTS+ is a one-time signature scheme used as a building block in SLH-DSA.
//! Each of the len = 2n + 3 chains has 16 positions; a signature reveals the
//! position selected by one base-16 digit of the message or its checksum.
//!
//! FIPS 205, Algorithms 5-8.

use zeroize::Zeroize;

use crate::address::{Address, AdrsType};
use crate::hash::{PublicContext, SecretContext};
use crate::params::common::{MAX_N, W, WOTS_LEN2};
use crate::utils::base_2b;

/// Largest len over all parameter sets (n = 32).
pub(crate) const MAX_WOTS_LEN: usize = 2 * MAX_N + WOTS_LEN2;

/// Apply F `steps` times to `x` in place, starting at chain position `start`.
///
/// FIPS 205, Algorithm 5: chain(X, i, s, PK.seed, ADRS)
///
/// `adrs` must be a WOTS_HASH address with its chain field set; only the
/// hash field is changed.
pub(crate) fn chain(ctx: &PublicContext<'_>, x: &mut [u8], start: u32, steps: u32, adrs: &mut Address) {
    let n = x.len();
    let mut tmp = [0u8; MAX_N];
    for j in start..start + steps {
        adrs.set_hash(j);
        ctx.f(&mut tmp[..n], adrs, x);
        x.copy_from_slice(&tmp[..n]);
    }
    tmp.zeroize();
}

/// Base-16 digits of an n-byte message followed by its 3 checksum digits.
///
/// Writes `wots_len` digits to the front of `out` and returns that count.
pub(crate) fn digits(msg: &[u8], out: &mut [u32; MAX_WOTS_LEN]) -> usize {
    let len1 = 2 * msg.len();
    base_2b(msg, 4, &mut out[..len1]);

    let csum: u32 = out[..len1].iter().map(|&d| W - 1 - d).sum();
    // csum < 2^12: three nibbles, most significant first
    for i in 0..WOTS_LEN2 {
        out[len1 + i] = (csum >> (8 - 4 * i)) & 0xF;
    }
    len1 + WOTS_LEN2
}

/// Generate a WOTS+ public key.
///
/// FIPS 205, Algorithm 6: wots_PKgen(SK.seed, PK.seed, ADRS)
///
/// `adrs` is a WOTS_HASH address with layer, tree, and key pair set.
pub(crate) fn pk_gen(ctx: &SecretContext<'_>, adrs: &Address, out: &mut [u8]) {
    #[cfg(feature = "parallel")]
    {
        crate::parallel::wots_pk_gen(ctx, adrs, out);
    }

    #[cfg(not(feature = "parallel"))]
    {
        let n = ctx.n();
        let mut sk_adrs = adrs.with_type(AdrsType::WotsPrf);
        let mut hash_adrs = *adrs;
        let mut t = ctx.t(&adrs.with_type(AdrsType::WotsPk));
        let mut sk = [0u8; MAX_N];

        for i in 0..ctx.params.wots_len() as u32 {
            sk_adrs.set_chain(i);
            ctx.prf(&mut sk[..n], &sk_adrs);
            hash_adrs.set_chain(i);
            chain(ctx, &mut sk[..n], 0, W - 1, &mut hash_adrs);
            t.update(&sk[..n]);
        }

        sk.zeroize();
        t.finalize_into(out);
    }
}

/// Generate a WOTS+ signature of the n-byte `msg` into `sig` (len·n bytes).
///
/// FIPS 205, Algorithm 7: wots_sign(M, SK.seed, PK.seed, ADRS)
pub(crate) fn sign(ctx: &SecretContext<'_>, msg: &[u8], adrs: &Address, sig: &mut [u8]) {
    let n = ctx.n();
    debug_assert_eq!(msg.len(), n);
    debug_assert_eq!(sig.len(), ctx.params.wots_sig_size());

    let mut d = [0u32; MAX_WOTS_LEN];
    let len = digits(msg, &mut d);

    let mut sk_adrs = adrs.with_type(AdrsType::WotsPrf);
    let mut hash_adrs = *adrs;

    for (i, element) in sig.chunks_exact_mut(n).enumerate().take(len) {
        sk_adrs.set_chain(i as u32);
        ctx.prf(element, &sk_adrs);
        hash_adrs.set_chain(i as u32);
        chain(ctx, element, 0, d[i], &mut hash_adrs);
    }
}

/// Recompute the WOTS+ public key a signature commits to.
///
/// FIPS 205, Algorithm 8: wots_pkFromSig(sig, M, PK.seed, ADRS)
///
/// Each element is walked the remaining `15 - digit` steps to the chain top.
pub(crate) fn pk_from_sig(ctx: &PublicContext<'_>, sig: &[u8], msg: &[u8], adrs: &Address, out: &mut [u8]) {
    let n = ctx.n();
    debug_assert_eq!(msg.len(), n);
    debug_assert_eq!(sig.len(), ctx.params.wots_sig_size());

    let mut d = [0u32; MAX_WOTS_LEN];
    let len = digits(msg, &mut d);

    let mut hash_adrs = *adrs;
    let mut t = ctx.t(&adrs.with_type(AdrsType::WotsPk));
    let mut tmp = [0u8; MAX_N];

    for (i, element) in sig.chunks_exact(n).enumerate().take(len) {
        tmp[..n].copy_from_slice(element);
        hash_adrs.set_chain(i as u32);
        chain(ctx, &mut tmp[..n], d[i], W - 1 - d[i], &mut hash_adrs);
        t.update(&tmp[..n]);
    }

    t.finalize_into(out);
}

/// A WOTS_HASH address for key pair `keypair` inside the tree at `adrs`.
pub(crate) fn leaf_address(adrs: &Address, keypair: u32) -> Address {
    let mut leaf = *adrs;
    leaf.set_type_and_clear(AdrsType::WotsHash);
    leaf.set_keypair(keypair);
    leaf
}
