//! Parallel implementations of SLH-DSA building blocks.
//!
//! Rayon is used where the work splits into independent pieces:
//! - **WOTS+**: the len chains of a public key
//! - **FORS**: the k trees of a signature
//!
//! Both produce output byte-identical to the sequential code paths.

use rayon::prelude::*;

use crate::address::{Address, AdrsType};
use crate::fors::{self, MAX_FORS_TREES};
use crate::hash::SecretContext;
use crate::params::common::W;
use crate::treehash::NodeStack;
use crate::wots;
use crate::Result;

/// Generate a WOTS+ public key, computing the chains in parallel.
pub(crate) fn wots_pk_gen(ctx: &SecretContext<'_>, adrs: &Address, out: &mut [u8]) {
    let n = ctx.n();
    let sk_adrs_base = adrs.with_type(AdrsType::WotsPrf);

    let mut tops = vec![0u8; ctx.params.wots_len() * n];
    tops.par_chunks_mut(n).enumerate().for_each(|(i, chunk)| {
        let mut sk_adrs = sk_adrs_base;
        sk_adrs.set_chain(i as u32);
        ctx.prf(chunk, &sk_adrs);

        let mut hash_adrs = *adrs;
        hash_adrs.set_chain(i as u32);
        wots::chain(ctx, chunk, 0, W - 1, &mut hash_adrs);
    });

    let mut t = ctx.t(&adrs.with_type(AdrsType::WotsPk));
    t.update(&tops);
    t.finalize_into(out);
}

/// Generate a FORS signature, signing the k trees in parallel.
///
/// Each worker owns its own treehash stack.
pub(crate) fn fors_sign(
    ctx: &SecretContext<'_>,
    md: &[u8],
    adrs: &Address,
    sig: &mut [u8],
    pk: &mut [u8],
) -> Result<()> {
    let n = ctx.n();
    let a = ctx.params.a;
    let mut d = [0u32; MAX_FORS_TREES];
    let k = fors::digits(ctx, md, &mut d);

    let mut roots = vec![0u8; k * n];
    sig.par_chunks_mut((a + 1) * n)
        .zip(roots.par_chunks_mut(n))
        .enumerate()
        .try_for_each(|(i, (tree_sig, root))| {
            let mut stack = NodeStack::new(n, a as u32);
            fors::sign_tree(ctx, &mut stack, i as u32, d[i], adrs, tree_sig, root)
        })?;

    let mut t = ctx.t(&adrs.with_type(AdrsType::ForsRoots));
    t.update(&roots);
    t.finalize_into(pk);
    Ok(())
}
