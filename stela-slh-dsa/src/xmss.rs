//! XMSS (eXtended Merkle Signature Scheme) implementation.
//!
//! XMSS aggregates 2^h' WOTS+ key pairs under one Merkle root. Signing
//! computes the root and the leaf's authentication path in a single
//! treehash pass.
//!
//! FIPS 205, Algorithms 9-11.

use crate::address::{Address, AdrsType};
use crate::hash::{PublicContext, SecretContext};
use crate::params::common::MAX_N;
use crate::treehash::{treehash, AuthPath, NodeStack, TreeShape};
use crate::wots;
use crate::Result;

fn shape(ctx: &PublicContext<'_>) -> TreeShape {
    TreeShape {
        height: ctx.params.h_prime as u32,
        trees: 1,
    }
}

/// Run treehash over the XMSS tree at `adrs` (layer and tree set).
fn run(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    i: u32,
    z: u32,
    adrs: &Address,
    root: &mut [u8],
    auth: Option<AuthPath<'_>>,
) -> Result<()> {
    let mut node_adrs = *adrs;
    node_adrs.set_type_and_clear(AdrsType::Tree);

    treehash(
        stack,
        shape(ctx),
        i,
        z,
        root,
        auth,
        |index, out| wots::pk_gen(ctx, &wots::leaf_address(adrs, index), out),
        |height, index, left, right, out| {
            node_adrs.set_tree_height(height);
            node_adrs.set_tree_index(index);
            ctx.h(out, &node_adrs, left, right);
        },
    )
}

/// Compute the XMSS node `i` at height `z`.
///
/// FIPS 205, Algorithm 9: xmss_node(SK.seed, i, z, PK.seed, ADRS)
pub(crate) fn node(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    i: u32,
    z: u32,
    adrs: &Address,
    out: &mut [u8],
) -> Result<()> {
    run(ctx, stack, i, z, adrs, out, None)
}

/// Sign an n-byte message with the WOTS+ key at leaf `idx`.
///
/// FIPS 205, Algorithm 10: xmss_sign(M, SK.seed, idx, PK.seed, ADRS)
///
/// Writes the signature (WOTS+ signature ‖ auth path) to `sig` and the
/// tree's root to `root`.
pub(crate) fn sign(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    msg: &[u8],
    idx: u32,
    adrs: &Address,
    sig: &mut [u8],
    root: &mut [u8],
) -> Result<()> {
    let (wots_sig, auth) = sig.split_at_mut(ctx.params.wots_sig_size());
    let height = ctx.params.h_prime as u32;
    run(ctx, stack, 0, height, adrs, root, Some(AuthPath { leaf: idx, out: auth }))?;
    wots::sign(ctx, msg, &wots::leaf_address(adrs, idx), wots_sig);
    Ok(())
}

/// Recompute the root an XMSS signature commits to.
///
/// FIPS 205, Algorithm 11: xmss_pkFromSig(idx, SIG_XMSS, M, PK.seed, ADRS)
pub(crate) fn pk_from_sig(
    ctx: &PublicContext<'_>,
    sig: &[u8],
    msg: &[u8],
    idx: u32,
    adrs: &Address,
    out: &mut [u8],
) {
    let n = ctx.n();
    let (wots_sig, auth) = sig.split_at(ctx.params.wots_sig_size());

    let mut node = [0u8; MAX_N];
    let mut next = [0u8; MAX_N];
    wots::pk_from_sig(ctx, wots_sig, msg, &wots::leaf_address(adrs, idx), &mut node[..n]);

    let mut tree_adrs = *adrs;
    tree_adrs.set_type_and_clear(AdrsType::Tree);
    let mut tree_idx = idx;

    for (k, sibling) in auth.chunks_exact(n).enumerate() {
        tree_idx >>= 1;
        tree_adrs.set_tree_height(k as u32 + 1);
        tree_adrs.set_tree_index(tree_idx);
        if (idx >> k) & 1 == 0 {
            ctx.h(&mut next[..n], &tree_adrs, &node[..n], sibling);
        } else {
            ctx.h(&mut next[..n], &tree_adrs, sibling, &node[..n]);
        }
        node[..n].copy_from_slice(&next[..n]);
    }

    out.copy_from_slice(&node[..n]);
}
