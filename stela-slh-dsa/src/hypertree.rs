//! Hypertree implementation.
//!
//! The hypertree is a multi-layer structure of XMSS trees that provides
//! the main key management mechanism in SLH-DSA. It has d layers,
//! each containing XMSS trees of height h'. Each tree's root is signed by
//! a WOTS+ key in the layer above; the single top tree's root is PK.root.
//!
//! FIPS 205, Algorithms 12-13.

use subtle::ConstantTimeEq;
use tracing::trace;
use zeroize::Zeroize;

use crate::address::TreeIndex;
use crate::hash::{PublicContext, SecretContext};
use crate::params::common::MAX_N;
use crate::treehash::NodeStack;
use crate::xmss;
use crate::Result;

/// Compute the hypertree root (the root of the top-layer XMSS tree).
pub(crate) fn root(ctx: &SecretContext<'_>, stack: &mut NodeStack, out: &mut [u8]) -> Result<()> {
    let mut adrs = ctx.address();
    adrs.set_layer(ctx.params.d as u32 - 1);
    adrs.set_tree(&TreeIndex::default());
    xmss::node(ctx, stack, 0, ctx.params.h_prime as u32, &adrs, out)
}

/// Generate a hypertree signature of the n-byte `msg` into `sig`.
///
/// FIPS 205, Algorithm 12: ht_sign(M, SK.seed, PK.seed, idx_tree, idx_leaf)
///
/// Layer 0 signs `msg` with the tree and leaf given; every higher layer
/// signs the root produced by the layer below, with its tree and leaf
/// taken from the next h' bits of `idx_tree`.
pub(crate) fn sign(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    msg: &[u8],
    idx_tree: TreeIndex,
    idx_leaf: u32,
    sig: &mut [u8],
) -> Result<()> {
    let n = ctx.n();
    let h_prime = ctx.params.h_prime as u32;
    debug_assert_eq!(sig.len(), ctx.params.ht_sig_size());

    let mut adrs = ctx.address();
    let mut tree = idx_tree;
    let mut leaf = idx_leaf;
    let mut current = [0u8; MAX_N];
    let mut root = [0u8; MAX_N];
    current[..n].copy_from_slice(msg);

    for (layer, layer_sig) in sig.chunks_exact_mut(ctx.params.xmss_sig_size()).enumerate() {
        adrs.set_layer(layer as u32);
        adrs.set_tree(&tree);
        xmss::sign(ctx, stack, &current[..n], leaf, &adrs, layer_sig, &mut root[..n])?;
        trace!(layer, leaf, "signed hypertree layer");

        current[..n].copy_from_slice(&root[..n]);
        leaf = tree.next_index(h_prime);
    }

    root.zeroize();
    Ok(())
}

/// Verify a hypertree signature against `pk_root`.
///
/// FIPS 205, Algorithm 13: ht_verify(M, SIG_HT, PK.seed, idx_tree, idx_leaf, PK.root)
pub(crate) fn verify(
    ctx: &PublicContext<'_>,
    msg: &[u8],
    sig: &[u8],
    idx_tree: TreeIndex,
    idx_leaf: u32,
    pk_root: &[u8],
) -> bool {
    let n = ctx.n();
    let h_prime = ctx.params.h_prime as u32;
    debug_assert_eq!(sig.len(), ctx.params.ht_sig_size());

    let mut adrs = ctx.address();
    let mut tree = idx_tree;
    let mut leaf = idx_leaf;
    let mut node = [0u8; MAX_N];
    let mut next = [0u8; MAX_N];
    node[..n].copy_from_slice(msg);

    for (layer, layer_sig) in sig.chunks_exact(ctx.params.xmss_sig_size()).enumerate() {
        adrs.set_layer(layer as u32);
        adrs.set_tree(&tree);
        xmss::pk_from_sig(ctx, layer_sig, &node[..n], leaf, &adrs, &mut next[..n]);
        node[..n].copy_from_slice(&next[..n]);
        leaf = tree.next_index(h_prime);
    }

    node[..n].ct_eq(pk_root).into()
}
