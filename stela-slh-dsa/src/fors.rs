//! FORS (Forest of Random Subsets) implementation.
//!
//! FORS is a few-time signature scheme that signs the message digest in
//! SLH-DSA. The digest is split into k digits of a bits; digit i selects
//! one leaf of tree i, which is revealed together with its authentication
//! path. The k trees share one index space: leaf j of tree i has global
//! index i·2^a + j.
//!
//! FIPS 205, Algorithms 14-17.

use zeroize::Zeroize;

use crate::address::{Address, AdrsType};
use crate::hash::{PublicContext, SecretContext};
use crate::params::common::MAX_N;
use crate::treehash::{treehash, AuthPath, NodeStack, TreeShape};
use crate::utils::base_2b;
use crate::Result;

/// Largest k over all parameter sets.
pub(crate) const MAX_FORS_TREES: usize = 35;

/// Split the digest into k leaf selectors of a bits each.
pub(crate) fn digits(ctx: &PublicContext<'_>, md: &[u8], out: &mut [u32; MAX_FORS_TREES]) -> usize {
    let k = ctx.params.k;
    base_2b(md, ctx.params.a as u32, &mut out[..k]);
    k
}

/// Generate FORS secret value `index` (global leaf index).
///
/// FIPS 205, Algorithm 14: fors_skGen(SK.seed, PK.seed, ADRS, idx)
fn sk_gen(ctx: &SecretContext<'_>, adrs: &Address, index: u32, out: &mut [u8]) {
    let mut sk_adrs = adrs.with_type(AdrsType::ForsPrf);
    sk_adrs.set_tree_index(index);
    ctx.prf(out, &sk_adrs);
}

/// Compute the root of tree `tree` and, with `auth`, a leaf's path.
///
/// FIPS 205, Algorithm 15: fors_node(SK.seed, i, z, PK.seed, ADRS)
fn tree_root(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    tree: u32,
    adrs: &Address,
    root: &mut [u8],
    auth: Option<AuthPath<'_>>,
) -> Result<()> {
    let n = ctx.n();
    let shape = TreeShape {
        height: ctx.params.a as u32,
        trees: ctx.params.k as u32,
    };
    let mut leaf_adrs = adrs.with_type(AdrsType::ForsTree);
    let mut node_adrs = leaf_adrs;

    treehash(
        stack,
        shape,
        tree,
        shape.height,
        root,
        auth,
        |index, out| {
            let mut sk = [0u8; MAX_N];
            sk_gen(ctx, adrs, index, &mut sk[..n]);
            leaf_adrs.set_tree_index(index);
            ctx.f(out, &leaf_adrs, &sk[..n]);
            sk.zeroize();
        },
        |height, index, left, right, out| {
            node_adrs.set_tree_height(height);
            node_adrs.set_tree_index(index);
            ctx.h(out, &node_adrs, left, right);
        },
    )
}

/// Sign tree `tree` at leaf selector `digit` into `tree_sig`
/// (secret value ‖ auth path) and write its root to `root`.
pub(crate) fn sign_tree(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    tree: u32,
    digit: u32,
    adrs: &Address,
    tree_sig: &mut [u8],
    root: &mut [u8],
) -> Result<()> {
    let n = ctx.n();
    let leaf = (tree << ctx.params.a) + digit;
    let (sk, auth) = tree_sig.split_at_mut(n);
    sk_gen(ctx, adrs, leaf, sk);
    tree_root(ctx, stack, tree, adrs, root, Some(AuthPath { leaf, out: auth }))
}

/// Generate a FORS signature of the digest `md` into `sig`.
///
/// FIPS 205, Algorithm 16: fors_sign(md, SK.seed, PK.seed, ADRS)
///
/// `adrs` carries the layer-0 tree and key pair of the signing leaf. The
/// FORS public key is compressed from the k roots computed along the way
/// and written to `pk`, so the caller need not recompute it from `sig`.
pub(crate) fn sign(
    ctx: &SecretContext<'_>,
    stack: &mut NodeStack,
    md: &[u8],
    adrs: &Address,
    sig: &mut [u8],
    pk: &mut [u8],
) -> Result<()> {
    debug_assert_eq!(sig.len(), ctx.params.fors_sig_size());

    #[cfg(feature = "parallel")]
    {
        let _ = stack;
        crate::parallel::fors_sign(ctx, md, adrs, sig, pk)
    }

    #[cfg(not(feature = "parallel"))]
    {
        let n = ctx.n();
        let mut d = [0u32; MAX_FORS_TREES];
        digits(ctx, md, &mut d);

        let mut t = ctx.t(&adrs.with_type(AdrsType::ForsRoots));
        let mut root = [0u8; MAX_N];
        let tree_sig_size = (ctx.params.a + 1) * n;

        for (i, tree_sig) in sig.chunks_exact_mut(tree_sig_size).enumerate() {
            sign_tree(ctx, stack, i as u32, d[i], adrs, tree_sig, &mut root[..n])?;
            t.update(&root[..n]);
        }

        t.finalize_into(pk);
        Ok(())
    }
}

/// Recompute the FORS public key from a signature.
///
/// FIPS 205, Algorithm 17: fors_pkFromSig(SIG_FORS, md, PK.seed, ADRS)
pub(crate) fn pk_from_sig(ctx: &PublicContext<'_>, sig: &[u8], md: &[u8], adrs: &Address, out: &mut [u8]) {
    let n = ctx.n();
    let a = ctx.params.a;
    debug_assert_eq!(sig.len(), ctx.params.fors_sig_size());

    let mut d = [0u32; MAX_FORS_TREES];
    digits(ctx, md, &mut d);

    let mut tree_adrs = adrs.with_type(AdrsType::ForsTree);
    let mut t = ctx.t(&adrs.with_type(AdrsType::ForsRoots));
    let mut node = [0u8; MAX_N];
    let mut next = [0u8; MAX_N];

    for (i, tree_sig) in sig.chunks_exact((a + 1) * n).enumerate() {
        let (sk, auth) = tree_sig.split_at(n);
        let leaf = ((i as u32) << a) + d[i];

        tree_adrs.set_tree_height(0);
        tree_adrs.set_tree_index(leaf);
        ctx.f(&mut node[..n], &tree_adrs, sk);

        let mut index = leaf;
        for (j, sibling) in auth.chunks_exact(n).enumerate() {
            index >>= 1;
            tree_adrs.set_tree_height(j as u32 + 1);
            tree_adrs.set_tree_index(index);
            if (leaf >> j) & 1 == 0 {
                ctx.h(&mut next[..n], &tree_adrs, &node[..n], sibling);
            } else {
                ctx.h(&mut next[..n], &tree_adrs, sibling, &node[..n]);
            }
            node[..n].copy_from_slice(&next[..n]);
        }

        t.update(&node[..n]);
    }

    t.finalize_into(out);
}
