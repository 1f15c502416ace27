//! Treehash: Merkle roots and authentication paths in O(height) memory.
//!
//! Leaves are produced left to right. Each new node is merged with the top of
//! a bounded stack while the heights match, so the tree is never
//! materialized. The same pass records the siblings along the path to a
//! target leaf, which is exactly that leaf's authentication path.
//!
//! XMSS (one tree of height h') and FORS (k trees of height a, indexed as
//! one forest) both run through [`treehash`]; they differ only in how a leaf
//! and an internal node are hashed.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::params::common::MAX_N;
use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Shape of the forest a treehash request is checked against.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TreeShape {
    /// Height of each tree.
    pub height: u32,
    /// Number of side-by-side trees sharing one index space.
    pub trees: u32,
}

impl TreeShape {
    /// Whether node `i` at height `z` exists in this forest.
    fn contains(&self, i: u32, z: u32) -> bool {
        z <= self.height && u64::from(i) < u64::from(self.trees) << (self.height - z)
    }
}

/// Bounded stack of height-tagged nodes.
///
/// Heights strictly decrease from bottom to top, so no two entries ever
/// share a height and a tree of height z never needs more than z entries.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct NodeStack {
    nodes: Vec<u8>,
    heights: Vec<u32>,
    n: usize,
    capacity: usize,
}

impl NodeStack {
    /// Stack for trees of height up to `max_height`.
    pub(crate) fn new(n: usize, max_height: u32) -> Self {
        let capacity = (max_height as usize).max(1);
        Self {
            nodes: Vec::with_capacity(capacity * n),
            heights: Vec::with_capacity(capacity),
            n,
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heights.len()
    }

    fn top_height(&self) -> Option<u32> {
        self.heights.last().copied()
    }

    fn push(&mut self, node: &[u8], height: u32) {
        debug_assert!(self.len() < self.capacity, "treehash stack overflow");
        debug_assert!(self.top_height().map_or(true, |top| top > height));
        self.nodes.extend_from_slice(node);
        self.heights.push(height);
    }

    fn pop_into(&mut self, out: &mut [u8]) -> Option<u32> {
        let height = self.heights.pop()?;
        let start = self.nodes.len() - self.n;
        out.copy_from_slice(&self.nodes[start..]);
        self.nodes[start..].zeroize();
        self.nodes.truncate(start);
        Some(height)
    }

    fn clear(&mut self) {
        self.nodes.zeroize();
        self.heights.clear();
    }
}

/// Authentication path request: the target leaf and z·n bytes to fill.
pub(crate) struct AuthPath<'a> {
    pub leaf: u32,
    pub out: &'a mut [u8],
}

/// Compute node `i` at height `z` of `shape`, writing it to `root`.
///
/// `leaf(index, out)` produces leaf `index`; `node(height, index, left,
/// right, out)` produces an internal node. With `auth` set, the siblings on
/// the path from `auth.leaf` up to height z are written to `auth.out`,
/// lowest first. Indices are global across the forest.
pub(crate) fn treehash<L, N>(
    stack: &mut NodeStack,
    shape: TreeShape,
    i: u32,
    z: u32,
    root: &mut [u8],
    mut auth: Option<AuthPath<'_>>,
    mut leaf: L,
    mut node: N,
) -> Result<()>
where
    L: FnMut(u32, &mut [u8]),
    N: FnMut(u32, u32, &[u8], &[u8], &mut [u8]),
{
    if !shape.contains(i, z) {
        return Err(Error::InvalidTreeIndex { index: i, height: z });
    }
    let first = i << z;
    if let Some(path) = &auth {
        if path.leaf >> z != i || path.out.len() != z as usize * stack.n {
            return Err(Error::InvalidTreeIndex {
                index: path.leaf,
                height: 0,
            });
        }
    }

    let n = stack.n;
    stack.clear();
    let mut current = [0u8; MAX_N];
    let mut left = [0u8; MAX_N];
    let mut parent = [0u8; MAX_N];

    for offset in 0..1u32 << z {
        let mut li = first + offset;
        let mut lz = 0u32;
        leaf(li, &mut current[..n]);

        loop {
            if let Some(path) = auth.as_mut() {
                if lz < z && li == (path.leaf >> lz) ^ 1 {
                    let at = lz as usize * n;
                    path.out[at..at + n].copy_from_slice(&current[..n]);
                }
            }
            if stack.top_height() != Some(lz) {
                break;
            }
            stack.pop_into(&mut left[..n]);
            li >>= 1;
            lz += 1;
            node(lz, li, &left[..n], &current[..n], &mut parent[..n]);
            current[..n].copy_from_slice(&parent[..n]);
        }

        stack.push(&current[..n], lz);
    }

    let popped = stack.pop_into(root);
    debug_assert_eq!(popped, Some(z));
    debug_assert_eq!(stack.len(), 0);

    current.zeroize();
    left.zeroize();
    parent.zeroize();
    Ok(())
}
