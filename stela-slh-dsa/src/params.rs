//! SLH-DSA parameter sets as defined in FIPS 205.
//!
//! All 12 parameter sets live in one immutable table indexed by [`ParamId`].
//! Each entry fixes the tree shape and resolves its hash suite once, so no
//! signing or verification call re-decides which hash family to use.

use core::fmt;
use core::str::FromStr;

use crate::hash::HashSuite;
use crate::hash_sha2::{SHA2_CAT1, SHA2_CAT35};
use crate::hash_shake::SHAKE256;
use crate::{Error, Result};

/// Common parameters shared across all SLH-DSA variants.
pub mod common {
    /// Winternitz parameter (always 16 for SLH-DSA).
    pub const W: u32 = 16;

    /// Log2 of Winternitz parameter.
    pub const LG_W: usize = 4;

    /// Number of WOTS+ checksum digits.
    pub const WOTS_LEN2: usize = 3;

    /// Largest security parameter n over all sets.
    pub const MAX_N: usize = 32;

    /// Maximum context length accepted by the message wrapper.
    pub const MAX_CONTEXT_LEN: usize = 255;
}

/// Hash family backing a parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashFamily {
    /// SHA-256 / SHA-512 with compressed 22-byte addresses.
    Sha2,
    /// SHAKE256 with full 32-byte addresses.
    Shake,
}

/// Identifier of one of the 12 standardized parameter sets.
///
/// The discriminants are stable and double as the wire identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ParamId {
    /// SLH-DSA-SHA2-128s
    Sha2_128s = 1,
    /// SLH-DSA-SHAKE-128s
    Shake128s = 2,
    /// SLH-DSA-SHA2-128f
    Sha2_128f = 3,
    /// SLH-DSA-SHAKE-128f
    Shake128f = 4,
    /// SLH-DSA-SHA2-192s
    Sha2_192s = 5,
    /// SLH-DSA-SHAKE-192s
    Shake192s = 6,
    /// SLH-DSA-SHA2-192f
    Sha2_192f = 7,
    /// SLH-DSA-SHAKE-192f
    Shake192f = 8,
    /// SLH-DSA-SHA2-256s
    Sha2_256s = 9,
    /// SLH-DSA-SHAKE-256s
    Shake256s = 10,
    /// SLH-DSA-SHA2-256f
    Sha2_256f = 11,
    /// SLH-DSA-SHAKE-256f
    Shake256f = 12,
}

impl ParamId {
    /// Every supported identifier, in table order.
    pub const ALL: [ParamId; 12] = [
        ParamId::Sha2_128s,
        ParamId::Shake128s,
        ParamId::Sha2_128f,
        ParamId::Shake128f,
        ParamId::Sha2_192s,
        ParamId::Shake192s,
        ParamId::Sha2_192f,
        ParamId::Shake192f,
        ParamId::Sha2_256s,
        ParamId::Shake256s,
        ParamId::Sha2_256f,
        ParamId::Shake256f,
    ];

    /// The parameter set this identifier selects.
    #[must_use]
    pub fn params(self) -> &'static ParameterSet {
        &PARAMS[self as usize - 1]
    }

    /// Full standardized name, e.g. `SLH-DSA-SHAKE-256s`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Whether this is a "fast" (f) set: larger signatures, quicker signing.
    #[must_use]
    pub fn is_fast(self) -> bool {
        self.name().ends_with('f')
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ParamId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        ParamId::ALL
            .into_iter()
            .find(|id| *id as u8 == value)
            .ok_or(Error::UnsupportedParameterSet)
    }
}

impl From<ParamId> for u8 {
    fn from(id: ParamId) -> u8 {
        id as u8
    }
}

impl FromStr for ParamId {
    type Err = Error;

    /// Parses a name case-insensitively, with or without the `SLH-DSA-` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let short = match s.get(..8) {
            Some(prefix) if prefix.eq_ignore_ascii_case("SLH-DSA-") => &s[8..],
            _ => s,
        };
        ParamId::ALL
            .into_iter()
            .find(|id| id.name()[8..].eq_ignore_ascii_case(short))
            .ok_or(Error::UnsupportedParameterSet)
    }
}

/// Immutable configuration of one SLH-DSA instance.
///
/// Invariant: `h == d * h_prime`.
pub struct ParameterSet {
    /// Identifier of this set.
    pub id: ParamId,
    /// Full standardized name.
    pub name: &'static str,
    /// Security parameter: hash output length in bytes.
    pub n: usize,
    /// Total hypertree height.
    pub h: usize,
    /// Number of hypertree layers.
    pub d: usize,
    /// Height of each XMSS tree (h / d).
    pub h_prime: usize,
    /// FORS tree height.
    pub a: usize,
    /// Number of FORS trees.
    pub k: usize,
    /// Message digest length in bytes.
    pub m: usize,
    /// Hash family.
    pub family: HashFamily,
    pub(crate) hash: &'static dyn HashSuite,
}

impl fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSet")
            .field("name", &self.name)
            .field("n", &self.n)
            .field("h", &self.h)
            .field("d", &self.d)
            .field("h_prime", &self.h_prime)
            .field("a", &self.a)
            .field("k", &self.k)
            .field("m", &self.m)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl ParameterSet {
    /// WOTS+ len1: base-16 digits of an n-byte message.
    #[must_use]
    pub const fn wots_len1(&self) -> usize {
        2 * self.n
    }

    /// WOTS+ len: message digits plus checksum digits.
    #[must_use]
    pub const fn wots_len(&self) -> usize {
        self.wots_len1() + common::WOTS_LEN2
    }

    /// WOTS+ signature size in bytes.
    #[must_use]
    pub const fn wots_sig_size(&self) -> usize {
        self.wots_len() * self.n
    }

    /// XMSS signature size: WOTS+ signature plus h' authentication nodes.
    #[must_use]
    pub const fn xmss_sig_size(&self) -> usize {
        self.wots_sig_size() + self.h_prime * self.n
    }

    /// Hypertree signature size: one XMSS signature per layer.
    #[must_use]
    pub const fn ht_sig_size(&self) -> usize {
        self.d * self.xmss_sig_size()
    }

    /// FORS signature size: k pairs of secret value and a-node path.
    #[must_use]
    pub const fn fors_sig_size(&self) -> usize {
        self.k * (self.a + 1) * self.n
    }

    /// Bytes of the digest consumed by FORS.
    #[must_use]
    pub const fn fors_msg_size(&self) -> usize {
        (self.k * self.a).div_ceil(8)
    }

    /// Bytes of the digest selecting the bottom-layer tree.
    #[must_use]
    pub const fn tree_idx_size(&self) -> usize {
        (self.h - self.h_prime).div_ceil(8)
    }

    /// Bytes of the digest selecting the leaf in that tree.
    #[must_use]
    pub const fn leaf_idx_size(&self) -> usize {
        self.h_prime.div_ceil(8)
    }

    /// Total signature size in bytes.
    #[must_use]
    pub const fn signature_size(&self) -> usize {
        self.n + self.fors_sig_size() + self.ht_sig_size()
    }

    /// Public key size: PK.seed ‖ PK.root.
    #[must_use]
    pub const fn public_key_size(&self) -> usize {
        2 * self.n
    }

    /// Private key size: SK.seed ‖ SK.prf ‖ PK.seed ‖ PK.root.
    #[must_use]
    pub const fn private_key_size(&self) -> usize {
        4 * self.n
    }

    /// Seed length accepted by key derivation.
    #[must_use]
    pub const fn seed_size(&self) -> usize {
        self.private_key_size()
    }

    /// Address length on the wire: 22 bytes for SHA-2, 32 for SHAKE.
    #[must_use]
    pub const fn address_size(&self) -> usize {
        match self.family {
            HashFamily::Sha2 => 22,
            HashFamily::Shake => 32,
        }
    }
}

macro_rules! parameter_set {
    ($id:ident, $name:literal, $family:ident, $hash:expr,
     n = $n:literal, h = $h:literal, d = $d:literal, hp = $hp:literal,
     a = $a:literal, k = $k:literal, m = $m:literal) => {
        ParameterSet {
            id: ParamId::$id,
            name: $name,
            n: $n,
            h: $h,
            d: $d,
            h_prime: $hp,
            a: $a,
            k: $k,
            m: $m,
            family: HashFamily::$family,
            hash: $hash,
        }
    };
}

/// FIPS 205, Table 2, in [`ParamId`] order.
static PARAMS: [ParameterSet; 12] = [
    parameter_set!(Sha2_128s, "SLH-DSA-SHA2-128s", Sha2, &SHA2_CAT1,
        n = 16, h = 63, d = 7, hp = 9, a = 12, k = 14, m = 30),
    parameter_set!(Shake128s, "SLH-DSA-SHAKE-128s", Shake, &SHAKE256,
        n = 16, h = 63, d = 7, hp = 9, a = 12, k = 14, m = 30),
    parameter_set!(Sha2_128f, "SLH-DSA-SHA2-128f", Sha2, &SHA2_CAT1,
        n = 16, h = 66, d = 22, hp = 3, a = 6, k = 33, m = 34),
    parameter_set!(Shake128f, "SLH-DSA-SHAKE-128f", Shake, &SHAKE256,
        n = 16, h = 66, d = 22, hp = 3, a = 6, k = 33, m = 34),
    parameter_set!(Sha2_192s, "SLH-DSA-SHA2-192s", Sha2, &SHA2_CAT35,
        n = 24, h = 63, d = 7, hp = 9, a = 14, k = 17, m = 39),
    parameter_set!(Shake192s, "SLH-DSA-SHAKE-192s", Shake, &SHAKE256,
        n = 24, h = 63, d = 7, hp = 9, a = 14, k = 17, m = 39),
    parameter_set!(Sha2_192f, "SLH-DSA-SHA2-192f", Sha2, &SHA2_CAT35,
        n = 24, h = 66, d = 22, hp = 3, a = 8, k = 33, m = 42),
    parameter_set!(Shake192f, "SLH-DSA-SHAKE-192f", Shake, &SHAKE256,
        n = 24, h = 66, d = 22, hp = 3, a = 8, k = 33, m = 42),
    parameter_set!(Sha2_256s, "SLH-DSA-SHA2-256s", Sha2, &SHA2_CAT35,
        n = 32, h = 64, d = 8, hp = 8, a = 14, k = 22, m = 47),
    parameter_set!(Shake256s, "SLH-DSA-SHAKE-256s", Shake, &SHAKE256,
        n = 32, h = 64, d = 8, hp = 8, a = 14, k = 22, m = 47),
    parameter_set!(Sha2_256f, "SLH-DSA-SHA2-256f", Sha2, &SHA2_CAT35,
        n = 32, h = 68, d = 17, hp = 4, a = 9, k = 35, m = 49),
    parameter_set!(Shake256f, "SLH-DSA-SHAKE-256f", Shake, &SHAKE256,
        n = 32, h = 68, d = 17, hp = 4, a = 9, k = 35, m = 49),
];
