//! SLH-DSA key types.
//!
//! Encodings are fixed-length with no framing (FIPS 205, Section 9.1):
//! - public key: PK.seed ‖ PK.root (2n bytes)
//! - private key: SK.seed ‖ SK.prf ‖ PK.seed ‖ PK.root (4n bytes)
//!
//! The parameter set is not part of the encoding; decoding takes it
//! out of band.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::params::ParamId;
use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// An SLH-DSA public key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    param_id: ParamId,
    seed: Vec<u8>,
    root: Vec<u8>,
}

impl PublicKey {
    pub(crate) fn new(param_id: ParamId, seed: &[u8], root: &[u8]) -> Self {
        Self {
            param_id,
            seed: seed.to_vec(),
            root: root.to_vec(),
        }
    }

    /// Parameter set this key belongs to.
    pub fn param_id(&self) -> ParamId {
        self.param_id
    }

    /// PK.seed.
    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    /// PK.root, the root of the top hypertree layer.
    pub fn root(&self) -> &[u8] {
        &self.root
    }

    /// Encode as PK.seed ‖ PK.root.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.seed.len() + self.root.len());
        out.extend_from_slice(&self.seed);
        out.extend_from_slice(&self.root);
        out
    }

    /// Decode a public key of parameter set `id`.
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless `bytes` is exactly 2n
    /// bytes long.
    pub fn from_bytes(id: ParamId, bytes: &[u8]) -> Result<Self> {
        let expected = id.params().public_key_size();
        if bytes.len() != expected {
            return Err(Error::InvalidKeyLength {
                expected,
                actual: bytes.len(),
            });
        }
        let (seed, root) = bytes.split_at(id.params().n);
        Ok(Self::new(id, seed, root))
    }
}

/// An SLH-DSA private key.
///
/// Holds SK.seed and SK.prf together with the public key. The secret
/// halves are wiped on drop; `Debug` never prints them and equality is
/// constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    param_id: ParamId,
    seed: Vec<u8>,
    prf: Vec<u8>,
    #[zeroize(skip)]
    public: PublicKey,
}

impl PrivateKey {
    pub(crate) fn new(param_id: ParamId, seed: &[u8], prf: &[u8], public: PublicKey) -> Self {
        Self {
            param_id,
            seed: seed.to_vec(),
            prf: prf.to_vec(),
            public,
        }
    }

    /// Parameter set this key belongs to.
    pub fn param_id(&self) -> ParamId {
        self.param_id
    }

    /// The matching public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub(crate) fn seed(&self) -> &[u8] {
        &self.seed
    }

    pub(crate) fn prf(&self) -> &[u8] {
        &self.prf
    }

    /// Encode as SK.seed ‖ SK.prf ‖ PK.seed ‖ PK.root.
    ///
    /// The buffer is wiped when the returned value is dropped.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(Vec::with_capacity(4 * self.seed.len()));
        out.extend_from_slice(&self.seed);
        out.extend_from_slice(&self.prf);
        out.extend_from_slice(&self.public.seed);
        out.extend_from_slice(&self.public.root);
        out
    }

    /// Decode a private key of parameter set `id`.
    ///
    /// The embedded public key is taken as-is; it is not recomputed from
    /// SK.seed.
    pub fn from_bytes(id: ParamId, bytes: &[u8]) -> Result<Self> {
        let expected = id.params().private_key_size();
        if bytes.len() != expected {
            return Err(Error::InvalidKeyLength {
                expected,
                actual: bytes.len(),
            });
        }
        let n = id.params().n;
        let public = PublicKey::new(id, &bytes[2 * n..3 * n], &bytes[3 * n..]);
        Ok(Self::new(id, &bytes[..n], &bytes[n..2 * n], public))
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.param_id != other.param_id {
            return Choice::from(0);
        }
        self.seed.ct_eq(&other.seed) & self.prf.ct_eq(&other.prf) & Choice::from(u8::from(self.public == other.public))
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("param_id", &self.param_id)
            .field("secret", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}
