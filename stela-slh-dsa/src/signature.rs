//! SLH-DSA signature container.
//!
//! Layout: R (n) ‖ SIG_FORS (k·(1+a)·n) ‖ SIG_HT (d·(len+h')·n).

use core::fmt;

use crate::params::ParamId;
use crate::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// An encoded SLH-DSA signature of a fixed parameter set.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    param_id: ParamId,
    bytes: Vec<u8>,
}

impl Signature {
    pub(crate) fn new(param_id: ParamId, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), param_id.params().signature_size());
        Self { param_id, bytes }
    }

    /// Parameter set this signature was produced under.
    pub fn param_id(&self) -> ParamId {
        self.param_id
    }

    /// The encoded signature.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the signature, returning its encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Wrap an encoded signature of parameter set `id`.
    ///
    /// Only the length is checked; validity is up to verification.
    pub fn from_bytes(id: ParamId, bytes: &[u8]) -> Result<Self> {
        let expected = id.params().signature_size();
        if bytes.len() != expected {
            return Err(Error::InvalidSignatureLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            param_id: id,
            bytes: bytes.to_vec(),
        })
    }
}

/// Borrowed (R, SIG_FORS, SIG_HT) view of a correctly sized signature.
pub(crate) fn split(id: ParamId, sig: &[u8]) -> (&[u8], &[u8], &[u8]) {
    let p = id.params();
    let (r, rest) = sig.split_at(p.n);
    let (fors, ht) = rest.split_at(p.fors_sig_size());
    (r, fors, ht)
}

/// Mutable counterpart of [`split`].
pub(crate) fn split_mut(id: ParamId, sig: &mut [u8]) -> (&mut [u8], &mut [u8], &mut [u8]) {
    let p = id.params();
    let (r, rest) = sig.split_at_mut(p.n);
    let (fors, ht) = rest.split_at_mut(p.fors_sig_size());
    (r, fors, ht)
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("param_id", &self.param_id)
            .field("len", &self.bytes.len())
            .finish()
    }
}
