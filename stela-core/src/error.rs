//! Error types shared by the stela signature crates.

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during key generation, signing, or decoding.
///
/// Signature verification never produces an error; it reports `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The random number generator failed to produce output.
    #[error("random number generator failure")]
    Randomness,

    /// Invalid key length provided.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Invalid signature length.
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// A seed or randomizer input has the wrong length.
    #[error("invalid seed length: expected {expected}, got {actual}")]
    InvalidSeedLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// A key or signature belongs to a different parameter set.
    #[error("parameter set mismatch: expected id {expected}, got id {actual}")]
    ParameterMismatch {
        /// Identifier of the parameter set in use.
        expected: u8,
        /// Identifier carried by the offending value.
        actual: u8,
    },

    /// Parameter set not supported.
    #[error("unsupported parameter set")]
    UnsupportedParameterSet,

    /// The signing context exceeds 255 bytes.
    #[error("context is {len} bytes, at most 255 are allowed")]
    ContextTooLong {
        /// Length of the rejected context.
        len: usize,
    },

    /// A tree node was requested outside the tree it belongs to.
    ///
    /// Unreachable from well-formed input; indicates an internal fault.
    #[error("tree node {index} at height {height} is out of range")]
    InvalidTreeIndex {
        /// Requested node index.
        index: u32,
        /// Requested node height.
        height: u32,
    },
}
