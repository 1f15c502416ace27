//! SLH-DSA (FIPS 205) Implementation
//!
//! This crate provides a pure Rust implementation of the SLH-DSA digital signature
//! algorithm as specified in FIPS 205. SLH-DSA is a stateless hash-based signature
//! scheme, providing post-quantum security based solely on the security of hash functions.
//!
//! # Supported Parameter Sets
//!
//! All twelve sets are available at runtime through [`ParamId`].
//!
//! | Variant | Security Level | Public Key | Signature |
//! |---------|----------------|------------|-----------|
//! | SLH-DSA-{SHA2,SHAKE}-128s | Level 1 | 32 bytes | 7,856 bytes |
//! | SLH-DSA-{SHA2,SHAKE}-128f | Level 1 | 32 bytes | 17,088 bytes |
//! | SLH-DSA-{SHA2,SHAKE}-192s | Level 3 | 48 bytes | 16,224 bytes |
//! | SLH-DSA-{SHA2,SHAKE}-192f | Level 3 | 48 bytes | 35,664 bytes |
//! | SLH-DSA-{SHA2,SHAKE}-256s | Level 5 | 64 bytes | 29,792 bytes |
//! | SLH-DSA-{SHA2,SHAKE}-256f | Level 5 | 64 bytes | 49,856 bytes |
//!
//! The "s" variants produce smaller signatures but are slower to sign.
//! The "f" variants are faster to sign but produce larger signatures.
//!
//! # Architecture
//!
//! SLH-DSA combines three main components:
//! - **WOTS+**: Winternitz One-Time Signature scheme for efficient one-time signing
//! - **FORS**: Forest of Random Subsets for few-time message signing
//! - **Hypertree**: Multi-layer XMSS tree structure for key management
//!
//! Merkle roots and authentication paths for both XMSS and FORS come from a
//! single memory-bounded treehash routine.
//!
//! # Example
//!
//! ```rust
//! use stela_slh_dsa::{keygen, sign_randomized, verify, ParamId};
//!
//! let mut rng = rand::rng();
//! let sk = keygen(ParamId::Shake128f, &mut rng).unwrap();
//!
//! let message = b"Hello, post-quantum world!";
//! let signature = sign_randomized(&sk, &mut rng, message, b"").unwrap();
//!
//! assert!(verify(sk.public_key(), message, &signature, b""));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
// Clippy allowances for cryptographic code patterns
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::wildcard_imports,
    clippy::too_many_lines,
    clippy::items_after_statements,
    clippy::needless_range_loop
)]

// alloc is available in both std and no_std environments
extern crate alloc;

// Core modules
mod address;
mod hash;
/// SHA2-based hash function implementations.
pub mod hash_sha2;
/// SHAKE-based hash function implementations.
pub mod hash_shake;
/// SLH-DSA parameter sets.
pub mod params;
mod utils;

// Building blocks
mod fors;
mod hypertree;
mod treehash;
mod wots;
mod xmss;

// Parallel implementations (requires rayon)
#[cfg(feature = "parallel")]
mod parallel;

// Keys, signatures and the signing entry points
mod keys;
mod message;
mod sign;
mod signature;

// Public exports
pub use address::{Address, AdrsType, TreeIndex};
pub use hash::{HashSuite, Tlen};
pub use keys::{PrivateKey, PublicKey};
pub use message::{encode_message, sign_deterministic, sign_randomized, verify};
pub use params::{HashFamily, ParamId, ParameterSet};
pub use sign::{derive_key, keygen, keygen_internal, sign_internal, verify_internal};
pub use signature::Signature;
pub use utils::{base_2b, to_int};

// Re-export core types
pub use stela_core::{Error, Result};
