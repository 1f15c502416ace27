//! # Stela Core
//!
//! Shared pieces of the stela post-quantum signature library.
//!
//! This crate provides:
//! - The common [`Error`] type and [`Result`] alias
//! - Secure memory handling with zeroize integration
//! - Constant-time comparison via `subtle`

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;

pub use error::{Error, Result};

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Re-export subtle for constant-time operations.
pub use subtle;
