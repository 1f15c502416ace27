//! Shared fixtures for the stela benchmarks.

/// Message signed and verified by every benchmark.
pub const BENCH_MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// Context string passed alongside [`BENCH_MESSAGE`].
pub const BENCH_CONTEXT: &[u8] = b"stela-bench";
