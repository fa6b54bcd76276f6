//! Benchmark crate for the powforge kernel.
//!
//! All benchmarks live under `benches/`; this library target exists so the
//! crate participates in the workspace build.
