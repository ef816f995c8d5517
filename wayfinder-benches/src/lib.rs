//! Benchmark support crate for wayfinder.
//!
//! Provides a seeded synthetic graph generator and parameter types used by
//! the Criterion benchmarks for shortest paths and minimum spanning trees.

pub mod error;
pub mod params;
pub mod source;
