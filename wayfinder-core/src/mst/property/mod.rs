//! Property-based tests for the Kruskal and Prim engines.
//!
//! Checks both engines against an exhaustive minimum-forest oracle, validates
//! structural invariants (acyclicity, edge counts, component coverage, the
//! cycle optimality condition) and confirms that concurrent runs over a shared
//! graph agree with a sequential baseline.

mod concurrency;
mod equivalence;
mod helpers;
mod oracle;
