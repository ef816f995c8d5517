//! Edge-list provider: builds a [`wayfinder_core::Graph`] from line-based
//! text and ships the built-in South American road network.

mod errors;
mod parse;
mod source;

pub use errors::{EdgeListError, EdgeListErrorCode, LineError};
pub use source::{EdgeListOptions, EdgeListSource};
