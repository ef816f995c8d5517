//! Wayfinder core library.
//!
//! Shortest paths and minimum spanning trees over small weighted undirected
//! graphs of labelled nodes. A [`Graph`] is validated once at construction and
//! is never mutated afterwards; the engines ([`shortest_paths`], [`kruskal`]
//! and [`prim`]) borrow it immutably and own all of their working state, so
//! several engines may run against the same graph from different threads.
//!
//! # Examples
//! ```
//! use wayfinder_core::{GraphBuilder, Node, kruskal, prim, shortest_paths};
//!
//! let graph = GraphBuilder::new()
//!     .with_nodes(["A", "B", "C"])
//!     .with_edge("A", "B", 1.0)
//!     .with_edge("B", "C", 2.0)
//!     .with_edge("A", "C", 4.0)
//!     .build()
//!     .expect("graph is valid");
//!
//! let paths = shortest_paths(&graph, &Node::from("A")).expect("A is declared");
//! assert_eq!(paths.cost(&Node::from("C")), Some(3.0));
//!
//! assert_eq!(kruskal(&graph).total_weight(), 3.0);
//! assert_eq!(prim(&graph, &Node::from("A")).expect("A is declared").total_weight(), 3.0);
//! ```

mod error;
mod frontier;
mod graph;
mod mst;
mod shortest_path;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    error::{GraphError, GraphErrorCode, InvalidEdgeReason, Result},
    graph::{Edge, Graph, GraphBuilder, Neighbors, Node, Weight},
    mst::{SpanningForest, kruskal, prim},
    shortest_path::{PathEntry, ShortestPaths, shortest_paths},
};
