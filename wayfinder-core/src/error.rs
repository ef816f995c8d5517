//! Error types for the Wayfinder core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

use crate::graph::{Node, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why an edge was rejected while constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidEdgeReason {
    /// One endpoint was never declared as a node.
    #[error("endpoint `{0}` is not a declared node")]
    UnknownEndpoint(Node),
    /// The weight was below zero.
    #[error("weight {0} is negative")]
    NegativeWeight(Weight),
    /// The weight was NaN or infinite.
    #[error("weight is not finite")]
    NonFiniteWeight,
    /// Both endpoints were the same node.
    #[error("self-loops are not permitted")]
    SelfLoop,
    /// The unordered pair already carries a weight.
    #[error("the pair already has an edge")]
    Duplicate,
    /// Adding the weight would make the graph's total weight overflow.
    #[error("total edge weight would exceed the representable range")]
    TotalWeightOverflow,
}

impl InvalidEdgeReason {
    /// Returns a short tag identifying the rejection reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownEndpoint(_) => "unknown_endpoint",
            Self::NegativeWeight(_) => "negative_weight",
            Self::NonFiniteWeight => "non_finite_weight",
            Self::SelfLoop => "self_loop",
            Self::Duplicate => "duplicate",
            Self::TotalWeightOverflow => "total_weight_overflow",
        }
    }
}

/// Error type produced when constructing a [`crate::Graph`] or running one of
/// the engines against it.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge could not be added to the graph.
    #[error("invalid edge ({left}, {right}): {reason}")]
    InvalidEdge {
        /// First endpoint as supplied by the caller.
        left: Node,
        /// Second endpoint as supplied by the caller.
        right: Node,
        /// Reason the edge was rejected.
        reason: InvalidEdgeReason,
    },
    /// A source or start node is not part of the graph.
    #[error("node `{node}` is not part of the graph")]
    UnknownNode {
        /// The label that could not be resolved.
        node: Node,
    },
    /// Dijkstra was asked to run over an edge with a negative weight.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint of the offending edge.
        left: Node,
        /// Second endpoint of the offending edge.
        right: Node,
        /// The negative weight.
        weight: Weight,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge could not be added to the graph.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// A source or start node is not part of the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// Dijkstra was asked to run over an edge with a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
    }
}

impl GraphError {
    /// Retrieve the [`InvalidEdgeReason`] when the error stems from graph
    /// construction.
    #[must_use]
    pub const fn invalid_edge_reason(&self) -> Option<&InvalidEdgeReason> {
        match self {
            Self::InvalidEdge { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
