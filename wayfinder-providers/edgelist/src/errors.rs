use std::io;

use thiserror::Error;
use wayfinder_core::GraphError;

/// Errors raised while loading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The input held no node or edge records.
    #[error("edge list contains no records")]
    EmptyInput,
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: LineError,
    },
    /// The parsed records do not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Problems with a single edge-list line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LineError {
    /// A `node` declaration was followed by more than one label.
    #[error("node declarations take exactly one label")]
    NodeArity,
    /// An edge line did not have exactly three fields.
    #[error("expected `<left> <right> <weight>`, found {found} field(s)")]
    FieldCount {
        /// Number of fields on the line.
        found: usize,
    },
    /// The weight field is not a number.
    #[error("weight `{raw}` is not a number")]
    InvalidWeight {
        /// The offending field.
        raw: String,
    },
}

impl EdgeListError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::Io(_) => EdgeListErrorCode::Io,
            Self::EmptyInput => EdgeListErrorCode::EmptyInput,
            Self::Parse { .. } => EdgeListErrorCode::Parse,
            Self::Graph(_) => EdgeListErrorCode::Graph,
        }
    }

    /// Returns the underlying graph error, when construction failed.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Graph(error) => Some(error),
            _ => None,
        }
    }
}

/// Machine-readable error codes for [`EdgeListError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    /// Reading the input failed.
    Io,
    /// The input held no records.
    EmptyInput,
    /// A line could not be parsed.
    Parse,
    /// The records do not form a valid graph.
    Graph,
}

impl EdgeListErrorCode {
    /// Returns the symbolic identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "EDGELIST_IO",
            Self::EmptyInput => "EDGELIST_EMPTY_INPUT",
            Self::Parse => "EDGELIST_PARSE",
            Self::Graph => "EDGELIST_GRAPH",
        }
    }
}
