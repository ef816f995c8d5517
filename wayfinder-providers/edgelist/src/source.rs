//! Named graphs loaded from edge-list text.

use std::io::BufRead;

use tracing::{debug, instrument};
use wayfinder_core::{Graph, GraphBuilder};

use crate::{
    errors::EdgeListError,
    parse::{Record, parse_line},
};

const SOUTH_AMERICA: &str = include_str!("../data/south_america.edges");

/// Controls how edge endpoints are treated while loading.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EdgeListOptions {
    /// Declare every edge endpoint as a node instead of requiring a `node`
    /// line for it.
    pub declare_endpoints: bool,
}

/// A graph loaded from an edge list together with its display name.
#[derive(Clone, Debug)]
pub struct EdgeListSource {
    name: String,
    graph: Graph,
}

impl EdgeListSource {
    /// Parses an edge list from `reader`.
    ///
    /// Endpoints are declared implicitly when the input has no `node` lines;
    /// otherwise every endpoint must be declared.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when reading fails, a line is malformed, the
    /// input holds no records or the records do not form a valid graph.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use wayfinder_providers_edgelist::EdgeListSource;
    ///
    /// let source = EdgeListSource::try_from_reader("demo", Cursor::new("a b 1\nb c 2\n"))
    ///     .expect("edge list is valid");
    /// assert_eq!(source.name(), "demo");
    /// assert_eq!(source.graph().node_count(), 3);
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        Self::load(name.into(), reader, None)
    }

    /// Parses an edge list from `reader` with explicit `options`.
    ///
    /// # Errors
    /// As for [`EdgeListSource::try_from_reader`].
    pub fn try_from_reader_with<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        options: EdgeListOptions,
    ) -> Result<Self, EdgeListError> {
        Self::load(name.into(), reader, Some(options))
    }

    /// Returns the built-in road network of twelve South American countries
    /// with distances in kilometres.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] if the bundled data fails to load.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_providers_edgelist::EdgeListSource;
    ///
    /// let source = EdgeListSource::south_america().expect("bundled data is valid");
    /// assert_eq!(source.graph().node_count(), 12);
    /// assert_eq!(source.graph().edge_count(), 24);
    /// ```
    pub fn south_america() -> Result<Self, EdgeListError> {
        Self::try_from_reader("south-america", SOUTH_AMERICA.as_bytes())
    }

    /// Returns the source name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the loaded graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the source and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    #[instrument(
        name = "edgelist.load",
        level = "debug",
        err,
        skip(name, reader, options),
        fields(name = %name),
    )]
    fn load<R: BufRead>(
        name: String,
        reader: R,
        options: Option<EdgeListOptions>,
    ) -> Result<Self, EdgeListError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

        let mut records = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(record) = parse_line(index + 1, line)? {
                records.push(record);
            }
        }
        if records.is_empty() {
            return Err(EdgeListError::EmptyInput);
        }

        let options = options.unwrap_or_else(|| EdgeListOptions {
            declare_endpoints: !records
                .iter()
                .any(|record| matches!(record, Record::Node(_))),
        });

        let mut builder = GraphBuilder::new();
        for record in records {
            match record {
                Record::Node(label) => {
                    builder.add_node(label);
                }
                Record::Edge(left, right, weight) => {
                    if options.declare_endpoints {
                        builder.add_node(left).add_node(right);
                    }
                    builder.add_edge(left, right, weight);
                }
            }
        }
        let graph = builder.build()?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            declare_endpoints = options.declare_endpoints,
            "edge list loaded",
        );
        Ok(Self { name, graph })
    }
}
