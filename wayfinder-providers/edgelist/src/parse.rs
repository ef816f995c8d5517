//! Line grammar for edge lists.

use wayfinder_core::Weight;

use crate::errors::{EdgeListError, LineError};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Record<'a> {
    Node(&'a str),
    Edge(&'a str, &'a str, Weight),
}

/// Parses one line. Returns `None` for blank and comment-only lines.
pub(crate) fn parse_line(number: usize, line: &str) -> Result<Option<Record<'_>>, EdgeListError> {
    let content = line.split_once('#').map_or(line, |(before, _)| before);
    let fields: Vec<&str> = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    let record = match fields.as_slice() {
        [] => return Ok(None),
        ["node", label] => Record::Node(*label),
        ["node", _, _, _, ..] => return Err(failure(number, LineError::NodeArity)),
        // `node a b` is a node declaration with a stray label unless `b` is a
        // weight, in which case it is an edge from a node labelled `node`.
        ["node", _, raw] if raw.parse::<Weight>().is_err() => {
            return Err(failure(number, LineError::NodeArity));
        }
        [left, right, raw] => {
            let weight = raw.parse::<Weight>().map_err(|_| {
                failure(
                    number,
                    LineError::InvalidWeight {
                        raw: (*raw).to_owned(),
                    },
                )
            })?;
            Record::Edge(*left, *right, weight)
        }
        other => {
            return Err(failure(
                number,
                LineError::FieldCount { found: other.len() },
            ));
        }
    };
    Ok(Some(record))
}

const fn failure(line: usize, reason: LineError) -> EdgeListError {
    EdgeListError::Parse { line, reason }
}
