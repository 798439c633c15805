/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::{GraphError, VecGraph};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Errors raised when loading a graph from an arc list.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("The input does not contain the number of nodes")]
    Empty,
    #[error("Line {line}: expected the number of nodes, found {text:?}")]
    MalformedHeader { line: usize, text: String },
    #[error("Line {line}: expected an arc of the form \"tail,head\", found {text:?}")]
    MalformedArc { line: usize, text: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses a graph in arc-list format.
///
/// The first line contains the number of nodes; each subsequent line
/// contains an arc, given by its tail and its head separated by a comma.
/// Whitespace around numbers and blank lines are ignored. For example,
///
/// ```text
/// 3
/// 0,1
/// 1,2
/// 0,2
/// 2,0
/// ```
///
/// describes a graph with three nodes and four arcs.
///
/// # Errors
///
/// [`LoadError::MalformedHeader`] and [`LoadError::MalformedArc`] if a line
/// cannot be parsed, [`LoadError::Empty`] if there are no lines, and
/// [`LoadError::Graph`] if the number of nodes is negative or an arc has an
/// endpoint that is not a node.
pub fn parse_graph(reader: impl BufRead) -> Result<VecGraph, LoadError> {
    let mut num_nodes = None;
    let mut arcs = vec![];

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match num_nodes {
            None => {
                num_nodes = Some(text.parse::<i64>().map_err(|_| {
                    LoadError::MalformedHeader {
                        line: index + 1,
                        text: text.to_owned(),
                    }
                })?);
            }
            Some(_) => {
                arcs.push(parse_arc(text).ok_or_else(|| LoadError::MalformedArc {
                    line: index + 1,
                    text: text.to_owned(),
                })?);
            }
        }
    }

    let num_nodes = num_nodes.ok_or(LoadError::Empty)?;
    debug!("Parsed {} nodes and {} arcs", num_nodes, arcs.len());
    Ok(VecGraph::try_from_signed_arcs(num_nodes, arcs)?)
}

/// Loads a graph in arc-list format from a file.
///
/// See [`parse_graph`] for the format.
pub fn read_graph(path: impl AsRef<Path>) -> Result<VecGraph, LoadError> {
    let path = path.as_ref();
    debug!("Loading graph from {}", path.display());
    parse_graph(BufReader::new(File::open(path)?))
}

fn parse_arc(text: &str) -> Option<(usize, usize)> {
    let (tail, head) = text.split_once(',')?;
    Some((tail.trim().parse().ok()?, head.trim().parse().ok()?))
}
