/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use kosaraju_sccs::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_read_graph() -> Result<()> {
    let file = write_temp("3\n0,1\n1,2\n0,2\n2,0\n")?;
    let graph = read_graph(file.path())?;

    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_arcs(), 4);
    assert_eq!(graph.to_string(), "n = 3 m = 4\n[[1, 2], [2], [0]]");
    assert!(graph.is_strongly_connected());
    assert_eq!(graph.sccs().len(), 1);
    Ok(())
}

#[test]
fn test_read_isolated_nodes() -> Result<()> {
    let file = write_temp("4\n")?;
    let graph = read_graph(file.path())?;

    assert_eq!(graph.num_arcs(), 0);
    // The second pass takes roots in reverse finish order
    assert_eq!(graph.sccs(), vec![vec![3], vec![2], vec![1], vec![0]]);
    Ok(())
}

#[test]
fn test_read_errors() -> Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(matches!(
        read_graph(dir.path().join("missing.txt")),
        Err(LoadError::Io(_))
    ));

    let file = write_temp("2\n0,1\n1 0\n")?;
    assert!(matches!(
        read_graph(file.path()),
        Err(LoadError::MalformedArc { line: 3, .. })
    ));

    let file = write_temp("2.5\n")?;
    assert!(matches!(
        read_graph(file.path()),
        Err(LoadError::MalformedHeader { line: 1, .. })
    ));

    let file = write_temp("2\n0,2\n")?;
    assert!(matches!(
        read_graph(file.path()),
        Err(LoadError::Graph(GraphError::InvalidEdge { .. }))
    ));
    Ok(())
}
