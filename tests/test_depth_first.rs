/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use kosaraju_sccs::prelude::*;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

#[test]
fn test_finish_order() -> Result<()> {
    assert_eq!(
        vec![vec![2, 1, 0]],
        finish_order(VecGraph::from_arcs(3, [(1, 2), (0, 1)])?, no_logging![])
    );

    assert_eq!(
        vec![vec![2, 1, 0]],
        finish_order(
            VecGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])?,
            no_logging![]
        )
    );

    assert_eq!(
        vec![vec![3, 1, 2, 0]],
        finish_order(
            VecGraph::from_arcs(4, [(0, 1), (0, 2), (2, 3), (1, 3)])?,
            no_logging![]
        )
    );

    assert_eq!(
        vec![vec![0], vec![1], vec![3, 2]],
        finish_order(
            VecGraph::from_arcs(4, [(2, 3), (1, 0), (3, 1)])?,
            no_logging![]
        )
    );
    Ok(())
}

#[test]
fn test_finish_order_with() -> Result<()> {
    let graph = VecGraph::from_arcs(4, [(2, 3), (1, 0), (3, 1)])?;

    assert_eq!(
        vec![vec![0, 1, 3, 2]],
        finish_order_with(&graph, [2, 1, 0, 3], no_logging![])
    );
    assert_eq!(
        vec![vec![0], vec![1, 3], vec![2]],
        finish_order_with(&graph, [0, 3, 2, 1], no_logging![])
    );
    Ok(())
}

#[test]
fn test_trees_partition_nodes() -> Result<()> {
    let graph = VecGraph::from_arcs(6, [(5, 4), (4, 3), (0, 5), (2, 2), (1, 3)])?;
    let mut nodes = finish_order(&graph, no_logging![]).concat();
    nodes.sort_unstable();
    assert_eq!(nodes, (0..6).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_reach_from() -> Result<()> {
    let graph = VecGraph::from_arcs(5, [(0, 1), (1, 2), (2, 1), (3, 4)])?;
    let mut visit = depth_first::Seq::new(&graph);

    assert_eq!(reach_from(&mut visit, 1), 2);
    assert!(visit.known(1) && visit.known(2));
    assert!(!visit.known(0));
    assert_eq!(reach_from(&mut visit, 2), 0);
    assert_eq!(reach_from(&mut visit, 0), 1);
    assert_eq!(reach_from(&mut visit, 3), 2);
    Ok(())
}

#[test]
fn test_postvisit_depths() -> Result<()> {
    let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (0, 3)])?;
    let mut visit = depth_first::Seq::new(&graph);
    let mut depths = vec![0; 4];

    visit
        .visit_all(|event| {
            if let depth_first::Event::Postvisit { node, depth, .. } = event {
                depths[node] = depth;
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(depths, vec![0, 1, 2, 1]);
    Ok(())
}

#[test]
fn test_strong_connectivity() -> Result<()> {
    let graph = VecGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])?;
    assert!(sccs::is_strongly_connected(
        &graph,
        graph.transpose(),
        no_logging![]
    ));

    // Node zero reaches everything, but nothing reaches node zero
    let graph = VecGraph::from_arcs(3, [(0, 1), (1, 2), (2, 1)])?;
    assert!(!sccs::is_strongly_connected(
        &graph,
        graph.transpose(),
        no_logging![]
    ));

    // Everything reaches node zero, but node zero reaches nothing
    let graph = VecGraph::from_arcs(3, [(1, 0), (2, 0)])?;
    assert!(!sccs::is_strongly_connected(
        &graph,
        graph.transpose(),
        no_logging![]
    ));

    let graph = VecGraph::default();
    assert!(sccs::is_strongly_connected(&graph, &graph, no_logging![]));
    Ok(())
}
