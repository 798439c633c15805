/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::{reach_from, visits::depth_first::Seq};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;

/// Returns whether a graph is strongly connected.
///
/// The graph is strongly connected if node zero reaches all nodes both in
/// `graph` and in `transpose`. The graph with no nodes is strongly connected.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `transpose`: the transpose of `graph`.
///
/// * `pl`: a progress logger.
pub fn is_strongly_connected(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> bool {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(transpose.num_nodes(), num_nodes);
    if num_nodes == 0 {
        return true;
    }

    pl.item_name("node");
    pl.expected_updates(Some(2 * num_nodes));
    pl.start("Checking strong connectivity...");

    let reached = reach_from(&mut Seq::new(&graph), 0);
    pl.update_with_count(reached);

    let connected = reached == num_nodes && {
        let reached = reach_from(&mut Seq::new(&transpose), 0);
        pl.update_with_count(reached);
        reached == num_nodes
    };

    pl.done();
    connected
}
