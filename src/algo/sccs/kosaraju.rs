/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::algo::{finish_order, finish_order_with};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;

/// Computes the strongly connected components of a graph using Kosaraju's algorithm.
///
/// A first visit of `graph`, with roots in increasing order, computes the
/// order in which nodes are finished. A second visit of `transpose`, with
/// roots in reverse finishing order, discovers one component per visit tree.
/// Components are numbered in the order in which they are found, and the
/// nodes of each component are listed in the order in which the second visit
/// finishes them.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `transpose`: the transpose of `graph`.
///
/// * `pl`: a progress logger.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use kosaraju_sccs::algo::sccs::kosaraju;
/// use kosaraju_sccs::graphs::VecGraph;
///
/// let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
/// let sccs = kosaraju(&graph, &graph.transpose(), no_logging![]);
///
/// assert_eq!(sccs.lists(), &[vec![1, 2, 0], vec![3]]);
/// assert_eq!(sccs.components(), &[0, 0, 0, 1]);
/// # Ok::<(), kosaraju_sccs::graphs::GraphError>(())
/// ```
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(transpose.num_nodes(), num_nodes);
    debug_assert_eq!(transpose.num_arcs(), graph.num_arcs());

    let mut order = finish_order(&graph, pl).concat();
    order.reverse();

    let lists = finish_order_with(&transpose, order, pl);
    pl.info(format_args!(
        "Found {} strongly connected components",
        lists.len()
    ));

    Sccs::new(num_nodes, lists)
}
