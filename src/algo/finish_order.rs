/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Appends to `finished` the nodes reachable from `root` that are not yet
/// known to `visit`, in the order in which their visit is completed.
///
/// Nothing is appended if `root` is already known.
pub fn finish_order_from<G: RandomAccessGraph>(
    visit: &mut Seq<'_, G>,
    root: usize,
    finished: &mut Vec<usize>,
) {
    visit
        .visit([root], |event| {
            if let Event::Postvisit { node, .. } = event {
                finished.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();
}

/// Visits the whole graph taking roots in increasing order, and returns, for
/// each visit tree, its nodes in the order in which their visit is completed.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `pl`: a progress logger.
pub fn finish_order(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Vec<Vec<usize>> {
    let num_nodes = graph.num_nodes();
    finish_order_with(graph, 0..num_nodes, pl)
}

/// Visits the graph taking roots in the given order, and returns, for each
/// visit tree, its nodes in the order in which their visit is completed.
///
/// A tree is started from each root that has not been discovered by a
/// previous tree, so if `order` is a permutation of the nodes the trees
/// partition the nodes of the graph.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `order`: the roots of the visit, in the order in which they will be
///   used.
///
/// * `pl`: a progress logger.
///
/// # Panics
///
/// If a root is not a node of the graph.
pub fn finish_order_with(
    graph: impl RandomAccessGraph,
    order: impl IntoIterator<Item = usize>,
    pl: &mut impl ProgressLog,
) -> Vec<Vec<usize>> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing finish order...");

    let mut visit = Seq::new(&graph);
    let mut trees = vec![];

    for root in order {
        if visit.known(root) {
            continue;
        }
        let mut finished = vec![];
        finish_order_from(&mut visit, root, &mut finished);
        pl.update_with_count(finished.len());
        trees.push(finished);
    }

    pl.done();
    trees
}
