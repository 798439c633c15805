/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Directed graphs with random access to successors.

mod vec_graph;
pub use vec_graph::*;

/// Errors raised when building a graph.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The number of nodes is negative.
    #[error("Invalid number of nodes: {num_nodes}")]
    InvalidInput { num_nodes: i64 },
    /// An endpoint of an arc is not a node of the graph.
    #[error("Arc ({tail}, {head}) has an endpoint outside [0..{num_nodes})")]
    InvalidEdge {
        tail: usize,
        head: usize,
        num_nodes: usize,
    },
}

/// A directed graph whose successor lists can be accessed by node.
///
/// Nodes are the integers in `[0..num_nodes())`. Successors must be
/// enumerated always in the same order, as visits and the components
/// computed by them depend on it.
pub trait RandomAccessGraph {
    /// The iterator on the successors of a node.
    type Successors<'succ>: Iterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of `node`.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`num_nodes`](Self::num_nodes).
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).count()
    }
}

impl<G: RandomAccessGraph> RandomAccessGraph for &G {
    type Successors<'succ>
        = G::Successors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}
