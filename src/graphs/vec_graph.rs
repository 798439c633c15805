/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, RandomAccessGraph};
use std::fmt;

/// A directed graph stored as a vector of successor lists.
///
/// Self-loops and parallel arcs are allowed, and successors are kept in
/// insertion order. Once built, a graph is never modified: the
/// [transpose](VecGraph::transpose) is a new graph owning its own lists.
///
/// # Examples
///
/// ```
/// use kosaraju_sccs::graphs::{RandomAccessGraph, VecGraph};
///
/// let graph = VecGraph::from_arcs(3, [(0, 1), (1, 2), (0, 2), (2, 0)])?;
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_arcs(), 4);
/// assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(graph.to_string(), "n = 3 m = 4\n[[1, 2], [2], [0]]");
/// # Ok::<(), kosaraju_sccs::graphs::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecGraph {
    num_arcs: usize,
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a graph with `num_nodes` nodes and no arcs.
    pub fn empty(num_nodes: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: vec![Vec::new(); num_nodes],
        }
    }

    /// Creates a graph with `num_nodes` nodes from a list of arcs.
    ///
    /// The head of each arc is appended to the successors of its tail, in the
    /// order in which arcs are returned by `arcs`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEdge`] if an endpoint is not smaller than
    /// `num_nodes`.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::empty(num_nodes);
        for (tail, head) in arcs {
            if tail >= num_nodes || head >= num_nodes {
                return Err(GraphError::InvalidEdge {
                    tail,
                    head,
                    num_nodes,
                });
            }
            graph.succ[tail].push(head);
            graph.num_arcs += 1;
        }
        Ok(graph)
    }

    // Successors must be smaller than succ.len().
    pub(crate) fn from_succ_unchecked(succ: Vec<Vec<usize>>) -> Self {
        debug_assert!(succ.iter().flatten().all(|&head| head < succ.len()));
        let num_arcs = succ.iter().map(Vec::len).sum();
        Self { num_arcs, succ }
    }

    /// Like [`from_arcs`](VecGraph::from_arcs), but the number of nodes is
    /// signed, as it happens when it comes from untrusted input.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidInput`] if `num_nodes` is negative, and
    /// [`GraphError::InvalidEdge`] as in [`from_arcs`](VecGraph::from_arcs).
    pub fn try_from_signed_arcs(
        num_nodes: i64,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let num_nodes =
            usize::try_from(num_nodes).map_err(|_| GraphError::InvalidInput { num_nodes })?;
        Self::from_arcs(num_nodes, arcs)
    }

    /// Returns an iterator on the arcs of the graph.
    ///
    /// Arcs are returned by increasing tail, and arcs with the same tail in
    /// insertion order, so that feeding them to
    /// [`from_arcs`](VecGraph::from_arcs) rebuilds the same graph.
    pub fn iter_arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.succ
            .iter()
            .enumerate()
            .flat_map(|(tail, succ)| succ.iter().map(move |&head| (tail, head)))
    }

    /// Returns the arcs of the graph in the order of
    /// [`iter_arcs`](VecGraph::iter_arcs).
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        self.iter_arcs().collect()
    }

    /// Returns the transpose of this graph, that is, a new graph with the
    /// same nodes in which every arc is reversed.
    ///
    /// The successor lists of the transpose are filled scanning the arcs of
    /// this graph in the order of [`iter_arcs`](VecGraph::iter_arcs).
    pub fn transpose(&self) -> Self {
        let mut transpose = Self::empty(self.num_nodes());
        for (tail, head) in self.iter_arcs() {
            transpose.succ[head].push(tail);
        }
        transpose.num_arcs = self.num_arcs;
        transpose
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ>
        = std::iter::Copied<std::slice::Iter<'succ, usize>>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl fmt::Display for VecGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {} m = {}\n{:?}",
            self.num_nodes(),
            self.num_arcs,
            self.succ
        )
    }
}
