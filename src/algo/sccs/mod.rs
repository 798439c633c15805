/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! Components are computed by [Kosaraju's algorithm](kosaraju), which needs
//! the transpose of the graph. A [strong connectivity
//! test](is_strongly_connected) is available, too. For a [`VecGraph`], the
//! [`StronglyConnected`] trait computes the transpose on its own.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use kosaraju_sccs::algo::sccs::*;
//! use kosaraju_sccs::graphs::VecGraph;
//!
//! let graph = VecGraph::from_arcs(5, [(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (1, 2)])?;
//! let transpose = graph.transpose();
//!
//! let mut sccs = kosaraju(&graph, &transpose, no_logging![]);
//! assert_eq!(sccs.num_components(), 2);
//! assert!(!is_strongly_connected(&graph, &transpose, no_logging![]));
//!
//! // Let's sort the components by size
//! let sizes = sccs.sort_by_size();
//! assert_eq!(sizes, vec![3, 2].into_boxed_slice());
//! assert_eq!(sccs.components(), &[1, 1, 0, 0, 0]);
//! # Ok::<(), kosaraju_sccs::graphs::GraphError>(())
//! ```

mod kosaraju;
pub use kosaraju::*;

mod strongly_connected;
pub use strongly_connected::*;

use crate::graphs::{RandomAccessGraph, VecGraph};
use dsi_progress_logger::no_logging;

/// Strongly connected components.
///
/// An instance of this structure stores the nodes of each component, in the
/// order computed by the algorithm that found them, and the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0
/// to [`num_components`](Sccs::num_components).
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size) and to build the [condensation](Sccs::condensation)
/// of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    lists: Vec<Vec<usize>>,
    components: Box<[usize]>,
}

impl Sccs {
    /// Creates the strongly connected components of a graph with `num_nodes`
    /// nodes from the lists of nodes of each component.
    ///
    /// # Panics
    ///
    /// If the lists do not partition the nodes.
    pub(crate) fn new(num_nodes: usize, lists: Vec<Vec<usize>>) -> Self {
        let mut components = vec![usize::MAX; num_nodes].into_boxed_slice();
        for (component, list) in lists.iter().enumerate() {
            for &node in list {
                assert!(node < num_nodes, "node {node} is out of range");
                assert_eq!(components[node], usize::MAX, "node {node} is listed twice");
                components[node] = component;
            }
        }
        if let Some(node) = components.iter().position(|&c| c == usize::MAX) {
            panic!("node {node} is not listed");
        }
        Sccs { lists, components }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.lists.len()
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the nodes of each component.
    pub fn lists(&self) -> &[Vec<usize>] {
        &self.lists
    }

    /// Consumes this structure, returning the nodes of each component.
    pub fn into_lists(self) -> Vec<Vec<usize>> {
        self.lists
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be decreasing in the component index; components of the same size
    /// keep their relative order. The method returns the sizes of the
    /// components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i);

        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);

        let mut lists = std::mem::take(&mut self.lists);
        self.lists = sort_perm
            .iter()
            .map(|&x| std::mem::take(&mut lists[x]))
            .collect();

        sort_perm.iter().map(|&x| sizes[x]).collect()
    }

    /// Returns the condensation of `graph` with respect to these components.
    ///
    /// The condensation has a node for each component, and an arc from a
    /// component to another, distinct component if some arc of `graph` joins
    /// them. Successors are sorted and duplicate-free. The condensation is
    /// acyclic.
    ///
    /// # Panics
    ///
    /// If `graph` does not have the number of nodes of the graph these
    /// components were computed on.
    pub fn condensation(&self, graph: impl RandomAccessGraph) -> VecGraph {
        assert_eq!(graph.num_nodes(), self.components.len());
        let mut succ = vec![Vec::new(); self.num_components()];
        for node in 0..graph.num_nodes() {
            let component = self.components[node];
            for s in graph.successors(node) {
                let s_component = self.components[s];
                if s_component != component {
                    succ[component].push(s_component);
                }
            }
        }
        for list in succ.iter_mut() {
            list.sort_unstable();
            list.dedup();
        }
        VecGraph::from_succ_unchecked(succ)
    }
}

/// Strongly connected components of a [`VecGraph`] computed without an
/// explicit transpose.
pub trait StronglyConnected {
    /// Returns the nodes of each strongly connected component, as computed
    /// by [`kosaraju`].
    fn sccs(&self) -> Vec<Vec<usize>>;

    /// Returns whether the graph is strongly connected.
    fn is_strongly_connected(&self) -> bool;
}

impl StronglyConnected for VecGraph {
    fn sccs(&self) -> Vec<Vec<usize>> {
        kosaraju(self, self.transpose(), no_logging![]).into_lists()
    }

    fn is_strongly_connected(&self) -> bool {
        is_strongly_connected(self, self.transpose(), no_logging![])
    }
}
