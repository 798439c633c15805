/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Event;
use crate::algo::visits::Sequential;
use crate::graphs::RandomAccessGraph;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is kept on the heap as a stack of frames, each made of an
/// iterator on the successors of a node and the node itself. Successors are
/// enumerated in the order returned by
/// [`successors`](RandomAccessGraph::successors), which makes the sequence of
/// events, and everything computed from it, deterministic.
///
/// The visit uses one bit per node to remember known nodes. Nodes stay known
/// across calls to [`visit`](Sequential::visit) until
/// [`reset`](Sequential::reset) is called.
///
/// # Examples
///
/// Let us compute the nodes of each visit tree in the order in which they
/// are finished:
///
/// ```
/// use kosaraju_sccs::algo::visits::{depth_first::*, Sequential};
/// use kosaraju_sccs::graphs::VecGraph;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (3, 1)])?;
/// let mut visit = Seq::new(&graph);
/// let mut finished = vec![];
///
/// visit
///     .visit_all(|event| {
///         if let Event::Postvisit { node, .. } = event {
///             finished.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(finished, vec![2, 1, 0, 3]);
/// # Ok::<(), kosaraju_sccs::graphs::GraphError>(())
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    stack: Vec<(G::Successors<'a>, usize)>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    ///
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }

    /// Returns whether `node` has been discovered by the visit.
    #[inline(always)]
    pub fn known(&self, node: usize) -> bool {
        self.known.get(node)
    }
}

impl<'a, G: RandomAccessGraph> Sequential<Event> for Seq<'a, G> {
    fn visit<R: IntoIterator<Item = usize>, B, C: FnMut(Event) -> ControlFlow<B, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
    ) -> ControlFlow<B, ()> {
        // Frames might be left over by an interrupted visit
        self.stack.clear();

        for root in roots {
            if self.known.get(root) {
                continue;
            }

            callback(Event::Init { root })?;

            self.known.set(root, true);

            callback(Event::Previsit {
                node: root,
                root,
                depth: 0,
            })?;

            self.stack.push((self.graph.successors(root), root));

            'recurse: loop {
                // Depth of the successors of the node on top of the stack
                let depth = self.stack.len();
                let Some((iter, node)) = self.stack.last_mut() else {
                    break;
                };
                let curr = *node;

                for succ in iter {
                    if self.known.get(succ) {
                        callback(Event::Revisit {
                            node: succ,
                            root,
                            depth,
                        })?;
                    } else {
                        self.known.set(succ, true);

                        callback(Event::Previsit {
                            node: succ,
                            root,
                            depth,
                        })?;

                        self.stack.push((self.graph.successors(succ), succ));

                        continue 'recurse;
                    }
                }

                callback(Event::Postvisit {
                    node: curr,
                    root,
                    depth: depth - 1,
                })?;

                self.stack.pop();
            }

            callback(Event::Done { root })?;
        }

        Continue(())
    }

    fn visit_all<B, C: FnMut(Event) -> ControlFlow<B, ()>>(
        &mut self,
        callback: C,
    ) -> ControlFlow<B, ()> {
        let num_nodes = self.graph.num_nodes();
        self.visit(0..num_nodes, callback)
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known = BitVec::new(self.graph.num_nodes());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::{GraphError, VecGraph};
    use no_break::NoBreak;
    use no_break::Unbreakable;
    use std::ops::ControlFlow::Break;

    #[test]
    fn test_events() -> Result<(), GraphError> {
        let graph = VecGraph::from_arcs(3, [(0, 1), (0, 2), (1, 2), (2, 0)])?;
        let mut visit = Seq::new(&graph);
        let mut events = vec![];

        visit
            .visit_all(|event| {
                events.push(event);
                Continue(())
            })
            .continue_value_no_break();

        assert_eq!(
            events,
            vec![
                Event::Init { root: 0 },
                Event::Previsit {
                    node: 0,
                    root: 0,
                    depth: 0
                },
                Event::Previsit {
                    node: 1,
                    root: 0,
                    depth: 1
                },
                Event::Previsit {
                    node: 2,
                    root: 0,
                    depth: 2
                },
                Event::Revisit {
                    node: 0,
                    root: 0,
                    depth: 3
                },
                Event::Postvisit {
                    node: 2,
                    root: 0,
                    depth: 2
                },
                Event::Postvisit {
                    node: 1,
                    root: 0,
                    depth: 1
                },
                Event::Revisit {
                    node: 2,
                    root: 0,
                    depth: 1
                },
                Event::Postvisit {
                    node: 0,
                    root: 0,
                    depth: 0
                },
                Event::Done { root: 0 },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_roots_order_and_reset() -> Result<(), GraphError> {
        let graph = VecGraph::from_arcs(4, [(0, 1), (2, 3)])?;
        let mut visit = Seq::new(&graph);
        let mut roots = vec![];

        let mut collect_roots = |event: Event| -> ControlFlow<Unbreakable, ()> {
            if let Event::Init { root } = event {
                roots.push(root);
            }
            Continue(())
        };

        let r: ControlFlow<Unbreakable, ()> = visit.visit([3, 1, 2, 0], &mut collect_roots);
        r.continue_value_no_break();
        // Already known roots are skipped
        let r: ControlFlow<Unbreakable, ()> = visit.visit([0, 1, 2, 3], &mut collect_roots);
        r.continue_value_no_break();
        visit.reset();
        let r: ControlFlow<Unbreakable, ()> = visit.visit([2], &mut collect_roots);
        r.continue_value_no_break();

        assert_eq!(roots, vec![3, 1, 2, 0, 2]);
        assert!(visit.known(3));
        assert!(!visit.known(0));
        Ok(())
    }

    #[test]
    fn test_break() -> Result<(), GraphError> {
        let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (2, 3)])?;
        let mut visit = Seq::new(&graph);

        let result = visit.visit_all(|event| match event {
            Event::Previsit { node: 2, depth, .. } => Break(depth),
            _ => Continue(()),
        });

        assert_eq!(result, Break(2));
        assert!(visit.known(2));
        assert!(!visit.known(3));
        Ok(())
    }

    #[test]
    fn test_long_path() -> Result<(), GraphError> {
        // Deep enough to overflow the native stack with a recursive visit
        let n = 1_000_000;
        let graph = VecGraph::from_arcs(n, (1..n).map(|i| (i - 1, i)))?;
        let mut visit = Seq::new(&graph);
        let mut max_depth = 0;

        visit
            .visit_all(|event| {
                if let Event::Previsit { depth, .. } = event {
                    max_depth = max_depth.max(depth);
                }
                Continue(())
            })
            .continue_value_no_break();

        assert_eq!(max_depth, n - 1);
        Ok(())
    }
}
