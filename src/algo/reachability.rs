/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential};
use crate::graphs::RandomAccessGraph;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Marks as known in `visit` all nodes reachable from `root`.
///
/// Returns the number of nodes discovered, which is zero if `root` was
/// already known to the visit.
///
/// # Examples
///
/// ```
/// use kosaraju_sccs::algo::reach_from;
/// use kosaraju_sccs::algo::visits::depth_first::Seq;
/// use kosaraju_sccs::graphs::VecGraph;
///
/// let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (3, 0)])?;
/// let mut visit = Seq::new(&graph);
///
/// assert_eq!(reach_from(&mut visit, 1), 2);
/// assert_eq!(reach_from(&mut visit, 0), 1);
/// assert!(!visit.known(3));
/// # Ok::<(), kosaraju_sccs::graphs::GraphError>(())
/// ```
pub fn reach_from<G: RandomAccessGraph>(visit: &mut Seq<'_, G>, root: usize) -> usize {
    let mut reached = 0;
    visit
        .visit([root], |event| {
            if let Event::Previsit { .. } = event {
                reached += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    reached
}
