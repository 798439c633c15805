/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument [`Event`].
//! The callback is called at the [start of a visit](Event::Init), [every time
//! a new node is discovered](Event::Previsit), [every time a node is
//! revisited](Event::Revisit), [every time the enumeration of the successors
//! of a node is completed](Event::Postvisit), and [at the end of the
//! visit](Event::Done).

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// Initialization: a new visit tree is started at `root`. This event
    /// should be used to set up state at the start of the visit.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless `node` is equal to `root`.
    Previsit {
        /// The current node.
        node: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the `root` to `node`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        node: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the `root` to `node`.
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed: the
    /// node is finished, and we are retreating from a tree arc, unless `node`
    /// is equal to `root`.
    Postvisit {
        /// The current node.
        node: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the `root` to `node`.
        depth: usize,
    },
    /// The visit tree rooted at `root` has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}
