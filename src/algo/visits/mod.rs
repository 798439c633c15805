/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Implementations accept a callback receiving visit events. The callback
//! returns a [`ControlFlow`]: returning [`Break`](ControlFlow::Break) stops the
//! visit, which then returns the break value. Infallible visits use
//! [`Infallible`](std::convert::Infallible) as break type, and their result
//! can be unwrapped with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).

pub mod depth_first;

use std::ops::ControlFlow;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit`](Sequential::visit) method, which performs a visit of a graph
/// starting from a sequence of roots, and the
/// [`visit_all`](Sequential::visit_all) method, which performs a visit of the
/// whole graph taking roots in increasing order.
///
/// Nodes discovered by a visit stay known until [`reset`](Sequential::reset)
/// is called, so roots that have already been discovered are skipped.
pub trait Sequential<A> {
    /// Visits the graph from the specified roots, in the given order.
    ///
    /// # Arguments
    ///
    /// * `roots`: the nodes to start the visit from.
    ///
    /// * `callback`: the callback function.
    fn visit<R: IntoIterator<Item = usize>, B, C: FnMut(A) -> ControlFlow<B, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<B, ()>;

    /// Visits the whole graph, using nodes in increasing order as roots.
    ///
    /// See [`visit`](Sequential::visit) for more details.
    fn visit_all<B, C: FnMut(A) -> ControlFlow<B, ()>>(
        &mut self,
        callback: C,
    ) -> ControlFlow<B, ()>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
