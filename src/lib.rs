/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graphs;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::RandomAccessGraph;
}

/// Use `use kosaraju_sccs::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::sccs;
    pub use algo::visits::depth_first;
    pub use algo::{finish_order, finish_order_from, finish_order_with, reach_from};
    pub use graphs::{GraphError, VecGraph};
    pub use traits::*;
    pub use utils::{parse_graph, read_graph, LoadError};
}
