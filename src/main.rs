/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use kosaraju_sccs::prelude::*;
use std::path::PathBuf;

/// Prints a graph in arc-list format, whether it is strongly connected, and
/// its strongly connected components, one per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The file containing the graph: the number of nodes on the first line,
    /// then one arc "tail,head" per line.
    graph: PathBuf,

    /// Increases the log level (can be repeated).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disables logging.
    #[arg(short, long)]
    quiet: bool,

    /// Prints the components by decreasing size.
    #[arg(long)]
    sort_by_size: bool,

    /// Prints only the sizes of the components.
    #[arg(long)]
    sizes: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(1 + args.verbose as usize)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let graph = read_graph(&args.graph)
        .with_context(|| format!("Could not load graph from {}", args.graph.display()))?;
    println!("{graph}");

    let mut pl = progress_logger![display_memory = true];
    let transpose = graph.transpose();

    let connected = sccs::is_strongly_connected(&graph, &transpose, &mut pl);
    println!("strongly connected: {connected}");

    let mut components = sccs::kosaraju(&graph, &transpose, &mut pl);
    if args.sort_by_size {
        components.sort_by_size();
    }

    if args.sizes {
        println!("{:?}", components.compute_sizes());
    } else {
        for list in components.lists() {
            println!("{list:?}");
        }
    }

    Ok(())
}
