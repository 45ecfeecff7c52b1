// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Three subcommands run the widget's own code against a built site: `search`
//! to see the ranked results, `render` to see the exact HTML fragment the
//! modal would show, and `inspect` to audit the index the generator emitted.
//! `<INDEX>` is the JSON file or the site root it was built into.

pub mod display;
pub mod inspect;
pub mod logging;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Query, render and audit a static site's search index",
    version
)]
pub struct Cli {
    /// TOML file with search settings (overridden by SITESEARCH_* variables)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. "debug" or "sitesearch=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query and display ranked results
    Search {
        /// Index JSON file, or a built site root directory
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the configured max_results)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the results HTML the search modal would render
    Render {
        /// Index JSON file, or a built site root directory
        index: PathBuf,

        /// Search query
        query: String,

        /// Zero-based position of the highlighted result
        #[arg(long)]
        active: Option<usize>,
    },

    /// Audit an index: types, missing fields, duplicate URLs
    Inspect {
        /// Index JSON file, or a built site root directory
        index: PathBuf,
    },
}
