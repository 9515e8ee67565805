// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Two subcommands: `search` runs a query against a generated index file the
//! same way the browser would, and `inspect` reports what the loader made of
//! the file. Both load through the same single-shot loader the page uses.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use sitesearch::SearchMode;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Static-site search: query and inspect search.xml / JSON indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    /// Whitespace keywords, weighted scoring, capped list (search-as-you-type box)
    Keyword,
    /// Whole query as one phrase, snippet windows (dedicated search page)
    Phrase,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keyword => SearchMode::Keyword,
            ModeArg::Phrase => SearchMode::Phrase,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to search.xml or a JSON entry list
        index: String,

        /// Search query
        query: String,

        /// Presentation mode
        #[arg(short, long, value_enum, default_value = "keyword")]
        mode: ModeArg,

        /// Maximum number of rendered keyword results (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Seed for highlight colors (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the HTML fragment the page would receive instead of terminal output
        #[arg(long)]
        html: bool,

        /// JSON file with search options (camelCase keys, all optional)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Report how an index file loads
    Inspect {
        /// Path to search.xml or a JSON entry list
        index: String,
    },
}
