// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the strdist command-line interface.
//!
//! Three subcommands: `levenshtein` for the raw edit count, `damerau` for the
//! restricted Damerau-Levenshtein result with its normalized scores, and
//! `compare` for the similarity layer (preprocessing, algorithm choice,
//! optional JSON config file and JSON output).

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "strdist",
    about = "Bit-parallel Levenshtein and restricted Damerau-Levenshtein distances",
    version
)]
pub struct Cli {
    /// Log engine decisions to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Levenshtein distance between two strings
    Levenshtein {
        a: String,
        b: String,

        /// Count UTF-16 code units instead of Unicode scalar values
        #[arg(long)]
        utf16: bool,
    },

    /// Restricted Damerau-Levenshtein distance with relative and similarity scores
    Damerau {
        a: String,
        b: String,

        /// Report at most this many steps
        #[arg(short, long)]
        limit: Option<usize>,

        /// Give up early on dissimilar inputs (approximate)
        #[arg(long)]
        early_exit: bool,
    },

    /// Similarity between two strings after preprocessing
    Compare {
        a: String,
        b: String,

        /// Algorithm name: levenshtein or damerau-levenshtein
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Keep case instead of lowercasing both inputs
        #[arg(long)]
        case_sensitive: bool,

        /// Strip diacritics and collapse whitespace
        #[arg(long)]
        normalize: bool,

        /// JSON config file; flags given on the command line take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
