/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Chainkudo.

Chainkudo is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Chainkudo is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Chainkudo. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Without options, Chainkudo asks for the map shape, the number of chains, and the puzzle
//! name. Each of these parameters can also be given on the command line.
//!
//! # Examples
//!
//! List the available shapes:
//!
//! ```text
//! $ chainkudo --ls
//! triangle (minimum 3 chains)
//! square (minimum 4 chains)
//! hexagon (minimum 6 chains)
//! ```
//!
//! Generate a square puzzle with five chains, its board view, and some statistics:
//!
//! ```text
//! $ chainkudo -s square -c 5 -n weekly --board --summary
//! Enter a name for the puzzle: ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::application::Settings;
use crate::config::COPYRIGHT_NOTICE;
use crate::generator::map::{SHAPES, Shape};

/// Generate arithmetic chain puzzles as HTML pages.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the map shapes
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Map shape
    #[arg(value_enum, short, long)]
    shape: Option<Shape>,

    /// Number of chains
    #[arg(short, long)]
    count: Option<usize>,

    /// Name of the puzzle, used for the file names
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Directory where the files are created
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Stylesheet to link from the document (can be repeated, replaces main.css)
    #[arg(long = "css", value_name = "FILE")]
    header_files: Vec<String>,

    /// Also save the board view of the chains
    #[arg(long, default_value_t = false)]
    board: bool,

    /// Also save the chains in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzle
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options for building a puzzle.
#[derive(Debug)]
pub struct Options {
    pub settings: Settings,

    /// Whether to print statistics.
    pub summary: bool,
}

/// Result of the command-line processing.
#[derive(Debug)]
pub enum Command {
    /// Nothing more to do. Exit with the given code.
    Exit(u8),

    /// Build a puzzle.
    Build(Options),
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Self {
            settings: Settings {
                shape: args.shape,
                count: args.count,
                name: args.name,
                seed: args.seed,
                output_dir: args.output_dir,
                header_files: args.header_files,
                board: args.board,
                json: args.json,
            },
            summary: args.summary,
        }
    }
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Options: {args:?}");

    //
    // List the shapes
    //
    if args.ls {
        for shape in SHAPES {
            println!("{shape} (minimum {} chains)", shape.min_chains());
        }
        return Command::Exit(0);
    }

    Command::Build(Options::from(args))
}
