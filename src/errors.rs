/*
errors.rs

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

//! Errors raised while building and saving puzzles.
//!
//! Only [`PuzzleError::InvalidShapeInput`] and [`PuzzleError::InsufficientChainCount`] are
//! recovered, by the console prompts that ask the user again.
//! All the other errors end the program.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::generator::map::Shape;

/// Type of errors.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// The node kind is not one of `number`, `operator`, `variable`, or `answer`.
    #[error("Invalid node type: {0}")]
    InvalidNodeKind(String),

    /// The shape is not in the supported shapes table.
    #[error("Unknown map shape: {0}")]
    InvalidShapeInput(String),

    /// Not enough chains for the selected shape.
    #[error("A {shape} map needs at least {minimum} chains ({count} requested)")]
    InsufficientChainCount {
        shape: Shape,
        count: usize,
        minimum: usize,
    },

    /// The number of chains is not an integer.
    #[error("Invalid number of chains: {0:?}")]
    MalformedIntegerInput(String),

    /// The standard input was closed while a value was still expected.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    /// Reading the answers or writing the prompts failed.
    #[error("Console error: {0}")]
    ConsoleIo(#[from] io::Error),

    /// The output file cannot be created or written.
    #[error("Cannot write {path:?}: {source}")]
    FileWriteFailure { path: PathBuf, source: io::Error },

    /// The chains cannot be exported in JSON format.
    #[error("Cannot export {path:?}: {source}")]
    JsonExport {
        path: PathBuf,
        source: serde_json::Error,
    },
}
