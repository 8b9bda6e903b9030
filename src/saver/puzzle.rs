/*
puzzle.rs

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

//! Save the generated puzzle.
//!
//! The file names derive from the puzzle name, the shape, and the number of chains:
//! `<name>_<shape>_<count>.html`.
//! The name is used as is. Characters that are not valid in file names are not escaped.
//!
//! Besides the puzzle document, the board view and a JSON export of the chains can also be
//! saved. The JSON export is a serialization of the [`Map`] object by using [`serde`].

use chrono::Local;
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::PuzzleError;
use crate::generator::map::{Map, Shape};

/// JSON export of a generated puzzle.
#[derive(Serialize, Debug)]
struct PuzzleRecord<'a> {
    /// Generation date in RFC 3339 format.
    created: String,

    map: &'a Map,
}

/// Object to save a puzzle.
pub struct SaverPuzzle {
    /// Path to the output directory.
    output_dir: PathBuf,

    /// File name without the extension.
    stem: String,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the files must be saved.
    pub fn new(output_dir: PathBuf, name: &str, shape: Shape, num_chains: usize) -> Self {
        let stem: String = format!("{name}_{shape}_{num_chains}");
        debug!("Output files: {output_dir:?}/{stem}.*");
        Self { output_dir, stem }
    }

    /// Return the path to the puzzle document.
    pub fn puzzle_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.stem))
    }

    /// Return the path to the board document.
    pub fn board_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_board.html", self.stem))
    }

    /// Return the path to the JSON export.
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.stem))
    }

    /// Save the puzzle document and return its path.
    pub fn save_puzzle(&self, html: &str) -> Result<PathBuf, PuzzleError> {
        let path: PathBuf = self.puzzle_path();
        write_text(&path, html)?;
        Ok(path)
    }

    /// Save the board document and return its path.
    pub fn save_board(&self, html: &str) -> Result<PathBuf, PuzzleError> {
        let path: PathBuf = self.board_path();
        write_text(&path, html)?;
        Ok(path)
    }

    /// Save the chains in JSON format and return the path of the file.
    pub fn save_json(&self, map: &Map) -> Result<PathBuf, PuzzleError> {
        let path: PathBuf = self.json_path();
        let record: PuzzleRecord = PuzzleRecord {
            created: Local::now().to_rfc3339(),
            map,
        };
        let file: File = File::create(&path).map_err(|source| PuzzleError::FileWriteFailure {
            path: path.clone(),
            source,
        })?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &record).map_err(|source| {
            PuzzleError::JsonExport {
                path: path.clone(),
                source,
            }
        })?;
        writer
            .flush()
            .map_err(|source| PuzzleError::FileWriteFailure {
                path: path.clone(),
                source,
            })?;
        debug!("Saved {path:?}");
        Ok(path)
    }
}

/// Write the text into the file. The file is closed before the function returns.
fn write_text(path: &Path, text: &str) -> Result<(), PuzzleError> {
    let to_error = |source| PuzzleError::FileWriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let file: File = File::create(path).map_err(to_error)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    writer.write_all(text.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    debug!("Saved {path:?}");
    Ok(())
}
