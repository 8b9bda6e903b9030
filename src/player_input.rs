/*
player_input.rs

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

//! Ask the user for the puzzle parameters.
//!
//! The shape and the number of chains are asked again until the answer is valid.
//! An answer that is not a number when the number of chains is expected is an error, and so is
//! closing the standard input.

use log::debug;
use std::io::{BufRead, Write};

use crate::errors::PuzzleError;
use crate::generator::map::{SHAPES, Shape};

/// Verify that the number of chains is enough for the shape.
pub fn check_num_chains(shape: Shape, count: usize) -> Result<usize, PuzzleError> {
    let minimum: usize = shape.min_chains();
    if count < minimum {
        return Err(PuzzleError::InsufficientChainCount {
            shape,
            count,
            minimum,
        });
    }
    Ok(count)
}

/// Line-based questions and answers.
pub struct PlayerInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlayerInput<R, W> {
    /// Create a [`PlayerInput`] object that reads the answers from `input` and writes the
    /// questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the question and return the answer without the line terminator.
    fn ask(&mut self, question: &str) -> Result<String, PuzzleError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PuzzleError::UnexpectedEndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask for the map shape until the answer is a supported shape.
    pub fn ask_shape(&mut self) -> Result<Shape, PuzzleError> {
        let names: Vec<&str> = SHAPES.iter().map(|s| s.as_str()).collect();
        let question: String = format!("Select a map shape ({}): ", names.join(", "));
        loop {
            match self.ask(&question)?.parse::<Shape>() {
                Ok(shape) => return Ok(shape),
                Err(e) => debug!("{e}"),
            }
        }
    }

    /// Ask for the number of chains until the answer reaches the minimum for the shape.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::MalformedIntegerInput`] as soon as the answer is not an
    /// integer.
    pub fn ask_num_chains(&mut self, shape: Shape) -> Result<usize, PuzzleError> {
        let question: String = format!(
            "Enter the number of chains (minimum {}): ",
            shape.min_chains()
        );
        loop {
            let answer: String = self.ask(&question)?;
            let count: i64 = answer
                .trim()
                .parse()
                .map_err(|_| PuzzleError::MalformedIntegerInput(answer.clone()))?;

            // Negative answers are below any minimum
            let count: usize = match usize::try_from(count) {
                Ok(c) => c,
                Err(_) => continue,
            };
            match check_num_chains(shape, count) {
                Ok(c) => return Ok(c),
                Err(e) => debug!("{e}"),
            }
        }
    }

    /// Ask for the puzzle name. Any answer is accepted.
    pub fn ask_name(&mut self) -> Result<String, PuzzleError> {
        self.ask("Enter a name for the puzzle: ")
    }
}
