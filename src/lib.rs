/*
lib.rs

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

//! Arithmetic chain puzzles rendered as static HTML pages.
//!
//! See [`generator`] for the puzzle model and [`application`] for the complete build of a
//! puzzle file.

pub mod application;
pub mod cli_options;
pub mod config;
pub mod errors;
pub mod generator;
pub mod player_input;
pub mod saver;
