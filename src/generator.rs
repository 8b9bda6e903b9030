/*
generator.rs

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

//! Build random puzzles and render them in HTML.
//!
//! A puzzle is made of chains, each chain being a list of [`node::Node`] objects: numbers,
//! operators, variables, and a final answer.
//!
//! * [`random_chain::RandomChain::generate`] builds a random [`chain::Chain`].
//! * A [`map::Map`] groups the chains for a given [`map::Shape`].
//!   Each shape requires a minimum number of chains.
//!   [`map::Map::render`] returns the board layout, without any value.
//! * A [`puzzle::Puzzle`] owns a map and renders the final HTML document.
//!   Every number gets a random value, and the numbers that share a value are displayed
//!   together.

pub mod chain;
pub mod map;
pub mod node;
pub mod puzzle;
pub mod random_chain;
