/*
config.rs

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

//! Static configuration.

use std::ops::RangeInclusive;

pub const COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Stylesheets linked from the head of the generated documents.
pub const HEADER_FILES: [&str; 1] = ["main.css"];

/// Number of nodes in a generated chain.
pub const CHAIN_LENGTH: RangeInclusive<usize> = 5..=10;

/// Values drawn for the number nodes when the puzzle is rendered.
pub const DISPLAY_VALUES: RangeInclusive<u32> = 1..=9;
