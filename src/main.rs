/*
main.rs

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

use std::io;
use std::process::ExitCode;

use chainkudo::application::{ChainkudoApplication, Report};
use chainkudo::cli_options::{self, Command};
use chainkudo::player_input::PlayerInput;

fn main() -> ExitCode {
    let options: cli_options::Options = match cli_options::parse() {
        Command::Exit(ret) => return ExitCode::from(ret),
        Command::Build(options) => options,
    };

    let mut player = PlayerInput::new(io::stdin().lock(), io::stdout());
    let app: ChainkudoApplication = ChainkudoApplication::new(options.settings);
    let report: Report = match app.run(&mut player) {
        Ok(r) => r,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("Puzzle saved in {}", report.puzzle_path.display());
    if let Some(path) = &report.board_path {
        println!("Board saved in {}", path.display());
    }
    if let Some(path) = &report.json_path {
        println!("Chains saved in {}", path.display());
    }
    if options.summary {
        println!("{}", report.summary);
    }
    ExitCode::SUCCESS
}
