/*
application.rs

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

//! Build a puzzle and save it.
//!
//! The parameters that are not provided on the command line are asked to the user.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::errors::PuzzleError;
use crate::generator::chain::Chain;
use crate::generator::map::{Map, Shape};
use crate::generator::node::NodeKind;
use crate::generator::puzzle::{NumberGroup, Puzzle};
use crate::generator::random_chain::RandomChain;
use crate::player_input::{PlayerInput, check_num_chains};
use crate::saver::puzzle::SaverPuzzle;

/// Puzzle parameters.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Map shape. Asked to the user when not set.
    pub shape: Option<Shape>,

    /// Number of chains. Asked to the user when not set.
    pub count: Option<usize>,

    /// Puzzle name. Asked to the user when not set.
    pub name: Option<String>,

    /// Seed for the random generator. A random seed is used when not set.
    pub seed: Option<u64>,

    /// Directory where the files are created.
    pub output_dir: PathBuf,

    /// Stylesheets that replace the default list.
    pub header_files: Vec<String>,

    /// Whether to also save the board view.
    pub board: bool,

    /// Whether to also save the chains in JSON format.
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape: None,
            count: None,
            name: None,
            seed: None,
            output_dir: PathBuf::from("."),
            header_files: Vec::new(),
            board: false,
            json: false,
        }
    }
}

/// Some statistics about the generated puzzle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub chains: usize,

    /// Number of nodes for each kind.
    pub kinds: HashMap<NodeKind, usize>,

    /// Number of `puzzle-chain` groups in the document.
    pub groups: usize,

    /// Number of nodes displayed in the groups.
    pub displayed: usize,
}

impl Summary {
    fn new(map: &Map, groups: &[NumberGroup<'_>]) -> Self {
        let mut kinds: HashMap<NodeKind, usize> = HashMap::new();
        for node in map.chains().iter().flat_map(|c| c.nodes()) {
            *kinds.entry(node.kind).or_insert(0) += 1;
        }
        Self {
            chains: map.chains().len(),
            kinds,
            groups: groups.len(),
            displayed: groups.iter().map(|g| g.nodes.len()).sum(),
        }
    }

    /// Return the number of nodes of the given kind.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.kinds.get(&kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "
   chains = {}
  numbers = {}
operators = {}
variables = {}
  answers = {}
   groups = {}
displayed = {}",
            self.chains,
            self.count(NodeKind::Number),
            self.count(NodeKind::Operator),
            self.count(NodeKind::Variable),
            self.count(NodeKind::Answer),
            self.groups,
            self.displayed
        )
    }
}

/// Files created by [`ChainkudoApplication::run`].
#[derive(Debug)]
pub struct Report {
    pub puzzle_path: PathBuf,
    pub board_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub summary: Summary,
}

/// Puzzle builder.
pub struct ChainkudoApplication {
    settings: Settings,
}

impl ChainkudoApplication {
    /// Create a [`ChainkudoApplication`] object.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Build the puzzle, render it, and save it.
    ///
    /// # Errors
    ///
    /// The method returns an error if an answer is not a number when the number of chains is
    /// expected, if the number of chains from the command line is too small, if the input is
    /// closed, or if a file cannot be written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        player: &mut PlayerInput<R, W>,
    ) -> Result<Report, PuzzleError> {
        let shape: Shape = match self.settings.shape {
            Some(s) => s,
            None => player.ask_shape()?,
        };
        let num_chains: usize = match self.settings.count {
            Some(c) => check_num_chains(shape, c)?,
            None => player.ask_num_chains(shape)?,
        };
        debug!("Shape = {shape}  Number of chains = {num_chains}");

        let mut rng: StdRng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Generate the chains
        let generator: RandomChain = RandomChain::new();
        let mut chains: Vec<Chain> = Vec::with_capacity(num_chains);
        for i in 0..num_chains {
            debug!("Chain {i}");
            chains.push(generator.generate(&mut rng));
        }

        // Build the puzzle
        let name: String = match &self.settings.name {
            Some(n) => n.clone(),
            None => player.ask_name()?,
        };
        let map: Map = Map::new(shape, chains, Some(name.clone()))?;
        let mut puzzle: Puzzle = Puzzle::new(map);
        if !self.settings.header_files.is_empty() {
            puzzle.set_header_files(self.settings.header_files.clone());
        }
        let (html, groups) = puzzle.render_document_with_groups(&mut rng);
        let summary: Summary = Summary::new(puzzle.map(), &groups);

        // Save the files
        let saver: SaverPuzzle = SaverPuzzle::new(
            self.settings.output_dir.clone(),
            &name,
            puzzle.shape(),
            num_chains,
        );
        let puzzle_path: PathBuf = saver.save_puzzle(&html)?;
        info!("Puzzle saved in {puzzle_path:?}");

        let board_path: Option<PathBuf> = if self.settings.board {
            Some(saver.save_board(&puzzle.render_board_document())?)
        } else {
            None
        };
        let json_path: Option<PathBuf> = if self.settings.json {
            Some(saver.save_json(puzzle.map())?)
        } else {
            None
        };

        Ok(Report {
            puzzle_path,
            board_path,
            json_path,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn temp_dir(name: &str) -> PathBuf {
        let dir: PathBuf = std::env::temp_dir().join(format!(
            "chainkudo-app-{name}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn settings(dir: &PathBuf, seed: u64) -> Settings {
        Settings {
            seed: Some(seed),
            output_dir: dir.clone(),
            ..Settings::default()
        }
    }

    fn run(settings: Settings, answers: &str) -> (Result<Report, PuzzleError>, String) {
        let mut player = PlayerInput::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
        let res = ChainkudoApplication::new(settings).run(&mut player);
        let (_, output) = player.into_parts();
        (res, String::from_utf8(output).unwrap())
    }

    #[test]
    fn square_with_four_chains() {
        let dir: PathBuf = temp_dir("square4");
        let s: Settings = Settings {
            json: true,
            ..settings(&dir, 1)
        };
        let (res, questions) = run(s, "square\n4\nweekly\n");
        let report: Report = res.unwrap();

        assert_eq!(questions.matches("Enter the number of chains").count(), 1);
        assert_eq!(report.puzzle_path, dir.join("weekly_square_4.html"));
        assert_eq!(report.summary.chains, 4);
        assert_eq!(report.summary.count(NodeKind::Answer), 4);
        assert!(report.summary.count(NodeKind::Operator) >= 4);

        let html: String = fs::read_to_string(&report.puzzle_path).unwrap();
        assert!(html.starts_with(
            "<html><head><link rel=\"stylesheet\" href=\"main.css\"></head>\
             <body><div class=\"puzzle square\">"
        ));
        assert!(html.ends_with("</div></body></html>"));
        assert_eq!(
            html.matches("<div class=\"puzzle-chain\">").count(),
            report.summary.groups
        );
        assert_eq!(
            html.matches("<div class=\"puzzle-node number\">").count(),
            report.summary.displayed
        );
        assert!(report.board_path.is_none());

        // Every generated chain follows the layout rules
        let json_path: PathBuf = report.json_path.unwrap();
        assert_eq!(json_path, dir.join("weekly_square_4.json"));
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        let map: Map = serde_json::from_value(value["map"].clone()).unwrap();
        assert_eq!(map.shape, Shape::Square);
        assert_eq!(map.name.as_deref(), Some("weekly"));
        assert_eq!(map.chains().len(), 4);
        for chain in map.chains() {
            assert!(chain.is_well_formed());
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn square_with_two_chains_asks_again() {
        let dir: PathBuf = temp_dir("square2");
        let (res, questions) = run(settings(&dir, 2), "square\n2\n3\n4\nretry\n");
        let report: Report = res.unwrap();

        assert_eq!(questions.matches("Enter the number of chains").count(), 3);
        assert_eq!(report.puzzle_path, dir.join("retry_square_4.html"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn count_from_command_line_below_minimum() {
        let dir: PathBuf = temp_dir("cli-count");
        let s: Settings = Settings {
            shape: Some(Shape::Hexagon),
            count: Some(5),
            ..settings(&dir, 3)
        };
        let (res, questions) = run(s, "");
        assert!(matches!(
            res,
            Err(PuzzleError::InsufficientChainCount { minimum: 6, .. })
        ));
        assert!(questions.is_empty());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn malformed_count_stops_before_writing() {
        let dir: PathBuf = temp_dir("malformed");
        let (res, _) = run(settings(&dir, 4), "triangle\nthree\n");
        assert!(matches!(res, Err(PuzzleError::MalformedIntegerInput(_))));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn same_seed_same_document() {
        let dir_a: PathBuf = temp_dir("seed-a");
        let dir_b: PathBuf = temp_dir("seed-b");
        let (a, _) = run(settings(&dir_a, 77), "hexagon\n6\nsame\n");
        let (b, _) = run(settings(&dir_b, 77), "hexagon\n6\nsame\n");
        let a: String = fs::read_to_string(a.unwrap().puzzle_path).unwrap();
        let b: String = fs::read_to_string(b.unwrap().puzzle_path).unwrap();
        assert_eq!(a, b);
        fs::remove_dir_all(dir_a).unwrap();
        fs::remove_dir_all(dir_b).unwrap();
    }

    #[test]
    fn all_files_without_questions() {
        let dir: PathBuf = temp_dir("all");
        let s: Settings = Settings {
            shape: Some(Shape::Triangle),
            count: Some(3),
            name: Some("full".to_string()),
            header_files: vec!["print.css".to_string()],
            board: true,
            json: true,
            ..settings(&dir, 5)
        };
        let (res, questions) = run(s, "");
        let report: Report = res.unwrap();
        assert!(questions.is_empty());

        let html: String = fs::read_to_string(&report.puzzle_path).unwrap();
        assert!(html.contains("<link rel=\"stylesheet\" href=\"print.css\">"));
        assert!(!html.contains("main.css"));

        let board_path: PathBuf = report.board_path.unwrap();
        assert_eq!(board_path, dir.join("full_triangle_3_board.html"));
        let board: String = fs::read_to_string(board_path).unwrap();
        assert!(board.contains("<div class=\"map triangle\">"));
        assert_eq!(board.matches("<div class=\"chain\">").count(), 3);

        let json_path: PathBuf = report.json_path.unwrap();
        assert_eq!(json_path, dir.join("full_triangle_3.json"));
        fs::remove_dir_all(dir).unwrap();
    }
}
