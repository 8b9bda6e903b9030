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

//! Puzzle document.
//!
//! The puzzle does not show the chains. Instead, every number node receives a random value
//! and the nodes that share a value are displayed together, in a `puzzle-chain` group.
//! Numbers with a value that no other node received are not displayed at all.

use log::debug;
use rand::Rng;

use super::map::{Map, Shape};
use super::node::{Node, NodeKind};
use crate::config::{DISPLAY_VALUES, HEADER_FILES};

/// Number nodes that received the same random value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberGroup<'a> {
    /// Value displayed for all the nodes in the group.
    pub value: u32,

    /// Nodes in the order they appear in the chains.
    pub nodes: Vec<&'a Node>,
}

/// Puzzle object.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Chains and shape of the puzzle.
    map: Map,

    /// Stylesheets linked from the document head.
    header_files: Vec<String>,
}

impl Puzzle {
    /// Create a [`Puzzle`] object that links the default stylesheets.
    pub fn new(map: Map) -> Self {
        Self {
            map,
            header_files: HEADER_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Replace the list of stylesheets.
    pub fn set_header_files(&mut self, header_files: Vec<String>) {
        self.header_files = header_files;
    }

    /// Return the underlying map.
    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn shape(&self) -> Shape {
        self.map.shape
    }

    /// Return the `<head>` content.
    fn header_html(&self) -> String {
        self.header_files
            .iter()
            .map(|file| format!("<link rel=\"stylesheet\" href=\"{file}\">"))
            .collect()
    }

    /// Draw a random value for each number node and group the nodes by value.
    ///
    /// A new value is drawn for every number node, in chain order. Only the groups with at
    /// least two nodes are returned, in the order their value was first drawn.
    pub fn number_groups<R: Rng>(&self, rng: &mut R) -> Vec<NumberGroup<'_>> {
        let mut groups: Vec<NumberGroup<'_>> = Vec::new();

        for chain in self.map.chains() {
            for node in chain.nodes() {
                if node.kind != NodeKind::Number {
                    continue;
                }
                let value: u32 = rng.random_range(DISPLAY_VALUES);
                match groups.iter_mut().find(|g| g.value == value) {
                    Some(group) => group.nodes.push(node),
                    None => groups.push(NumberGroup {
                        value,
                        nodes: vec![node],
                    }),
                }
            }
        }

        // Singletons are never displayed
        groups.retain(|g| g.nodes.len() > 1);
        debug!(
            "Groups: {:?}",
            groups
                .iter()
                .map(|g| (g.value, g.nodes.len()))
                .collect::<Vec<(u32, usize)>>()
        );
        groups
    }

    /// Return the HTML document for the given groups.
    fn render_groups(&self, groups: &[NumberGroup<'_>]) -> String {
        let mut html: String = format!(
            "<html><head>{}</head><body><div class=\"puzzle {}\">",
            self.header_html(),
            self.map.shape
        );
        for group in groups {
            html.push_str("<div class=\"puzzle-chain\">");
            for node in &group.nodes {
                html.push_str(&format!(
                    "<div class=\"puzzle-node {}\">{}</div>",
                    node.kind, group.value
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div></body></html>");
        html
    }

    /// Draw the number values and return the complete HTML document.
    pub fn render_document<R: Rng>(&self, rng: &mut R) -> String {
        self.render_document_with_groups(rng).0
    }

    /// Draw the number values and return the complete HTML document, with the groups it
    /// displays.
    pub fn render_document_with_groups<R: Rng>(
        &self,
        rng: &mut R,
    ) -> (String, Vec<NumberGroup<'_>>) {
        let groups: Vec<NumberGroup<'_>> = self.number_groups(rng);
        let html: String = self.render_groups(&groups);
        (html, groups)
    }

    /// Return an HTML document that shows the board layout of the chains.
    pub fn render_board_document(&self) -> String {
        format!(
            "<html><head>{}</head><body>{}</body></html>",
            self.header_html(),
            self.map.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::chain::Chain;
    use crate::generator::random_chain::RandomChain;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn numbers_chain(count: usize) -> Chain {
        let mut nodes: Vec<Node> = vec![Node::new(NodeKind::Number); count];
        nodes.push(Node::new(NodeKind::Operator));
        nodes.push(Node::new(NodeKind::Answer));
        Chain::from(nodes)
    }

    fn random_puzzle(seed: u64, shape: Shape, count: usize) -> Puzzle {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let generator: RandomChain = RandomChain::default();
        let chains: Vec<Chain> = (0..count)
            .map(|_| generator.generate(&mut rng))
            .collect();
        Puzzle::new(Map::new(shape, chains, None).unwrap())
    }

    #[test]
    fn groups_have_several_nodes_with_same_value() {
        for seed in 0..50 {
            let puzzle: Puzzle = random_puzzle(seed, Shape::Hexagon, 8);
            let mut rng: StdRng = StdRng::seed_from_u64(seed + 1000);
            for group in puzzle.number_groups(&mut rng) {
                assert!(group.nodes.len() >= 2);
                assert!(DISPLAY_VALUES.contains(&group.value));
                assert!(group.nodes.iter().all(|n| n.kind == NodeKind::Number));
            }
        }
    }

    #[test]
    fn ten_numbers_always_collide() {
        // With only nine possible values, at least two of the ten numbers share a value
        let chains: Vec<Chain> = vec![numbers_chain(10), Chain::default(), Chain::default()];
        let puzzle: Puzzle = Puzzle::new(Map::new(Shape::Triangle, chains, None).unwrap());
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let groups: Vec<NumberGroup<'_>> = puzzle.number_groups(&mut rng);
        assert!(!groups.is_empty());
        let total: usize = groups.iter().map(|g| g.nodes.len()).sum();
        assert!(total <= 10);
    }

    #[test]
    fn single_number_is_never_displayed() {
        let chains: Vec<Chain> = vec![numbers_chain(1), Chain::default(), Chain::default()];
        let puzzle: Puzzle = Puzzle::new(Map::new(Shape::Triangle, chains, None).unwrap());
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        assert_eq!(
            puzzle.render_document(&mut rng),
            "<html><head><link rel=\"stylesheet\" href=\"main.css\"></head>\
             <body><div class=\"puzzle triangle\"></div></body></html>"
        );
    }

    #[test]
    fn render_groups_markup() {
        let chains: Vec<Chain> = vec![
            numbers_chain(2),
            Chain::default(),
            Chain::default(),
            Chain::default(),
        ];
        let mut puzzle: Puzzle = Puzzle::new(Map::new(Shape::Square, chains, None).unwrap());
        puzzle.set_header_files(vec!["a.css".to_string(), "b.css".to_string()]);
        let nodes: &[Node] = puzzle.map().chains()[0].nodes();
        let groups: Vec<NumberGroup<'_>> = vec![NumberGroup {
            value: 4,
            nodes: vec![&nodes[0], &nodes[1]],
        }];
        assert_eq!(
            puzzle.render_groups(&groups),
            "<html><head>\
             <link rel=\"stylesheet\" href=\"a.css\">\
             <link rel=\"stylesheet\" href=\"b.css\">\
             </head><body><div class=\"puzzle square\">\
             <div class=\"puzzle-chain\">\
             <div class=\"puzzle-node number\">4</div>\
             <div class=\"puzzle-node number\">4</div>\
             </div></div></body></html>"
        );
    }

    #[test]
    fn render_is_reproducible() {
        let puzzle: Puzzle = random_puzzle(3, Shape::Square, 6);
        let first: String = puzzle.render_document(&mut StdRng::seed_from_u64(99));
        let second: String = puzzle.render_document(&mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn document_matches_returned_groups() {
        let puzzle: Puzzle = random_puzzle(21, Shape::Hexagon, 9);
        let (html, groups) = puzzle.render_document_with_groups(&mut StdRng::seed_from_u64(4));
        assert_eq!(html, puzzle.render_document(&mut StdRng::seed_from_u64(4)));
        assert_eq!(html, puzzle.render_groups(&groups));
        assert_eq!(
            html.matches("<div class=\"puzzle-chain\">").count(),
            groups.len()
        );
    }

    #[test]
    fn board_document_wraps_map() {
        let puzzle: Puzzle = random_puzzle(5, Shape::Triangle, 3);
        let html: String = puzzle.render_board_document();
        assert!(html.starts_with(
            "<html><head><link rel=\"stylesheet\" href=\"main.css\"></head><body>\
             <div class=\"map triangle\">"
        ));
        assert_eq!(html.matches("<div class=\"chain\">").count(), 3);
        assert!(html.ends_with("</div></body></html>"));
    }
}
