/*
map.rs

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

//! Map shapes and the board view.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::chain::Chain;
use crate::errors::PuzzleError;

/// Map shape.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Triangle,
    Square,
    Hexagon,
}

/// Supported shapes, in the order they are offered to the user.
pub const SHAPES: [Shape; 3] = [Shape::Triangle, Shape::Square, Shape::Hexagon];

impl Shape {
    /// Return the name of the shape, which is also its CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Hexagon => "hexagon",
        }
    }

    /// Minimum number of chains for a map of this shape.
    pub fn min_chains(&self) -> usize {
        match self {
            Shape::Triangle => 3,
            Shape::Square => 4,
            Shape::Hexagon => 6,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Shape {
    type Err = PuzzleError;

    /// Only the exact shape names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHAPES
            .iter()
            .find(|shape| shape.as_str() == s)
            .copied()
            .ok_or_else(|| PuzzleError::InvalidShapeInput(s.to_string()))
    }
}

/// Map object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub shape: Shape,

    /// The map owns its chains.
    chains: Vec<Chain>,

    /// Optional name given by the user.
    pub name: Option<String>,
}

impl Map {
    /// Create a [`Map`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if there are fewer chains than the shape requires.
    pub fn new(
        shape: Shape,
        chains: Vec<Chain>,
        name: Option<String>,
    ) -> Result<Self, PuzzleError> {
        let minimum: usize = shape.min_chains();
        if chains.len() < minimum {
            return Err(PuzzleError::InsufficientChainCount {
                shape,
                count: chains.len(),
                minimum,
            });
        }
        Ok(Self {
            shape,
            chains,
            name,
        })
    }

    /// Return the chains.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Return the HTML fragment for the board.
    ///
    /// Only the layout is rendered: the node values are never shown, even when they are set.
    pub fn render(&self) -> String {
        let mut html: String = format!("<div class=\"map {}\">", self.shape);
        for chain in &self.chains {
            html.push_str("<div class=\"chain\">");
            for node in chain.nodes() {
                html.push_str(&format!("<div class=\"node {}\"></div>", node.kind));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::node::{Node, NodeKind};

    fn chain() -> Chain {
        Chain::from(vec![
            Node::with_value(NodeKind::Number, 5),
            Node::new(NodeKind::Operator),
            Node::with_value(NodeKind::Answer, 9),
        ])
    }

    #[test]
    fn shape_minimums_are_positive() {
        for shape in SHAPES {
            assert!(shape.min_chains() >= 1);
        }
        assert_eq!(Shape::Square.min_chains(), 4);
    }

    #[test]
    fn parse_shape() {
        assert_eq!("square".parse::<Shape>().unwrap(), Shape::Square);
        assert_eq!("hexagon".parse::<Shape>().unwrap(), Shape::Hexagon);
        for name in ["SQUARE", "Square", " square", "square ", "hexagon\n"] {
            assert!(matches!(
                name.parse::<Shape>(),
                Err(PuzzleError::InvalidShapeInput(ref s)) if s == name
            ));
        }
        assert!(matches!(
            "circle".parse::<Shape>(),
            Err(PuzzleError::InvalidShapeInput(ref s)) if s == "circle"
        ));
        assert!("".parse::<Shape>().is_err());
    }

    #[test]
    fn new_checks_minimum() {
        let err = Map::new(Shape::Square, vec![chain(), chain()], None).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InsufficientChainCount {
                shape: Shape::Square,
                count: 2,
                minimum: 4
            }
        ));
        let map: Map = Map::new(Shape::Triangle, vec![chain(); 3], Some("t".to_string())).unwrap();
        assert_eq!(map.chains().len(), 3);
    }

    #[test]
    fn render_hides_values() {
        let map: Map = Map::new(Shape::Triangle, vec![chain(); 3], None).unwrap();
        let html: String = map.render();
        let one: &str = "<div class=\"chain\">\
                         <div class=\"node number\"></div>\
                         <div class=\"node operator\"></div>\
                         <div class=\"node answer\"></div>\
                         </div>";
        assert_eq!(
            html,
            format!("<div class=\"map triangle\">{one}{one}{one}</div>")
        );
        assert!(!html.contains('5'));
        assert!(!html.contains('9'));
    }

    #[test]
    fn render_empty_map() {
        let map: Map = Map {
            shape: Shape::Hexagon,
            chains: Vec::new(),
            name: None,
        };
        let html: String = map.render();
        assert_eq!(html, "<div class=\"map hexagon\"></div>");
        assert!(!html.contains("chain"));
    }
}
