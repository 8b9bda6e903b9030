/*
chain.rs

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

//! Chain of nodes.
//!
//! A chain reads as an arithmetic line: numbers and variables separated by operators, and
//! terminated by an operator followed by the answer.

use serde::{Deserialize, Serialize};

use super::node::{Node, NodeKind};
use crate::config::CHAIN_LENGTH;

/// Chain object.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Ordered list of the nodes.
    nodes: Vec<Node>,
}

impl From<Vec<Node>> for Chain {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl Chain {
    /// Return the nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the nodes that carry a value (numbers and answers).
    pub fn value_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_value_bearing())
    }

    /// Whether a number or an answer in the chain has the given value.
    pub fn has_value(&self, value: u32) -> bool {
        self.value_nodes().any(|n| n.get_value() == Some(value))
    }

    /// Whether the chain has the layout produced by the random generator.
    ///
    /// The chain must start with a number or a variable, and end with an operator followed by
    /// the answer.
    pub fn is_well_formed(&self) -> bool {
        let l: usize = self.nodes.len();
        if !CHAIN_LENGTH.contains(&l) {
            return false;
        }
        matches!(self.nodes[0].kind, NodeKind::Number | NodeKind::Variable)
            && self.nodes[l - 2].kind == NodeKind::Operator
            && self.nodes[l - 1].kind == NodeKind::Answer
    }

    /// Return the HTML fragment for the chain.
    pub fn render(&self) -> String {
        let mut html: String = String::from("<div class=\"chain\">");
        for node in &self.nodes {
            html.push_str(&node.render());
        }
        html.push_str("</div>");
        html
    }
}
