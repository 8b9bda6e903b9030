/*
node.rs

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

//! Chain nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;

/// Node type.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Number,
    Operator,
    Variable,
    Answer,
}

impl NodeKind {
    /// Return the name of the kind, which is also its CSS class.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Number => "number",
            NodeKind::Operator => "operator",
            NodeKind::Variable => "variable",
            NodeKind::Answer => "answer",
        }
    }

    /// Whether nodes of this kind carry a value.
    pub fn is_value_bearing(&self) -> bool {
        matches!(self, NodeKind::Number | NodeKind::Answer)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(NodeKind::Number),
            "operator" => Ok(NodeKind::Operator),
            "variable" => Ok(NodeKind::Variable),
            "answer" => Ok(NodeKind::Answer),
            _ => Err(PuzzleError::InvalidNodeKind(s.to_string())),
        }
    }
}

/// Node object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,

    /// Only meaningful for [`NodeKind::Number`] and [`NodeKind::Answer`] nodes.
    pub value: Option<u32>,
}

impl Node {
    /// Create a [`Node`] object without a value.
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, value: None }
    }

    /// Create a [`Node`] object with a value.
    pub fn with_value(kind: NodeKind, value: u32) -> Self {
        Self {
            kind,
            value: Some(value),
        }
    }

    /// Return the value of a value-bearing node.
    pub fn get_value(&self) -> Option<u32> {
        if self.kind.is_value_bearing() {
            self.value
        } else {
            None
        }
    }

    /// Return the HTML fragment for the node.
    ///
    /// Operators and variables never show their value. Numbers and answers without a value
    /// are rendered empty.
    pub fn render(&self) -> String {
        let text: String = match self.kind {
            NodeKind::Number | NodeKind::Answer => {
                self.value.map(|v| v.to_string()).unwrap_or_default()
            }
            NodeKind::Operator | NodeKind::Variable => String::new(),
        };
        format!("<div class=\"node {}\">{text}</div>", self.kind)
    }
}
