/*
random_chain.rs

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

//! Generate a random chain.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;

use super::chain::Chain;
use super::node::{Node, NodeKind};
use crate::config::CHAIN_LENGTH;

/// Kinds allowed for the first node.
const FIRST_KINDS: [NodeKind; 2] = [NodeKind::Number, NodeKind::Variable];

/// Kinds allowed between the first node and the final operator.
const BODY_KINDS: [NodeKind; 3] = [NodeKind::Number, NodeKind::Operator, NodeKind::Variable];

/// [`RandomChain`] object.
pub struct RandomChain {
    /// Range for the number of nodes in a chain.
    length: RangeInclusive<usize>,
}

impl Default for RandomChain {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomChain {
    /// Create the object.
    pub fn new() -> Self {
        Self {
            length: CHAIN_LENGTH,
        }
    }

    /// Generate and return a random chain.
    ///
    /// The first node is a number or a variable. The last two nodes are an operator and the
    /// answer. The other nodes are numbers, operators, or variables.
    /// The nodes do not get a value.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Chain {
        let chain_length: usize = rng.random_range(self.length.clone());
        let mut nodes: Vec<Node> = Vec::with_capacity(chain_length);

        for j in 0..chain_length {
            let kind: NodeKind = if j == 0 {
                *FIRST_KINDS.choose(rng).unwrap_or(&NodeKind::Number)
            } else if j == chain_length - 2 {
                NodeKind::Operator
            } else if j == chain_length - 1 {
                NodeKind::Answer
            } else {
                *BODY_KINDS.choose(rng).unwrap_or(&NodeKind::Number)
            };
            nodes.push(Node::new(kind));
        }

        let chain: Chain = Chain::from(nodes);
        debug!(
            "Chain of {} nodes: {}",
            chain.len(),
            chain
                .nodes()
                .iter()
                .map(|n| n.kind.as_str())
                .collect::<Vec<&str>>()
                .join(" ")
        );
        debug_assert!(chain.is_well_formed());
        chain
    }
}
