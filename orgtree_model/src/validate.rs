// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural checks for trees coming from outside.
//!
//! Consumers are not required to call these; a tree that fails them is a
//! precondition violation and behavior on it is unspecified.

use std::collections::HashSet;

use crate::node::TreeNode;

/// A structural problem found by [`TreeNode::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Two nodes share an id.
    #[error("duplicate node id `{0}`")]
    DuplicateId(String),
    /// A node's `data.level` is not its depth.
    #[error("node `{id}` has level {found}, expected {expected}")]
    LevelMismatch {
        /// Offending node.
        id: String,
        /// Depth of the node in the tree.
        expected: u32,
        /// Level recorded on the node.
        found: u32,
    },
}

impl TreeNode {
    /// Check id uniqueness and level consistency, reporting the first problem
    /// in pre-order.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::new();
        let mut stack = vec![(self, 0_u32)];
        while let Some((node, depth)) = stack.pop() {
            if !seen.insert(node.id.as_str()) {
                return Err(ModelError::DuplicateId(node.id.clone()));
            }
            if node.data.level != depth {
                return Err(ModelError::LevelMismatch {
                    id: node.id.clone(),
                    expected: depth,
                    found: node.data.level,
                });
            }
            stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        }
        Ok(())
    }
}
