// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and depth-first traversal.

use serde::{Deserialize, Serialize};

/// Classification of a node in the organization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An organizational unit that has sub-units or staff.
    #[default]
    Department,
    /// A person at the deepest level of the tree.
    Employee,
}

/// Per-node metadata carried alongside the structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Depth from the root; the root is level 0.
    pub level: u32,
    /// Department or employee.
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

/// One entity of the organization tree.
///
/// `expanded` and `selected` are owned by whoever renders the tree; readers
/// should treat `selected` as a projection of that owner's selection set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered children. Absent and empty are equivalent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Whether children are laid out.
    #[serde(default)]
    pub expanded: bool,
    /// Whether the node is part of the current selection.
    #[serde(default)]
    pub selected: bool,
    /// Level and kind.
    #[serde(default)]
    pub data: NodeData,
}

impl TreeNode {
    /// A collapsed, unselected department leaf at level 0.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Replace the children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Set the expanded flag.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Set the node kind.
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.data.kind = kind;
        self
    }

    /// Set the level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.data.level = level;
        self
    }

    /// True if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True if the node is classified as an employee.
    pub fn is_employee(&self) -> bool {
        self.data.kind == NodeKind::Employee
    }

    /// Depth-first (pre-order) search; the first match wins.
    pub fn find(&self, id: &str) -> Option<&Self> {
        self.iter().find(|n| n.id == id)
    }

    /// Depth-first (pre-order) search for mutation; the first match wins.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Self> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter_mut().rev());
        }
        None
    }

    /// Pre-order iterator over this node and all descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Visit every node mutably in pre-order.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Self)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children.iter_mut().rev());
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        deepest
    }
}

/// Pre-order iterator returned by [`TreeNode::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count the nodes of an optional tree; `None` counts as zero.
pub fn count_nodes(tree: Option<&TreeNode>) -> usize {
    tree.map_or(0, TreeNode::count)
}
