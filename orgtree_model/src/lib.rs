// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgtree Model: the organization tree consumed by the renderer and produced by generators.
//!
//! A [`TreeNode`] has a unique `id`, a display `name`, ordered `children`, the
//! `expanded`/`selected` flags, and [`NodeData`] (`level` and [`NodeKind`]).
//! The serialized shape is
//!
//! ```json
//! { "id": "root", "name": "Org", "expanded": true, "selected": false,
//!   "data": { "level": 0, "type": "department" },
//!   "children": [ ... ] }
//! ```
//!
//! where `children` is omitted for leaves.
//!
//! ```
//! use orgtree_model::{NodeKind, TreeNode};
//!
//! let tree = TreeNode::new("root", "Org").with_expanded(true).with_children([
//!     TreeNode::new("root-1", "Ada").with_level(1).with_kind(NodeKind::Employee),
//! ]);
//! assert_eq!(tree.count(), 2);
//! assert!(tree.find("root-1").unwrap().is_employee());
//! assert!(tree.validate().is_ok());
//! ```

mod node;
mod validate;

pub use node::{Iter, NodeData, NodeKind, TreeNode, count_nodes};
pub use validate::ModelError;
