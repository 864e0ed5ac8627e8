// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

/// Notification produced by the renderer and the selection controller.
///
/// Events are queued and handed out by `drain_events`; nothing is delivered
/// while an operation is still running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEvent {
    /// A node was expanded or collapsed; the tree has already been re-rendered.
    Toggle {
        /// Node id.
        id: String,
        /// New expansion state.
        expanded: bool,
    },
    /// A single node entered or left the selection.
    Select {
        /// Node id.
        id: String,
        /// New membership.
        selected: bool,
    },
    /// The selection as a whole, after a change.
    SelectionChange(BTreeSet<String>),
}
