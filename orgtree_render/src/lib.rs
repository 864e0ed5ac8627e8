// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgtree Render: lays out an organization tree on a canvas and handles selection.
//!
//! - [`TreeRenderer`] owns the bound [`TreeNode`](orgtree_model::TreeNode), the
//!   view cache, and the selection. It lays the visible part of the tree out as
//!   fixed-size boxes ([`TreeNodeView`]) joined by elbow connectors
//!   ([`ConnectionEdge`]), and re-lays everything out on expand or collapse.
//! - [`SelectionController`] turns pointer events into rubber-band selection,
//!   forwards plain clicks to the renderer, and drives hover.
//! - Both queue [`TreeEvent`]s for the host to drain.
//!
//! Nothing here holds on to the scene. The host owns an
//! [`orgtree_scene::Canvas`] and lends it to each call.
//!
//! ## Layout
//!
//! The root's top-left corner is at the canvas origin. The `n` children of an
//! expanded node at `(x, y)` sit at `y + level_height`, spread left to right
//! with `node_padding` between them and centered under the parent: child `i`
//! has its left edge at `x + w/2 - (n·w + (n-1)·p)/2 + i·(w + p)`.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Size};
//! use orgtree_model::TreeNode;
//! use orgtree_render::{RendererOptions, SelectionController, TreeEvent, TreeRenderer};
//! use orgtree_scene::{Canvas, Modifiers, PointerEvent, PointerKind};
//!
//! let mut canvas = Canvas::new(Size::new(800.0, 600.0));
//! let mut renderer = TreeRenderer::new(&mut canvas, RendererOptions::default());
//! let mut controller = SelectionController::new(&mut canvas);
//!
//! renderer.set_tree_data(
//!     TreeNode::new("root", "Org")
//!         .with_expanded(true)
//!         .with_children([TreeNode::new("a", "A").with_level(1)]),
//! );
//! renderer.render_tree(&mut canvas);
//! assert_eq!(renderer.view_count(), 2);
//!
//! // Click the root's checkbox.
//! let at = canvas.viewport.to_screen(Point::new(15.0, 15.0));
//! controller.handle_pointer(&mut renderer, &mut canvas, &PointerEvent::new(PointerKind::Click, at));
//! assert!(renderer.is_selected("root"));
//! assert!(matches!(
//!     controller.drain_events(&mut renderer).last(),
//!     Some(TreeEvent::SelectionChange(set)) if set.len() == 1
//! ));
//!
//! renderer.dispose(&mut canvas);
//! controller.destroy(&mut canvas);
//! assert!(canvas.scene.is_empty());
//! ```

mod config;
mod edge;
mod error;
mod events;
pub mod hover;
mod interaction;
mod node_view;
mod renderer;

pub use config::RendererOptions;
pub use edge::{ConnectionEdge, EDGE_COLOR, EDGE_WIDTH, elbow_points};
pub use error::ConfigError;
pub use events::TreeEvent;
pub use interaction::{BAND_ALPHA, SelectionController};
pub use node_view::{
    ACCENT, CHECKBOX_BORDER, EMPLOYEE_ICON, HOVER_TINT, HitRegion, INK, SELECTED_FILL,
    TreeNodeView, UNSELECTED_BORDER, UNSELECTED_FILL, ViewData,
};
pub use renderer::{ClickOutcome, TreeRenderer};
