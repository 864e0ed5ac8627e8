// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgtree Scene: a Kurbo-native retained scene graph for canvas UIs.
//!
//! - Represents a hierarchy of nodes with local transforms, bounds, z-order, flags, and display lists.
//! - Provides hit testing and rectangle intersection queries over world-space AABBs.
//! - Supports batched updates with a [`Scene::commit`] step that yields coarse damage regions.
//! - Ships the small capabilities a canvas consumer needs next to the scene:
//!   a pannable/zoomable [`Viewport`], a [`PointerEvent`] stream type, and a [`Ticker`].
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything.
//! Upstream code computes positions and sizes and writes them into the scene as
//! transforms and local bounds, then attaches a [`Graphics`] display list to each node.
//! Think of this as a scene and a picker, not a layout system.
//!
//! ## API overview
//!
//! - [`Scene`]: container managing nodes, display lists, and world-space synchronization.
//! - [`LocalNode`]: per-node local data (bounds, transform, z, flags).
//! - [`NodeFlags`]: visibility and picking controls.
//! - [`NodeId`]: generational handle of a node.
//! - [`QueryFilter`]: restricts hit/intersect results (visible/pickable).
//! - [`Graphics`]: ordered [`DrawCommand`]s (shapes with fill/stroke, text runs).
//! - [`Canvas`]: scene + viewport + ticker, borrowed mutably by consumers.
//!
//! Key operations:
//! - [`Scene::insert`] → [`NodeId`], [`Scene::remove`], [`Scene::remove_children`]
//! - [`Scene::set_position`] / [`Scene::set_graphics`]
//! - [`Scene::commit`] → damage summary; updates world data.
//! - [`Scene::hit_test_point`] and [`Scene::intersect_rect`].
//!
//! ## Minimal usage
//!
//! ```
//! use orgtree_scene::{LocalNode, QueryFilter, Scene};
//! use kurbo::{Point, Rect};
//!
//! let mut scene = Scene::new();
//! let group = scene.insert(None, LocalNode::container());
//! let card = scene.insert(
//!     Some(group),
//!     LocalNode::at(Point::new(100.0, 40.0), Rect::new(0.0, 0.0, 200.0, 30.0)),
//! );
//! let _ = scene.commit();
//!
//! let hit = scene.hit_test_point(Point::new(150.0, 50.0), QueryFilter::PICKING).unwrap();
//! assert_eq!(hit.node, card);
//! assert_eq!(scene.to_local(card, Point::new(150.0, 50.0)), Some(Point::new(50.0, 10.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod input;
mod paint;
mod scene;
mod ticker;
mod types;
mod viewport;

pub use canvas::Canvas;
pub use input::{Modifiers, PointerButton, PointerEvent, PointerKind};
pub use paint::{Color, DrawCommand, Fill, Graphics, Primitive, Stroke, TextStyle};
pub use scene::{Damage, Hit, Scene};
pub use ticker::{TickHandle, Ticker};
pub use types::{LocalNode, NodeFlags, NodeId, QueryFilter};
pub use viewport::Viewport;
