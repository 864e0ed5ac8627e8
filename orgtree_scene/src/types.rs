// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, flags, and local geometry.

use kurbo::{Affine, Point, Rect, Vec2};

/// Identifier for a node in the scene.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Stale `NodeId`s never alias a different live node because the generation must match.
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in painting and intersection queries).
        const VISIBLE  = 0b0000_0001;
        /// Node is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Local geometry for a node.
#[derive(Clone, Debug)]
pub struct LocalNode {
    /// Local (untransformed) bounds used for hit testing and damage.
    pub local_bounds: Rect,
    /// Local transform relative to parent space.
    pub local_transform: Affine,
    /// Z-order. Higher is drawn on top.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: NodeFlags,
}

impl LocalNode {
    /// A node translated to `origin` with local bounds `bounds`.
    pub fn at(origin: Point, bounds: Rect) -> Self {
        Self {
            local_bounds: bounds,
            local_transform: Affine::translate(origin.to_vec2()),
            ..Default::default()
        }
    }

    /// A pure grouping node: no bounds of its own, never picked.
    pub fn container() -> Self {
        Self {
            flags: NodeFlags::VISIBLE,
            ..Default::default()
        }
    }

    /// The translation part of the local transform.
    pub fn position(&self) -> Point {
        let Vec2 { x, y } = self.local_transform.translation();
        Point::new(x, y)
    }
}

impl Default for LocalNode {
    fn default() -> Self {
        Self {
            local_bounds: Rect::ZERO,
            local_transform: Affine::IDENTITY,
            z_index: 0,
            flags: NodeFlags::default(),
        }
    }
}

/// Filters applied during hit testing and rectangle intersection.
///
/// Used by [`Scene::hit_test_point`](crate::Scene::hit_test_point) and
/// [`Scene::intersect_rect`](crate::Scene::intersect_rect).
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider nodes marked [`NodeFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider nodes marked [`NodeFlags::PICKABLE`].
    pub pickable_only: bool,
}

impl QueryFilter {
    /// Visible and pickable nodes only, the usual filter for pointer input.
    pub const PICKING: Self = Self {
        visible_only: true,
        pickable_only: true,
    };

    pub(crate) fn matches(&self, flags: NodeFlags) -> bool {
        (!self.visible_only || flags.contains(NodeFlags::VISIBLE))
            && (!self.pickable_only || flags.contains(NodeFlags::PICKABLE))
    }
}
