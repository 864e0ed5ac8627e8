// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect};

use crate::paint::Graphics;
use crate::types::{LocalNode, NodeFlags, NodeId, QueryFilter};

/// A batched set of changes derived from [`Scene::commit`].
#[derive(Clone, Debug, Default)]
pub struct Damage {
    /// World-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// True if nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }
}

/// Results of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The matched node.
    pub node: NodeId,
    /// Path from root to node (inclusive).
    pub path: Vec<NodeId>,
}

#[derive(Clone, Debug, Default)]
struct WorldNode {
    world_transform: Affine,
    world_bounds: Rect, // AABB of transformed local bounds
    committed: bool,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalNode,
    graphics: Graphics,
    world: WorldNode,
    dirty: bool,
}

impl Node {
    fn new(generation: u32, local: LocalNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            graphics: Graphics::default(),
            world: WorldNode::default(),
            dirty: true,
        }
    }
}

/// Retained scene graph.
///
/// Nodes form a forest. Each node has local bounds, a local transform, a z-index,
/// flags, and a display list. World transforms and bounds are synchronized by
/// [`Scene::commit`]; queries read the state of the last commit.
pub struct Scene {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<NodeId>,
    pending_removed: Vec<Rect>,
    epoch: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .field("roots", &self.roots.len())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            pending_removed: Vec::new(),
            epoch: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// True if the scene has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of commits performed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the node as a root.
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            (idx, generation)
        } else {
            self.nodes.push(Some(Node::new(1, local)));
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, generation);
        match parent.filter(|p| self.is_alive(*p)) {
            Some(p) => self.link_parent(id, p),
            None => self.roots.push(id),
        }
        id
    }

    /// Remove a node and its subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.detach(id);
        self.free_subtree(id);
    }

    /// Remove every child subtree of `id`, keeping `id` itself.
    pub fn remove_children(&mut self, id: NodeId) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        let children = core::mem::take(&mut node.children);
        for child in children {
            self.free_subtree(child);
        }
    }

    /// Reparent `id` under `new_parent` (or make it a root).
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) || new_parent == Some(id) {
            return;
        }
        self.detach(id);
        match new_parent.filter(|p| self.is_alive(*p)) {
            Some(p) => self.link_parent(id, p),
            None => self.roots.push(id),
        }
        self.mark_subtree_dirty(id);
    }

    /// Update the local transform.
    pub fn set_local_transform(&mut self, id: NodeId, transform: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_transform = transform;
            n.dirty = true;
        }
    }

    /// Move a node so its local origin sits at `origin` in parent space.
    pub fn set_position(&mut self, id: NodeId, origin: Point) {
        self.set_local_transform(id, Affine::translate(origin.to_vec2()));
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_bounds = bounds;
            n.dirty = true;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: NodeId, z: i32) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.z_index = z;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Replace the display list of a node.
    pub fn set_graphics(&mut self, id: NodeId, graphics: Graphics) {
        if let Some(n) = self.node_opt_mut(id) {
            n.graphics = graphics;
        }
    }

    /// The display list of a live node.
    pub fn graphics(&self, id: NodeId) -> Option<&Graphics> {
        self.node_opt(id).map(|n| &n.graphics)
    }

    /// The local geometry of a live node.
    pub fn local(&self, id: NodeId) -> Option<&LocalNode> {
        self.node_opt(id).map(|n| &n.local)
    }

    /// The translation of a live node in parent space.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node_opt(id).map(|n| n.local.position())
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Parent of a live node.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Children of a node in paint order. Empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Root nodes in paint order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// World transform as of the last commit.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine> {
        self.node_opt(id)
            .filter(|n| n.world.committed)
            .map(|n| n.world.world_transform)
    }

    /// World-space AABB as of the last commit.
    pub fn world_bounds(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id)
            .filter(|n| n.world.committed)
            .map(|n| n.world.world_bounds)
    }

    /// Convert a world-space point into the local space of `id`.
    pub fn to_local(&self, id: NodeId, pt: Point) -> Option<Point> {
        self.world_transform(id).map(|tf| tf.inverse() * pt)
    }

    /// Synchronize world transforms and bounds, returning coarse damage.
    pub fn commit(&mut self) -> Damage {
        self.epoch = self.epoch.wrapping_add(1);
        let mut damage = Damage {
            dirty_rects: core::mem::take(&mut self.pending_removed),
        };
        let roots = self.roots.clone();
        for root in roots {
            self.update_world_recursive(root, Affine::IDENTITY, false, &mut damage);
        }
        damage
    }

    /// Returns the topmost node containing a world-space point.
    ///
    /// Higher `z_index` wins; among equal z the node painted last wins.
    /// Honors [`QueryFilter`].
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<Hit> {
        let mut best: Option<(NodeId, i32)> = None;
        self.walk_paint_order(|id, node| {
            if !node.world.committed || !filter.matches(node.local.flags) {
                return;
            }
            let b = node.world.world_bounds;
            if pt.x < b.x0 || pt.x > b.x1 || pt.y < b.y0 || pt.y > b.y1 {
                return;
            }
            match best {
                Some((_, z_best)) if node.local.z_index < z_best => {}
                _ => best = Some((id, node.local.z_index)),
            }
        });
        best.map(|(node, _)| Hit {
            node,
            path: self.path_to_root(node),
        })
    }

    /// Nodes whose world AABBs intersect `rect`, in paint order.
    ///
    /// Honors [`QueryFilter`].
    pub fn intersect_rect(&self, rect: Rect, filter: QueryFilter) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk_paint_order(|id, node| {
            if !node.world.committed || !filter.matches(node.local.flags) {
                return;
            }
            let b = node.world.world_bounds;
            if b.x0 <= rect.x1 && rect.x0 <= b.x1 && b.y0 <= rect.y1 && rect.y0 <= b.y1 {
                out.push(id);
            }
        });
        out
    }

    // --- internals ---

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|n| n.generation == id.generation())
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.idx())?
            .as_mut()
            .filter(|n| n.generation == id.generation())
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn detach(&mut self, id: NodeId) {
        match self.parent_of(id) {
            Some(parent) => {
                if let Some(p) = self.node_opt_mut(parent) {
                    p.children.retain(|c| *c != id);
                }
                if let Some(n) = self.node_opt_mut(id) {
                    n.parent = None;
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
    }

    /// Free a subtree that is already unlinked from its parent.
    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = Vec::from([id]);
        while let Some(cur) = stack.pop() {
            let Some(node) = self.nodes.get_mut(cur.idx()).and_then(Option::take) else {
                continue;
            };
            if node.world.committed && node.world.world_bounds.area() > 0.0 {
                self.pending_removed.push(node.world.world_bounds);
            }
            stack.extend(node.children);
            self.free_list.push(cur.idx());
        }
    }

    fn mark_subtree_dirty(&mut self, id: NodeId) {
        let mut stack = Vec::from([id]);
        while let Some(cur) = stack.pop() {
            if let Some(n) = self.node_opt_mut(cur) {
                n.dirty = true;
                stack.extend(n.children.iter().copied());
            }
        }
    }

    fn path_to_root(&self, mut id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::from([id]);
        while let Some(p) = self.parent_of(id) {
            out.push(p);
            id = p;
        }
        out.reverse();
        out
    }

    /// Visit every live node in depth-first paint order.
    fn walk_paint_order(&self, mut f: impl FnMut(NodeId, &Node)) {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_opt(id) else {
                continue;
            };
            f(id, node);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    fn update_world_recursive(
        &mut self,
        id: NodeId,
        parent_tf: Affine,
        parent_dirty: bool,
        damage: &mut Damage,
    ) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        let dirty = parent_dirty || node.dirty || !node.world.committed;
        if dirty {
            let old = node.world.committed.then_some(node.world.world_bounds);
            node.world.world_transform = parent_tf * node.local.local_transform;
            node.world.world_bounds =
                transform_rect_bbox(node.world.world_transform, node.local.local_bounds);
            node.world.committed = true;
            node.dirty = false;
            let new = node.world.world_bounds;
            if old != Some(new) {
                if let Some(old) = old.filter(|r| r.area() > 0.0) {
                    damage.dirty_rects.push(old);
                }
                if new.area() > 0.0 {
                    damage.dirty_rects.push(new);
                }
            }
        }
        let world_tf = node.world.world_transform;
        let children = node.children.clone();
        for child in children {
            self.update_world_recursive(child, world_tf, dirty, damage);
        }
    }
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box in world space.
fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
