// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree layout, view cache, expansion and selection state.

use std::collections::{BTreeSet, HashMap};

use kurbo::{Point, Size};
use orgtree_model::TreeNode;
use orgtree_scene::{Canvas, LocalNode, NodeId, QueryFilter, Scene, TickHandle};
use tracing::{debug, trace};

use crate::config::RendererOptions;
use crate::edge::ConnectionEdge;
use crate::events::TreeEvent;
use crate::hover::{HoverEvent, HoverTracker};
use crate::node_view::{HitRegion, TreeNodeView, ViewData};

/// What a click on a node did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The checkbox was hit; carries the new membership.
    Selected(bool),
    /// The body of a node with children was hit; carries the new expansion state.
    Expanded(bool),
    /// The body of a leaf was hit.
    Ignored,
}

/// Lays out an organization tree into a [`Canvas`] and owns its interactive state.
///
/// The renderer is the only writer of the tree's `expanded` and `selected`
/// flags. Selection lives in a set of ids; the flags on the bound tree are
/// kept equal to that set for readers of [`TreeRenderer::tree`].
///
/// Layout is a full rebuild: [`TreeRenderer::render_tree`] drops every view
/// and edge and lays the visible part of the tree out again from the root at
/// the origin. A node's children are visible only while the node is expanded.
#[derive(Debug)]
pub struct TreeRenderer {
    options: RendererOptions,
    container: Option<NodeId>,
    tick: Option<TickHandle>,
    tree: Option<TreeNode>,
    views: HashMap<String, TreeNodeView>,
    view_ids: HashMap<NodeId, String>,
    edges: Vec<ConnectionEdge>,
    selected: BTreeSet<String>,
    hover: HoverTracker<NodeId>,
    events: Vec<TreeEvent>,
}

impl TreeRenderer {
    /// Create the tree container in `canvas` and register the frame hook.
    pub fn new(canvas: &mut Canvas, options: RendererOptions) -> Self {
        let container = canvas.scene.insert(None, LocalNode::container());
        let tick = canvas.ticker.add(|delta| trace!(delta, "tree frame"));
        debug!(?options, "renderer created");
        Self {
            options,
            container: Some(container),
            tick: Some(tick),
            tree: None,
            views: HashMap::new(),
            view_ids: HashMap::new(),
            edges: Vec::new(),
            selected: BTreeSet::new(),
            hover: HoverTracker::new(),
            events: Vec::new(),
        }
    }

    /// Bind a new tree. Nothing is drawn until [`TreeRenderer::render_tree`].
    ///
    /// The tree's `selected` flags are overwritten from the current selection.
    pub fn set_tree_data(&mut self, root: TreeNode) {
        self.tree = Some(root);
        self.sync_selected_flags();
    }

    /// The bound tree.
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Rebuild every view and edge from the bound tree, then recenter the viewport on the origin.
    ///
    /// With no bound tree the container is just emptied.
    pub fn render_tree(&mut self, canvas: &mut Canvas) {
        if self.container.is_none() {
            return;
        }
        self.clear_views(&mut canvas.scene);
        let Some(tree) = self.tree.take() else {
            let _ = canvas.scene.commit();
            debug!("render without tree data");
            return;
        };
        self.render_node(&mut canvas.scene, &tree, 0.0, 0.0);
        self.tree = Some(tree);
        let damage = canvas.scene.commit();
        canvas.viewport.move_center(Point::ORIGIN);
        debug!(
            views = self.views.len(),
            edges = self.edges.len(),
            dirty = damage.dirty_rects.len(),
            "tree rendered"
        );
    }

    /// Lay out `node` with its top-left corner at `(x, y)`, then its visible descendants.
    ///
    /// Children of an expanded node are spread left to right around the
    /// node's horizontal center, one level height below it, and each gets an
    /// edge from the node's bottom-center to its own top-center. Nodes are
    /// visited depth first with an explicit stack, so depth is bounded only by
    /// memory; each edge is added just before the subtree it leads to.
    /// Returns the box size, which is the same for every node.
    pub fn render_node(&mut self, scene: &mut Scene, node: &TreeNode, x: f64, y: f64) -> Size {
        let size = self.options.node_size();
        let Some(container) = self.container else {
            return size;
        };

        let mut stack: Vec<(&TreeNode, Point, Option<(Point, Point)>)> =
            vec![(node, Point::new(x, y), None)];
        while let Some((node, origin, incoming)) = stack.pop() {
            if let Some((from, to)) = incoming {
                self.edges
                    .push(ConnectionEdge::new(scene, Some(container), from, to));
            }
            let view = TreeNodeView::new(
                scene,
                Some(container),
                ViewData::from_node(node),
                origin,
                size,
                self.selected.contains(&node.id),
            );
            self.view_ids.insert(view.scene_node(), node.id.clone());
            self.views.insert(node.id.clone(), view);

            if !(node.expanded && node.has_children()) {
                continue;
            }
            let n = node.children.len() as f64;
            let total = n * size.width + (n - 1.0) * self.options.node_padding;
            let first_x = origin.x + size.width / 2.0 - total / 2.0;
            let child_y = origin.y + self.options.level_height;
            let from = Point::new(origin.x + size.width / 2.0, origin.y + size.height);
            for (i, child) in node.children.iter().enumerate().rev() {
                let child_x = first_x + i as f64 * self.options.sibling_step();
                let to = Point::new(child_x + size.width / 2.0, child_y);
                stack.push((child, Point::new(child_x, child_y), Some((from, to))));
            }
        }
        size
    }

    /// Flip (`None`) or set membership of `id` in the selection.
    ///
    /// Only the affected view is redrawn; there is no re-layout. Returns the
    /// resulting membership. Ids need not be visible or even present in the tree.
    pub fn toggle_node_selection(
        &mut self,
        scene: &mut Scene,
        id: &str,
        selected: Option<bool>,
    ) -> bool {
        let was = self.selected.contains(id);
        let now = selected.unwrap_or(!was);
        if now == was {
            return now;
        }
        if now {
            self.selected.insert(id.to_owned());
        } else {
            self.selected.remove(id);
        }
        if let Some(view) = self.views.get_mut(id) {
            view.update_selection(scene, now);
        }
        if let Some(node) = self.tree.as_mut().and_then(|t| t.find_mut(id)) {
            node.selected = now;
        }
        trace!(id, selected = now, "selection toggled");
        self.events.push(TreeEvent::Select {
            id: id.to_owned(),
            selected: now,
        });
        now
    }

    /// Flip (`None`) or set the expansion of `id`, then re-render the whole tree.
    ///
    /// Returns `false` for an unknown id, in which case nothing changes and
    /// nothing is rendered.
    pub fn toggle_node_expanded(
        &mut self,
        canvas: &mut Canvas,
        id: &str,
        expanded: Option<bool>,
    ) -> bool {
        self.set_expanded(canvas, id, expanded).is_some()
    }

    fn set_expanded(&mut self, canvas: &mut Canvas, id: &str, expanded: Option<bool>) -> Option<bool> {
        let Some(node) = self.tree.as_mut().and_then(|t| t.find_mut(id)) else {
            trace!(id, "expansion toggle for unknown node");
            return None;
        };
        let now = expanded.unwrap_or(!node.expanded);
        node.expanded = now;
        self.render_tree(canvas);
        self.events.push(TreeEvent::Toggle {
            id: id.to_owned(),
            expanded: now,
        });
        Some(now)
    }

    /// Add `ids` to the selection, replacing it unless `additive`.
    ///
    /// Visible views and tree flags are updated; no per-node events are queued.
    /// Returns how many ids were not already selected.
    pub fn select_ids(
        &mut self,
        scene: &mut Scene,
        ids: impl IntoIterator<Item = String>,
        additive: bool,
    ) -> usize {
        if !additive {
            self.clear_selected_views(scene);
        }
        let mut added = 0;
        for id in ids {
            if let Some(view) = self.views.get_mut(&id) {
                view.update_selection(scene, true);
            }
            if self.selected.insert(id) {
                added += 1;
            }
        }
        self.sync_selected_flags();
        added
    }

    /// Empty the selection, restoring the look of every visible selected view.
    pub fn clear_selection(&mut self, scene: &mut Scene) {
        self.clear_selected_views(scene);
        self.sync_selected_flags();
    }

    /// Empty the set and unmark visible views, leaving the tree flags stale.
    fn clear_selected_views(&mut self, scene: &mut Scene) {
        for id in &self.selected {
            if let Some(view) = self.views.get_mut(id) {
                view.update_selection(scene, false);
            }
        }
        self.selected.clear();
    }

    /// Apply a click at `local` (view coordinates) to the view of `id`.
    ///
    /// The checkbox toggles selection; elsewhere a node with children toggles
    /// expansion. Returns `None` if `id` has no view.
    pub fn click_node(
        &mut self,
        canvas: &mut Canvas,
        id: &str,
        local: Point,
    ) -> Option<ClickOutcome> {
        let view = self.views.get(id)?;
        let region = view.hit_region(local);
        let has_children = view.data().has_children;
        trace!(id, ?region, "node clicked");
        let outcome = match region {
            HitRegion::Checkbox => {
                ClickOutcome::Selected(self.toggle_node_selection(&mut canvas.scene, id, None))
            }
            HitRegion::Body if has_children => {
                ClickOutcome::Expanded(self.set_expanded(canvas, id, None)?)
            }
            HitRegion::Body => ClickOutcome::Ignored,
        };
        Some(outcome)
    }

    /// Hit-test a canvas-local point and apply the click to the view under it.
    pub fn handle_click(&mut self, canvas: &mut Canvas, point: Point) -> Option<ClickOutcome> {
        let id = self.view_at(&canvas.scene, point)?.to_owned();
        let local = (point - self.views.get(&id)?.position()).to_point();
        self.click_node(canvas, &id, local)
    }

    /// Id of the view under a canvas-local point.
    pub fn view_at(&self, scene: &Scene, point: Point) -> Option<&str> {
        let hit = scene.hit_test_point(point, QueryFilter::PICKING)?;
        hit.path
            .iter()
            .rev()
            .find_map(|n| self.view_ids.get(n))
            .map(String::as_str)
    }

    /// Move the hover highlight to the view under a canvas-local point.
    ///
    /// Returns the hovered id, if any.
    pub fn hover_at(&mut self, scene: &mut Scene, point: Point) -> Option<&str> {
        let path: Vec<NodeId> = scene
            .hit_test_point(point, QueryFilter::PICKING)
            .map(|hit| {
                hit.path
                    .into_iter()
                    .filter(|n| self.view_ids.contains_key(n))
                    .collect()
            })
            .unwrap_or_default();
        let transitions = self.hover.update_path(&path);
        self.apply_hover(scene, transitions);
        self.hovered_id()
    }

    /// Drop the hover highlight.
    pub fn clear_hover(&mut self, scene: &mut Scene) {
        let transitions = self.hover.clear();
        self.apply_hover(scene, transitions);
    }

    /// Id of the hovered view.
    pub fn hovered_id(&self) -> Option<&str> {
        self.hover
            .target()
            .and_then(|n| self.view_ids.get(&n))
            .map(String::as_str)
    }

    fn apply_hover(&mut self, scene: &mut Scene, transitions: Vec<HoverEvent<NodeId>>) {
        for transition in transitions {
            let (node, hovered) = match transition {
                HoverEvent::Enter(n) => (n, true),
                HoverEvent::Leave(n) => (n, false),
            };
            if let Some(view) = self
                .view_ids
                .get(&node)
                .and_then(|id| self.views.get_mut(id))
            {
                trace!(id = view.id(), hovered, "hover");
                view.set_hovered(scene, hovered);
            }
        }
    }

    /// Number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// The selection.
    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// View of a visible node.
    pub fn view(&self, id: &str) -> Option<&TreeNodeView> {
        self.views.get(id)
    }

    /// Every current view, in no particular order.
    pub fn views(&self) -> impl Iterator<Item = &TreeNodeView> {
        self.views.values()
    }

    /// Number of current views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Current edges in drawing order.
    pub fn edges(&self) -> &[ConnectionEdge] {
        &self.edges
    }

    /// Number of current edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Layout options.
    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    /// Scene node all views and edges are children of, until disposed.
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Whether [`TreeRenderer::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.container.is_none()
    }

    /// Take the queued events.
    pub fn drain_events(&mut self) -> Vec<TreeEvent> {
        core::mem::take(&mut self.events)
    }

    /// Unregister the frame hook, remove the container with every view and
    /// edge, and clear the selection. Safe to call more than once.
    pub fn dispose(&mut self, canvas: &mut Canvas) {
        if let Some(tick) = self.tick.take() {
            canvas.ticker.remove(tick);
        }
        let Some(container) = self.container.take() else {
            return;
        };
        self.views.clear();
        self.view_ids.clear();
        self.edges.clear();
        let _ = self.hover.clear();
        canvas.scene.remove(container);
        let _ = canvas.scene.commit();
        self.selected.clear();
        self.sync_selected_flags();
        debug!("renderer disposed");
    }

    fn clear_views(&mut self, scene: &mut Scene) {
        if let Some(container) = self.container {
            scene.remove_children(container);
        }
        self.views.clear();
        self.view_ids.clear();
        self.edges.clear();
        let _ = self.hover.clear();
    }

    fn sync_selected_flags(&mut self) {
        let selected = &self.selected;
        if let Some(tree) = self.tree.as_mut() {
            tree.for_each_mut(|n| n.selected = selected.contains(&n.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgtree_model::NodeKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn canvas() -> Canvas {
        Canvas::new(Size::new(1024.0, 768.0))
    }

    fn node(id: &str, level: u32) -> TreeNode {
        TreeNode::new(id, id.to_uppercase()).with_level(level)
    }

    fn two_children() -> TreeNode {
        node("root", 0)
            .with_expanded(true)
            .with_children([node("a", 1), node("b", 1)])
    }

    fn three_levels() -> TreeNode {
        node("root", 0).with_expanded(true).with_children([
            node("a", 1)
                .with_expanded(true)
                .with_children([node("a1", 2), node("a2", 2)]),
            node("b", 1)
                .with_expanded(true)
                .with_children([node("b1", 2).with_kind(NodeKind::Employee)]),
        ])
    }

    fn four_wide() -> TreeNode {
        node("root", 0)
            .with_expanded(true)
            .with_children((1..=4).map(|i| node(&format!("c{i}"), 1)))
    }

    fn rendered(tree: TreeNode) -> (Canvas, TreeRenderer) {
        let mut canvas = canvas();
        let mut r = TreeRenderer::new(&mut canvas, RendererOptions::default());
        r.set_tree_data(tree);
        r.render_tree(&mut canvas);
        (canvas, r)
    }

    /// Ids reachable from the root through expanded nodes.
    fn visible_ids(root: &TreeNode) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            out.insert(n.id.clone());
            if n.expanded {
                stack.extend(n.children.iter());
            }
        }
        out
    }

    fn view_ids(r: &TreeRenderer) -> BTreeSet<String> {
        r.views().map(|v| v.id().to_owned()).collect()
    }

    #[test]
    fn root_with_two_leaves() {
        let (_, r) = rendered(two_children());
        assert_eq!(r.view_count(), 3);
        assert_eq!(r.edge_count(), 2);
    }

    #[test]
    fn collapsing_root_leaves_only_root() {
        let (mut canvas, mut r) = rendered(three_levels());
        assert_eq!(r.view_count(), 6);
        assert!(r.toggle_node_expanded(&mut canvas, "root", Some(false)));
        assert_eq!(r.view_count(), 1);
        assert_eq!(r.edge_count(), 0);
        assert!(r.view("root").is_some());
        assert_eq!(
            r.drain_events(),
            vec![TreeEvent::Toggle {
                id: "root".into(),
                expanded: false
            }]
        );
    }

    #[test]
    fn children_are_centered_under_parent() {
        let (_, r) = rendered(four_wide());
        let centers: Vec<f64> = (1..=4)
            .map(|i| r.view(&format!("c{i}")).unwrap().center().x)
            .collect();
        assert_eq!(centers, [-230.0, -10.0, 210.0, 430.0]);
        assert!(
            (1..=4).all(|i| r.view(&format!("c{i}")).unwrap().position().y == 60.0)
        );
    }

    #[test]
    fn edges_run_bottom_center_to_top_center() {
        let (_, r) = rendered(two_children());
        let a = r.view("a").unwrap();
        let edge = &r.edges()[0];
        assert_eq!(edge.start(), Point::new(100.0, 30.0));
        assert_eq!(edge.end(), Point::new(a.center().x, a.position().y));
    }

    #[test]
    fn render_is_idempotent() {
        let (mut canvas, mut r) = rendered(three_levels());
        let _ = r.toggle_node_selection(&mut canvas.scene, "a1", None);
        let snapshot = |r: &TreeRenderer, scene: &Scene| {
            let mut v: Vec<_> = r
                .views()
                .map(|v| {
                    (
                        v.id().to_owned(),
                        v.position(),
                        v.is_selected(),
                        scene.graphics(v.scene_node()).cloned(),
                    )
                })
                .collect();
            v.sort_by(|a, b| a.0.cmp(&b.0));
            v
        };
        r.render_tree(&mut canvas);
        let first = snapshot(&r, &canvas.scene);
        r.render_tree(&mut canvas);
        assert_eq!(first, snapshot(&r, &canvas.scene));
        assert_eq!(r.edge_count(), 5);
    }

    #[test]
    fn rerender_replaces_scene_nodes() {
        let (mut canvas, mut r) = rendered(three_levels());
        let before = canvas.scene.len();
        r.render_tree(&mut canvas);
        assert_eq!(canvas.scene.len(), before);
        // container + 6 views + 5 edges
        assert_eq!(before, 12);
    }

    #[test]
    fn render_recenters_viewport() {
        let (mut canvas, mut r) = rendered(two_children());
        canvas.viewport.move_center(Point::new(500.0, 500.0));
        r.render_tree(&mut canvas);
        assert_eq!(canvas.viewport.center(), Point::ORIGIN);
    }

    #[test]
    fn render_without_data_draws_nothing() {
        let mut canvas = canvas();
        let mut r = TreeRenderer::new(&mut canvas, RendererOptions::default());
        r.render_tree(&mut canvas);
        assert_eq!(r.view_count(), 0);
        assert_eq!(canvas.scene.len(), 1);
    }

    #[test]
    fn selection_round_trip() {
        let (mut canvas, mut r) = rendered(two_children());
        assert!(r.toggle_node_selection(&mut canvas.scene, "a", None));
        assert!(r.view("a").unwrap().is_selected());
        assert!(r.tree().unwrap().find("a").unwrap().selected);
        assert!(!r.toggle_node_selection(&mut canvas.scene, "a", None));
        assert!(!r.is_selected("a"));
        assert!(!r.view("a").unwrap().is_selected());
        assert!(!r.tree().unwrap().find("a").unwrap().selected);
        assert_eq!(
            r.drain_events(),
            vec![
                TreeEvent::Select {
                    id: "a".into(),
                    selected: true
                },
                TreeEvent::Select {
                    id: "a".into(),
                    selected: false
                },
            ]
        );
    }

    #[test]
    fn setting_current_state_does_nothing() {
        let (mut canvas, mut r) = rendered(two_children());
        let before = canvas.scene.graphics(r.view("a").unwrap().scene_node()).cloned();
        assert!(!r.toggle_node_selection(&mut canvas.scene, "a", Some(false)));
        assert!(r.drain_events().is_empty());
        assert_eq!(
            canvas.scene.graphics(r.view("a").unwrap().scene_node()).cloned(),
            before
        );

        let positions = |r: &TreeRenderer| {
            let mut v: Vec<_> = r.views().map(|v| (v.id().to_owned(), v.position())).collect();
            v.sort_by(|a, b| a.0.cmp(&b.0));
            v
        };
        let before = positions(&r);
        assert!(r.toggle_node_expanded(&mut canvas, "root", Some(true)));
        assert_eq!(positions(&r), before);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let (mut canvas, mut r) = rendered(two_children());
        let epoch = canvas.scene.epoch();
        assert!(!r.toggle_node_expanded(&mut canvas, "nope", None));
        assert_eq!(canvas.scene.epoch(), epoch);
        assert!(r.drain_events().is_empty());
        assert_eq!(r.view_count(), 3);
    }

    #[test]
    fn selecting_hidden_or_unknown_ids_is_allowed() {
        let (mut canvas, mut r) = rendered(three_levels());
        let _ = r.toggle_node_expanded(&mut canvas, "a", Some(false));
        assert!(r.toggle_node_selection(&mut canvas.scene, "a1", Some(true)));
        assert!(r.toggle_node_selection(&mut canvas.scene, "ghost", Some(true)));
        assert_eq!(r.selected_count(), 2);
        assert!(r.tree().unwrap().find("a1").unwrap().selected);
    }

    #[test]
    fn selection_survives_collapse_and_expand() {
        let (mut canvas, mut r) = rendered(three_levels());
        let _ = r.toggle_node_selection(&mut canvas.scene, "a2", Some(true));
        let _ = r.toggle_node_expanded(&mut canvas, "a", Some(false));
        assert!(r.view("a2").is_none());
        assert!(r.is_selected("a2"));
        let _ = r.toggle_node_expanded(&mut canvas, "a", Some(true));
        assert!(r.view("a2").unwrap().is_selected());
    }

    #[test]
    fn new_tree_takes_flags_from_selection() {
        let (mut canvas, mut r) = rendered(two_children());
        let _ = r.toggle_node_selection(&mut canvas.scene, "b", Some(true));
        let mut replacement = two_children();
        replacement.find_mut("a").unwrap().selected = true;
        r.set_tree_data(replacement);
        let tree = r.tree().unwrap();
        assert!(!tree.find("a").unwrap().selected);
        assert!(tree.find("b").unwrap().selected);
    }

    #[test]
    fn bulk_select_replaces_or_adds() {
        let (mut canvas, mut r) = rendered(four_wide());
        let _ = r.toggle_node_selection(&mut canvas.scene, "c4", Some(true));
        let _ = r.drain_events();

        let added = r.select_ids(&mut canvas.scene, ["c1".to_owned(), "c2".to_owned()], false);
        assert_eq!(added, 2);
        assert_eq!(
            r.selected_ids().iter().map(String::as_str).collect::<Vec<_>>(),
            ["c1", "c2"]
        );
        assert!(!r.view("c4").unwrap().is_selected());
        assert!(!r.tree().unwrap().find("c4").unwrap().selected);

        let added = r.select_ids(&mut canvas.scene, ["c2".to_owned(), "c3".to_owned()], true);
        assert_eq!(added, 1);
        assert_eq!(r.selected_count(), 3);
        assert!(r.drain_events().is_empty());

        r.clear_selection(&mut canvas.scene);
        assert_eq!(r.selected_count(), 0);
        assert!(r.views().all(|v| !v.is_selected()));
        assert!(r.tree().unwrap().iter().all(|n| !n.selected));
    }

    #[test]
    fn checkbox_click_selects() {
        let (mut canvas, mut r) = rendered(two_children());
        let outcome = r.handle_click(&mut canvas, Point::new(15.0, 15.0));
        assert_eq!(outcome, Some(ClickOutcome::Selected(true)));
        assert!(r.is_selected("root"));
        // Still expanded; a checkbox click never toggles expansion.
        assert_eq!(r.view_count(), 3);
    }

    #[test]
    fn body_click_toggles_expansion() {
        let (mut canvas, mut r) = rendered(two_children());
        let outcome = r.handle_click(&mut canvas, Point::new(120.0, 15.0));
        assert_eq!(outcome, Some(ClickOutcome::Expanded(false)));
        assert_eq!(r.view_count(), 1);
        assert_eq!(r.selected_count(), 0);
        let outcome = r.handle_click(&mut canvas, Point::new(120.0, 15.0));
        assert_eq!(outcome, Some(ClickOutcome::Expanded(true)));
        assert_eq!(r.view_count(), 3);
    }

    #[test]
    fn leaf_body_click_is_ignored() {
        let (mut canvas, mut r) = rendered(two_children());
        let a = r.view("a").unwrap().position();
        let outcome = r.handle_click(&mut canvas, a + kurbo::Vec2::new(150.0, 15.0));
        assert_eq!(outcome, Some(ClickOutcome::Ignored));
        assert!(r.drain_events().is_empty());
    }

    #[test]
    fn click_on_empty_space_hits_nothing() {
        let (mut canvas, mut r) = rendered(two_children());
        assert_eq!(r.handle_click(&mut canvas, Point::new(5000.0, 5000.0)), None);
        assert_eq!(r.click_node(&mut canvas, "missing", Point::ZERO), None);
    }

    #[test]
    fn hover_follows_pointer() {
        let (mut canvas, mut r) = rendered(two_children());
        let a = r.view("a").unwrap().center();
        let b = r.view("b").unwrap().center();
        assert_eq!(r.hover_at(&mut canvas.scene, a), Some("a"));
        assert!(r.view("a").unwrap().is_hovered());
        assert_eq!(r.hover_at(&mut canvas.scene, b), Some("b"));
        assert!(!r.view("a").unwrap().is_hovered());
        assert!(r.view("b").unwrap().is_hovered());
        assert_eq!(r.hover_at(&mut canvas.scene, Point::new(-900.0, 0.0)), None);
        assert!(r.views().all(|v| !v.is_hovered()));
        assert_eq!(r.selected_count(), 0);
    }

    #[test]
    fn frame_hook_registered_and_removed() {
        let mut canvas = canvas();
        let mut r = TreeRenderer::new(&mut canvas, RendererOptions::default());
        assert_eq!(canvas.ticker.len(), 1);
        canvas.ticker.tick(16.0);
        r.dispose(&mut canvas);
        assert!(canvas.ticker.is_empty());
    }

    #[test]
    fn dispose_is_idempotent() {
        let (mut canvas, mut r) = rendered(three_levels());
        let _ = r.toggle_node_selection(&mut canvas.scene, "a", Some(true));
        r.dispose(&mut canvas);
        r.dispose(&mut canvas);
        assert!(r.is_disposed());
        assert!(canvas.scene.is_empty());
        assert!(canvas.ticker.is_empty());
        assert_eq!(r.view_count(), 0);
        assert_eq!(r.selected_count(), 0);

        r.render_tree(&mut canvas);
        assert!(canvas.scene.is_empty());
    }

    #[test]
    fn generated_thousand_node_tree_renders() {
        let mut rng = SmallRng::seed_from_u64(7);
        let tree = orgtree_gen::generate_tree_with_node_count(1000, &mut rng);
        let expected = visible_ids(&tree);
        let (_, r) = rendered(tree);
        assert_eq!(view_ids(&r), expected);
        assert_eq!(r.edge_count(), expected.len() - 1);
    }

    #[test]
    fn deep_expanded_chain_renders() {
        const DEPTH: u32 = 5000;
        let mut chain = node(&format!("n{DEPTH}"), DEPTH);
        for level in (0..DEPTH).rev() {
            chain = node(&format!("n{level}"), level)
                .with_expanded(true)
                .with_children([chain]);
        }
        let (mut canvas, mut r) = rendered(chain);
        assert_eq!(r.view_count(), DEPTH as usize + 1);
        assert_eq!(r.edge_count(), DEPTH as usize);

        let deepest = r.view(&format!("n{DEPTH}")).map(|v| v.position());
        assert_eq!(deepest, Some(Point::new(0.0, f64::from(DEPTH) * 60.0)));
        let last = r.edges().last().map(ConnectionEdge::end);
        assert_eq!(last, Some(Point::new(100.0, f64::from(DEPTH) * 60.0)));

        assert!(r.toggle_node_expanded(&mut canvas, "n0", Some(false)));
        assert_eq!(r.view_count(), 1);
    }

    proptest! {
        #[test]
        fn child_centers_follow_layout_formula(
            n in 1_usize..8,
            w in 10.0_f64..300.0,
            p in 0.0_f64..50.0,
            px in -500.0_f64..500.0,
        ) {
            let mut canvas = canvas();
            let options = RendererOptions {
                node_width: w,
                node_padding: p,
                ..RendererOptions::default()
            };
            let mut r = TreeRenderer::new(&mut canvas, options);
            let parent = node("p", 0)
                .with_expanded(true)
                .with_children((0..n).map(|i| node(&format!("c{i}"), 1)));
            let size = r.render_node(&mut canvas.scene, &parent, px - w / 2.0, 0.0);
            prop_assert_eq!(size.width, w);

            let nf = n as f64;
            for i in 0..n {
                let expected = px - (nf * w + (nf - 1.0) * p) / 2.0 + i as f64 * (w + p) + w / 2.0;
                let got = r.view(&format!("c{i}")).unwrap().center().x;
                prop_assert!((got - expected).abs() < 1e-6, "child {} at {} not {}", i, got, expected);
            }
        }

        #[test]
        fn views_match_expanded_reachability(seed in any::<u64>(), flips in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let options = orgtree_gen::GeneratorOptions {
                max_depth: 3,
                max_children_per_node: 3,
                min_children_per_node: Some(1),
                initial_expanded_depth: 3,
                ..orgtree_gen::GeneratorOptions::default()
            };
            let mut tree = orgtree_gen::generate_tree_data(&options, &mut rng);
            let mut i = 0;
            tree.for_each_mut(|n| {
                n.expanded = flips.get(i).copied().unwrap_or(true);
                i += 1;
            });
            let expected = visible_ids(&tree);
            let (_, r) = rendered(tree);
            prop_assert_eq!(view_ids(&r), expected);
        }

        #[test]
        fn double_toggle_restores_membership(start in any::<bool>()) {
            let (mut canvas, mut r) = rendered(two_children());
            let _ = r.toggle_node_selection(&mut canvas.scene, "b", Some(start));
            let _ = r.toggle_node_selection(&mut canvas.scene, "b", None);
            let _ = r.toggle_node_selection(&mut canvas.scene, "b", None);
            prop_assert_eq!(r.is_selected("b"), start);
            prop_assert_eq!(r.view("b").unwrap().is_selected(), start);
        }
    }
}
