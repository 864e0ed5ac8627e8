// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elbow connectors between a parent box and a child box.

use kurbo::{Point, Rect};
use orgtree_scene::{Color, Graphics, LocalNode, NodeFlags, NodeId, Scene, Stroke};

/// Connector color.
pub const EDGE_COLOR: Color = Color(0xCC_CC_CC);
/// Connector line width.
pub const EDGE_WIDTH: f64 = 1.0;

/// Vertices of the orthogonal path from `start` to `end`.
///
/// The path goes down from `start` to the vertical midpoint, across to the
/// column of `end`, then down to `end`.
pub fn elbow_points(start: Point, end: Point) -> [Point; 4] {
    let mid_y = (start.y + end.y) / 2.0;
    [
        start,
        Point::new(start.x, mid_y),
        Point::new(end.x, mid_y),
        end,
    ]
}

/// A connector drawn as its own non-pickable scene node.
///
/// Geometry is stored in the coordinate space of the parent scene node, so the
/// edge node itself sits at the origin.
#[derive(Clone, Debug)]
pub struct ConnectionEdge {
    node: NodeId,
    start: Point,
    end: Point,
}

impl ConnectionEdge {
    /// Insert a connector under `parent` and draw it.
    pub fn new(scene: &mut Scene, parent: Option<NodeId>, start: Point, end: Point) -> Self {
        let local = LocalNode {
            flags: NodeFlags::VISIBLE,
            ..LocalNode::default()
        };
        let node = scene.insert(parent, local);
        let edge = Self { node, start, end };
        edge.draw(scene);
        edge
    }

    /// Move both endpoints and redraw the whole path.
    pub fn update(&mut self, scene: &mut Scene, start: Point, end: Point) {
        self.start = start;
        self.end = end;
        self.draw(scene);
    }

    /// Start point (parent bottom-center).
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point (child top-center).
    pub fn end(&self) -> Point {
        self.end
    }

    /// Current path vertices.
    pub fn points(&self) -> [Point; 4] {
        elbow_points(self.start, self.end)
    }

    /// Scene node holding the display list.
    pub fn scene_node(&self) -> NodeId {
        self.node
    }

    fn draw(&self, scene: &mut Scene) {
        let mut g = Graphics::new();
        g.polyline(&self.points(), Stroke::new(EDGE_WIDTH, EDGE_COLOR));
        scene.set_local_bounds(self.node, Rect::from_points(self.start, self.end));
        scene.set_graphics(self.node, g);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgtree_scene::{DrawCommand, Primitive, QueryFilter};

    #[test]
    fn elbow_goes_through_vertical_midpoint() {
        let pts = elbow_points(Point::new(100.0, 30.0), Point::new(-120.0, 60.0));
        assert_eq!(
            pts,
            [
                Point::new(100.0, 30.0),
                Point::new(100.0, 45.0),
                Point::new(-120.0, 45.0),
                Point::new(-120.0, 60.0),
            ]
        );
    }

    #[test]
    fn straight_edge_when_aligned() {
        let pts = elbow_points(Point::new(10.0, 0.0), Point::new(10.0, 20.0));
        assert!(pts.iter().all(|p| p.x == 10.0));
    }

    #[test]
    fn draws_one_stroked_path() {
        let mut scene = Scene::new();
        let edge = ConnectionEdge::new(
            &mut scene,
            None,
            Point::new(0.0, 0.0),
            Point::new(50.0, 40.0),
        );
        let g = scene.graphics(edge.scene_node()).unwrap();
        assert_eq!(g.commands().len(), 1);
        let DrawCommand::Shape {
            primitive: Primitive::Path(_),
            fill: None,
            stroke: Some(stroke),
        } = &g.commands()[0]
        else {
            panic!("expected a stroked path, got {:?}", g.commands()[0]);
        };
        assert_eq!(*stroke, Stroke::new(1.0, EDGE_COLOR));
    }

    #[test]
    fn update_redraws_in_place() {
        let mut scene = Scene::new();
        let mut edge = ConnectionEdge::new(&mut scene, None, Point::ZERO, Point::new(0.0, 10.0));
        let before = scene.graphics(edge.scene_node()).cloned();
        edge.update(&mut scene, Point::new(5.0, 0.0), Point::new(25.0, 30.0));
        assert_eq!(scene.len(), 1);
        assert_eq!(edge.points()[2], Point::new(25.0, 15.0));
        assert_ne!(scene.graphics(edge.scene_node()).cloned(), before);
    }

    #[test]
    fn edges_are_not_pickable() {
        let mut scene = Scene::new();
        let _ = ConnectionEdge::new(&mut scene, None, Point::ZERO, Point::new(40.0, 40.0));
        let _ = scene.commit();
        assert!(
            scene
                .hit_test_point(Point::new(20.0, 20.0), QueryFilter::PICKING)
                .is_none()
        );
    }
}
