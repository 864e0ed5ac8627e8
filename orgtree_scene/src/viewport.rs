// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pannable, zoomable camera over the scene.
//!
//! Scene (world) coordinates are what the rest of the workspace calls
//! canvas-local coordinates. The viewport maps them to screen pixels:
//! the world point at [`Viewport::center`] appears in the middle of the screen,
//! scaled by [`Viewport::zoom`].

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Camera mapping canvas-local coordinates to screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    screen: Size,
    center: Point,
    zoom: f64,
}

impl Viewport {
    /// Smallest accepted zoom factor.
    pub const MIN_ZOOM: f64 = 0.01;
    /// Largest accepted zoom factor.
    pub const MAX_ZOOM: f64 = 100.0;

    /// A viewport of the given screen size, centered on the origin at zoom 1.
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            center: Point::ORIGIN,
            zoom: 1.0,
        }
    }

    /// Screen size in pixels.
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Resize the screen; the world center stays put.
    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// World point shown at the middle of the screen.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Recenter the camera on a world point.
    pub fn move_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to [`Self::MIN_ZOOM`]..=[`Self::MAX_ZOOM`].
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        }
    }

    /// Pan by a screen-space delta (drag the content by `delta` pixels).
    pub fn pan_by(&mut self, delta: Vec2) {
        self.center -= delta / self.zoom;
    }

    /// Multiply the zoom by `factor`, keeping the world point under `screen_pt` fixed.
    pub fn zoom_at(&mut self, screen_pt: Point, factor: f64) {
        let anchor = self.to_world(screen_pt);
        self.set_zoom(self.zoom * factor);
        let moved = self.to_world(screen_pt);
        self.center += anchor - moved;
    }

    /// World → screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.screen.width / 2.0, self.screen.height / 2.0))
            * Affine::scale(self.zoom)
            * Affine::translate(-self.center.to_vec2())
    }

    /// Canvas-local position of a screen point.
    pub fn to_world(&self, screen_pt: Point) -> Point {
        let half = Vec2::new(self.screen.width / 2.0, self.screen.height / 2.0);
        self.center + (screen_pt.to_vec2() - half) / self.zoom
    }

    /// Screen position of a canvas-local point.
    pub fn to_screen(&self, world_pt: Point) -> Point {
        self.transform() * world_pt
    }

    /// World-space rectangle currently on screen.
    pub fn visible_bounds(&self) -> Rect {
        Rect::from_center_size(
            self.center,
            Size::new(self.screen.width / self.zoom, self.screen.height / self.zoom),
        )
    }

    /// Whether a world point is currently on screen.
    pub fn contains(&self, world_pt: Point) -> bool {
        self.visible_bounds().contains(world_pt)
    }
}
