// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display lists: colors, fills, strokes, shapes, and text runs.
//!
//! A [`Graphics`] is an ordered list of [`DrawCommand`]s attached to a scene node.
//! Commands are painted in order in the node's local coordinate space.
//! Redrawing a node means replacing its whole display list; there is no patching.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape};

/// An opaque 24-bit RGB color, stored as `0xRRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Pure white, the neutral tint.
    pub const WHITE: Self = Self(0xFF_FF_FF);
    /// Pure black.
    pub const BLACK: Self = Self(0x00_00_00);

    /// Build a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Multiply each channel by `tint`, the way sprite tints darken a fill.
    ///
    /// Tinting by [`Color::WHITE`] is the identity.
    pub fn tinted(self, tint: Self) -> Self {
        fn mul(a: u8, b: u8) -> u8 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "product of two u8 divided by 255 always fits in u8"
            )]
            let v = (u16::from(a) * u16::from(b) / 255) as u8;
            v
        }
        Self::rgb(
            mul(self.r(), tint.r()),
            mul(self.g(), tint.g()),
            mul(self.b(), tint.b()),
        )
    }
}

/// Solid fill.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fill {
    /// Fill color.
    pub color: Color,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
}

impl Fill {
    /// An opaque fill.
    pub const fn solid(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// A translucent fill.
    pub const fn with_alpha(color: Color, alpha: f64) -> Self {
        Self { color, alpha }
    }
}

/// Outline stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width in local units.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
}

impl Stroke {
    /// An opaque stroke.
    pub const fn new(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            alpha: 1.0,
        }
    }
}

/// Geometry of a shape command.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// Circle.
    Circle(Circle),
    /// Open or closed path built from move-to/line-to segments.
    Path(BezPath),
}

impl Primitive {
    /// Conservative bounding box of the geometry (stroke width not included).
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::RoundedRect(r) => r.bounding_box(),
            Self::Circle(c) => c.bounding_box(),
            Self::Path(p) => p.bounding_box(),
        }
    }
}

/// Font settings for a text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in local units.
    pub font_size: f64,
    /// Text color.
    pub fill: Color,
    /// Font family name.
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            fill: Color::BLACK,
            font_family: String::from("Arial"),
        }
    }
}

/// One entry of a display list.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Filled and/or stroked geometry.
    Shape {
        /// Geometry to paint.
        primitive: Primitive,
        /// Interior fill, if any.
        fill: Option<Fill>,
        /// Outline stroke, if any.
        stroke: Option<Stroke>,
    },
    /// A single-line text run whose top-left corner is `origin`.
    Text {
        /// Top-left corner of the run.
        origin: Point,
        /// Text content.
        content: String,
        /// Font settings.
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Conservative local bounds of this command.
    ///
    /// Text has no shaping here; its extent is estimated from the font size.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Shape {
                primitive, stroke, ..
            } => {
                let bb = primitive.bounding_box();
                match stroke {
                    Some(s) => bb.inflate(s.width / 2.0, s.width / 2.0),
                    None => bb,
                }
            }
            Self::Text {
                origin,
                content,
                style,
            } => {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "label lengths are far below f64 precision limits"
                )]
                let width = content.chars().count() as f64 * style.font_size * 0.6;
                Rect::new(
                    origin.x,
                    origin.y,
                    origin.x + width,
                    origin.y + style.font_size * 1.2,
                )
            }
        }
    }
}

/// An ordered display list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graphics {
    commands: Vec<DrawCommand>,
}

impl Graphics {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// True if nothing would be painted.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Append a shape with an optional fill and stroke.
    pub fn shape(&mut self, primitive: Primitive, fill: Option<Fill>, stroke: Option<Stroke>) {
        self.commands.push(DrawCommand::Shape {
            primitive,
            fill,
            stroke,
        });
    }

    /// Append a rectangle.
    pub fn rect(&mut self, rect: Rect, fill: Option<Fill>, stroke: Option<Stroke>) {
        self.shape(Primitive::Rect(rect), fill, stroke);
    }

    /// Append a rounded rectangle.
    pub fn rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    ) {
        self.shape(
            Primitive::RoundedRect(RoundedRect::from_rect(rect, radius)),
            fill,
            stroke,
        );
    }

    /// Append a filled circle.
    pub fn circle(&mut self, center: Point, radius: f64, fill: Fill) {
        self.shape(Primitive::Circle(Circle::new(center, radius)), Some(fill), None);
    }

    /// Append a stroked polyline through `points`.
    ///
    /// Fewer than two points paint nothing and are ignored.
    pub fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        self.shape(Primitive::Path(path), None, Some(stroke));
    }

    /// Append a text run.
    pub fn text(&mut self, origin: Point, content: impl Into<String>, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            origin,
            content: content.into(),
            style,
        });
    }

    /// Union of all command bounds, or `None` if empty.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.commands.iter().map(DrawCommand::bounds);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}
