// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input stream: event kinds, buttons, and modifier state.

use kurbo::Point;

use crate::viewport::Viewport;

bitflags::bitflags! {
    /// Keyboard modifiers held while a pointer event happened.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control key.
        const CTRL  = 0b0000_0001;
        /// Meta (command / windows) key.
        const META  = 0b0000_0010;
        /// Shift key.
        const SHIFT = 0b0000_0100;
        /// Alt (option) key.
        const ALT   = 0b0000_1000;
    }
}

/// What happened to the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// A button was pressed.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released.
    Up,
    /// A press and release on the same spot.
    Click,
}

/// Pointer button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// No button (hover moves).
    #[default]
    None,
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button or wheel press.
    Auxiliary,
}

/// A pointer event in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerKind,
    /// Position in screen pixels.
    pub position: Point,
    /// Button involved, if any.
    pub button: PointerButton,
    /// Modifier keys held at the time of the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A primary-button event with no modifiers.
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self {
            kind,
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// The same event with `modifiers` held.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Canvas-local position of the event as seen through `viewport`.
    pub fn local_position(&self, viewport: &Viewport) -> Point {
        viewport.to_world(self.position)
    }

    /// Ctrl or Meta is held.
    pub fn has_command_modifier(&self) -> bool {
        self.modifiers.intersects(Modifiers::CTRL | Modifiers::META)
    }

    /// Shift is held.
    pub fn has_shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn command_modifier_is_ctrl_or_meta() {
        let e = PointerEvent::new(PointerKind::Down, Point::ZERO);
        assert!(!e.has_command_modifier());
        assert!(e.clone().with_modifiers(Modifiers::CTRL).has_command_modifier());
        assert!(e.clone().with_modifiers(Modifiers::META).has_command_modifier());
        assert!(!e.with_modifiers(Modifiers::SHIFT).has_command_modifier());
    }

    #[test]
    fn local_position_goes_through_viewport() {
        let vp = Viewport::new(Size::new(200.0, 100.0));
        let e = PointerEvent::new(PointerKind::Move, Point::new(150.0, 50.0));
        assert_eq!(e.local_position(&vp), Point::new(50.0, 0.0));
    }
}
