// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: turn successive hovered paths into enter/leave transitions.
//!
//! The renderer feeds the root-to-target path of the box under the pointer
//! (filtered down to node views) and applies the resulting transitions as
//! tint changes.
//!
//! ```
//! use orgtree_render::hover::{HoverEvent, HoverTracker};
//!
//! let mut h: HoverTracker<u32> = HoverTracker::new();
//! assert_eq!(h.update_path(&[1]), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.update_path(&[2]), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.clear(), vec![HoverEvent::Leave(2)]);
//! ```

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered `K` (outer to inner).
    Enter(K),
    /// The pointer left `K` (inner to outer).
    Leave(K),
}

/// Remembers the hovered root-to-target path.
///
/// Updating with a new path yields leaves for the part of the old path that is
/// not shared, innermost first, then enters for the new part, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverTracker<K: Copy + Eq> {
    current: Vec<K>,
}

impl<K: Copy + Eq> Default for HoverTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The hovered path, root first.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// The innermost hovered item.
    pub fn target(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Forget the hovered path, returning leaves innermost first.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().rev().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Move to `new_path` and return the transitions needed to get there.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<_> = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(new_path[shared..].iter().map(|&k| HoverEvent::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_path_enters_outer_to_inner() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        assert_eq!(
            h.update_path(&[1, 2]),
            vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]
        );
        assert_eq!(h.target(), Some(2));
    }

    #[test]
    fn sibling_change_keeps_shared_ancestor() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[1, 2, 3]);
        assert_eq!(
            h.update_path(&[1, 4]),
            vec![
                HoverEvent::Leave(3),
                HoverEvent::Leave(2),
                HoverEvent::Enter(4)
            ]
        );
        assert_eq!(h.current_path(), &[1, 4]);
    }

    #[test]
    fn same_path_is_quiet() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[7]);
        assert!(h.update_path(&[7]).is_empty());
    }

    #[test]
    fn moving_off_everything_leaves() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[5, 6]);
        assert_eq!(
            h.update_path(&[]),
            vec![HoverEvent::Leave(6), HoverEvent::Leave(5)]
        );
        assert_eq!(h.target(), None);
        assert!(h.clear().is_empty());
    }
}
