// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame tick source.
//!
//! Owners register a callback with [`Ticker::add`] and keep the returned
//! [`TickHandle`]; removing by handle is the only way to unregister.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Handle of a registered tick callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

type TickFn = Box<dyn FnMut(f64)>;

/// Frame clock that invokes registered callbacks with the frame delta.
#[derive(Default)]
pub struct Ticker {
    next: u64,
    callbacks: Vec<(TickHandle, TickFn)>,
}

impl core::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ticker")
            .field("callbacks", &self.callbacks.len())
            .field("next", &self.next)
            .finish()
    }
}

impl Ticker {
    /// A ticker with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; it runs on every [`Ticker::tick`] until removed.
    pub fn add(&mut self, callback: impl FnMut(f64) + 'static) -> TickHandle {
        self.next += 1;
        let handle = TickHandle(self.next);
        self.callbacks.push((handle, Box::new(callback)));
        handle
    }

    /// Unregister a callback. Returns `false` if the handle was not registered.
    pub fn remove(&mut self, handle: TickHandle) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(h, _)| *h != handle);
        self.callbacks.len() != before
    }

    /// Whether `handle` is currently registered.
    pub fn contains(&self, handle: TickHandle) -> bool {
        self.callbacks.iter().any(|(h, _)| *h == handle)
    }

    /// Run every callback once, in registration order.
    pub fn tick(&mut self, delta: f64) {
        for (_, cb) in &mut self.callbacks {
            cb(delta);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// True if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn add_tick_remove() {
        let mut ticker = Ticker::new();
        let frames = Rc::new(Cell::new(0.0));
        let seen = Rc::clone(&frames);
        let h = ticker.add(move |dt| seen.set(seen.get() + dt));
        ticker.tick(0.5);
        ticker.tick(0.25);
        assert_eq!(frames.get(), 0.75);
        assert!(ticker.contains(h));

        assert!(ticker.remove(h));
        assert!(!ticker.remove(h), "second removal is a no-op");
        ticker.tick(1.0);
        assert_eq!(frames.get(), 0.75);
        assert!(ticker.is_empty());
    }

    #[test]
    fn handles_are_unique() {
        let mut ticker = Ticker::new();
        let a = ticker.add(|_| {});
        let b = ticker.add(|_| {});
        assert_ne!(a, b);
        assert!(ticker.remove(a));
        assert_eq!(ticker.len(), 1);
        assert!(ticker.contains(b));
    }
}
