//! Shared test infrastructure for station-common integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use std::collections::VecDeque;

use station_common::{Gesture, GestureSource, Tick, TickSource};

// ============================================================================
// Mock Tick Source
// ============================================================================

/// Tick source with controllable time advancement
pub struct MockTickSource {
    current: Cell<Tick>,
}

impl MockTickSource {
    pub fn new() -> Self { Self::starting_at(Tick(0)) }

    pub fn starting_at(tick: Tick) -> Self {
        Self {
            current: Cell::new(tick),
        }
    }

    /// Advance time by `ms`, wrapping like the hardware counter
    pub fn advance(&self, ms: u32) {
        self.current.set(self.current.get().wrapping_add(ms));
    }

    pub fn set(&self, tick: Tick) {
        self.current.set(tick);
    }
}

impl TickSource for MockTickSource {
    fn now(&self) -> Tick {
        self.current.get()
    }
}

// ============================================================================
// Scripted Gesture Source
// ============================================================================

/// Replays a fixed gesture script, then reports `Gesture::None` forever
pub struct ScriptedGestures {
    script: VecDeque<Gesture>,
    polls: usize,
}

impl ScriptedGestures {
    pub fn new(script: &[Gesture]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            polls: 0,
        }
    }

    pub fn idle() -> Self { Self::new(&[]) }

    pub fn polls(&self) -> usize { self.polls }
}

impl GestureSource for ScriptedGestures {
    fn poll_gesture(&mut self) -> Gesture {
        self.polls += 1;
        self.script.pop_front().unwrap_or(Gesture::None)
    }
}
