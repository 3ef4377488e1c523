// SPDX-License-Identifier: MPL-2.0
//! Enter/exit animation state for a carousel window change.
//!
//! A transition remembers which item positions entered and left, and the
//! slot each leaving item occupied, so the view can fade leaving items out
//! in place while entering items fade and rise in.

use crate::config::TRANSITION_DURATION_MS;
use crate::rotation::WindowChange;
use std::time::{Duration, Instant};

/// Vertical travel of entering and leaving items (logical pixels).
pub const TRAVEL: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    change: WindowChange,
    /// Window positions shown before the change, by slot.
    previous_window: Vec<usize>,
    started_at: Instant,
    duration: Duration,
}

/// How one item should be drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Downward offset; negative values move the item up.
    pub offset_y: f32,
}

impl Pose {
    pub const RESTING: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

impl Transition {
    /// Starts a transition, or returns `None` when nothing entered or left.
    #[must_use]
    pub fn start(change: WindowChange, previous_window: Vec<usize>, now: Instant) -> Option<Self> {
        if change.is_unchanged() {
            return None;
        }
        Some(Self {
            change,
            previous_window,
            started_at: now,
            duration: Duration::from_millis(TRANSITION_DURATION_MS),
        })
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let linear = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_in_out(linear)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Pose of a currently visible item.
    #[must_use]
    pub fn entering_pose(&self, position: usize, now: Instant) -> Pose {
        if !self.change.entered.contains(&position) {
            return Pose::RESTING;
        }
        let progress = self.progress(now);
        Pose {
            opacity: progress,
            offset_y: TRAVEL * (1.0 - progress),
        }
    }

    /// Pose of an item that left the window.
    #[must_use]
    pub fn leaving_pose(&self, now: Instant) -> Pose {
        let progress = self.progress(now);
        Pose {
            opacity: 1.0 - progress,
            offset_y: -TRAVEL * progress,
        }
    }

    /// Leaving items by the slot they occupied; `None` for slots whose item
    /// is still visible.
    pub fn leaving_slots(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.previous_window
            .iter()
            .map(|position| self.change.left.contains(position).then_some(*position))
    }

    #[must_use]
    pub fn change(&self) -> &WindowChange {
        &self.change
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
