// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Rotation**: Carousel tick intervals and window shape
//! - **Transition**: Enter/exit animation timing
//! - **Layout**: Responsive breakpoints

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default period between gallery advances (milliseconds).
pub const DEFAULT_GALLERY_INTERVAL_MS: u64 = 3000;

/// Default period between testimonial advances (milliseconds).
pub const DEFAULT_TESTIMONIAL_INTERVAL_MS: u64 = 7000;

/// Minimum configurable tick interval (milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 1000;

/// Maximum configurable tick interval (milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

/// Number of gallery photos visible at once.
pub const GALLERY_WINDOW_SIZE: usize = 3;

/// Number of photos the gallery moves on each tick.
pub const GALLERY_ADVANCE_STEP: usize = 3;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the enter/exit transition of carousel items (milliseconds).
pub const TRANSITION_DURATION_MS: u64 = 600;

/// Frame period while a transition is running (milliseconds, ~60 fps).
pub const TRANSITION_FRAME_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width below which the header collapses into the compact menu.
pub const COMPACT_LAYOUT_BREAKPOINT: f32 = 768.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TICK_INTERVAL_MS < MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_GALLERY_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TESTIMONIAL_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(GALLERY_WINDOW_SIZE > 0);
    assert!(TRANSITION_FRAME_MS < TRANSITION_DURATION_MS);
};
