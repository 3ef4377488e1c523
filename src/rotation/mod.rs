// SPDX-License-Identifier: MPL-2.0
//! Rotating display primitive.
//!
//! A [`Rotation`] owns an index into a fixed, non-empty item sequence and
//! exposes the window of items currently on screen. The index moves in three
//! ways:
//!
//! - [`Rotation::tick`] - automatic advance by the configured step, driven by
//!   the host's periodic timer
//! - [`Rotation::step`] - previous/next navigation, wrapping at both ends
//! - [`Rotation::go_to`] - direct selection (dot controls), normalized with a
//!   Euclidean modulo so any integer is accepted
//!
//! The rotation never owns a timer itself. It describes the timer it wants
//! through [`Schedule`], and the host turns a live [`Schedule::Every`] into a
//! periodic callback. [`Rotation::dispose`] flips the schedule to
//! [`Schedule::Cancelled`]; ticks delivered after that are ignored.
//!
//! # Example
//!
//! ```
//! use podium::rotation::{Rotation, RotationSpec, TickInterval};
//!
//! let items: Vec<u32> = (0..11).collect();
//! let spec = RotationSpec::windowed(3, 3, TickInterval::from_millis(3000));
//! let mut gallery = Rotation::new(items, spec).expect("non-empty gallery");
//!
//! gallery.tick();
//! let window: Vec<u32> = gallery.visible_window().copied().collect();
//! assert_eq!(window, vec![3, 4, 5]);
//! ```

pub mod interval;
pub mod window;

pub use interval::TickInterval;
pub use window::WindowChange;

use crate::error::RotationError;

/// Direction of a manual previous/next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed offset applied to the index (`-1` or `+1`).
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Timer requested by a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// No automatic advance; only user navigation moves the index.
    Manual,
    /// Advance once per interval while the rotation is live.
    Every(TickInterval),
    /// The rotation was disposed; no timer may run.
    Cancelled,
}

/// Static shape of a rotation: how many items are visible, how far a tick
/// moves, and whether ticks happen automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSpec {
    pub window_size: usize,
    pub advance_step: usize,
    pub interval: Option<TickInterval>,
}

impl RotationSpec {
    /// Single visible item, one step per tick, manual navigation only.
    #[must_use]
    pub const fn manual() -> Self {
        Self {
            window_size: 1,
            advance_step: 1,
            interval: None,
        }
    }

    /// Single visible item advancing by one every `interval`.
    #[must_use]
    pub const fn single(interval: TickInterval) -> Self {
        Self {
            window_size: 1,
            advance_step: 1,
            interval: Some(interval),
        }
    }

    /// Multi-item window advancing by `advance_step` every `interval`.
    #[must_use]
    pub const fn windowed(window_size: usize, advance_step: usize, interval: TickInterval) -> Self {
        Self {
            window_size,
            advance_step,
            interval: Some(interval),
        }
    }
}

/// Index state over a fixed item sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation<T> {
    items: Vec<T>,
    current_index: usize,
    window_size: usize,
    advance_step: usize,
    schedule: Schedule,
}

impl<T> Rotation<T> {
    /// Builds a live rotation positioned on the first item.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::EmptyItems`] when `items` is empty and
    /// [`RotationError::WindowSize`] when the window does not fit in
    /// `[1, items.len()]`. No timer is requested by a failed construction.
    pub fn new(items: Vec<T>, spec: RotationSpec) -> Result<Self, RotationError> {
        if items.is_empty() {
            return Err(RotationError::EmptyItems);
        }
        if spec.window_size == 0 || spec.window_size > items.len() {
            return Err(RotationError::WindowSize {
                requested: spec.window_size,
                item_count: items.len(),
            });
        }

        let schedule = match spec.interval {
            Some(interval) => Schedule::Every(interval),
            None => Schedule::Manual,
        };

        Ok(Self {
            items,
            current_index: 0,
            window_size: spec.window_size,
            advance_step: spec.advance_step,
            schedule,
        })
    }

    /// Timer-driven advance by the configured step.
    ///
    /// Ignored once the rotation is disposed, so a tick already queued by
    /// the host cannot move a display that left the page.
    pub fn tick(&mut self) -> WindowChange {
        if self.is_disposed() {
            return WindowChange::default();
        }
        let len = self.items.len();
        let next = (self.current_index + self.advance_step % len) % len;
        self.move_to(next)
    }

    /// Jumps to `index`, normalized into range with a Euclidean modulo.
    pub fn go_to(&mut self, index: isize) -> WindowChange {
        let len = isize::try_from(self.items.len()).unwrap_or(isize::MAX);
        let normalized = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
        self.move_to(normalized)
    }

    /// Moves one item backward or forward, wrapping at both ends.
    pub fn step(&mut self, direction: Direction) -> WindowChange {
        let current = isize::try_from(self.current_index).unwrap_or(isize::MAX);
        self.go_to(current.saturating_add(direction.offset()))
    }

    /// Cancels the automatic timer. Safe to call any number of times.
    pub fn dispose(&mut self) {
        self.schedule = Schedule::Cancelled;
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.schedule == Schedule::Cancelled
    }

    /// Timer the host should keep running for this rotation, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TickInterval> {
        match self.schedule {
            Schedule::Every(interval) => Some(interval),
            Schedule::Manual | Schedule::Cancelled => None,
        }
    }

    #[must_use]
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.items[self.current_index]
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: an empty rotation cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    #[must_use]
    pub fn advance_step(&self) -> usize {
        self.advance_step
    }

    /// Item positions currently visible, in display order.
    #[must_use]
    pub fn window_positions(&self) -> Vec<usize> {
        let len = self.items.len();
        (0..self.window_size)
            .map(|offset| (self.current_index + offset) % len)
            .collect()
    }

    /// Items currently visible, in display order.
    pub fn visible_window(&self) -> impl Iterator<Item = &T> + '_ {
        let len = self.items.len();
        (0..self.window_size).map(move |offset| &self.items[(self.current_index + offset) % len])
    }

    fn move_to(&mut self, index: usize) -> WindowChange {
        let previous = self.window_positions();
        self.current_index = index;
        WindowChange::between(&previous, &self.window_positions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Rotation<usize> {
        Rotation::new(
            (0..11).collect(),
            RotationSpec::windowed(3, 3, TickInterval::from_millis(3000)),
        )
        .expect("gallery builds")
    }

    fn testimonials() -> Rotation<&'static str> {
        Rotation::new(
            vec!["first", "second", "third"],
            RotationSpec::single(TickInterval::from_millis(7000)),
        )
        .expect("testimonials build")
    }

    #[test]
    fn new_starts_at_first_item() {
        let rotation = gallery();
        assert_eq!(rotation.current_index(), 0);
        assert_eq!(rotation.window_positions(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_items_fail_without_timer() {
        let result = Rotation::<u8>::new(
            Vec::new(),
            RotationSpec::single(TickInterval::from_millis(7000)),
        );
        assert_eq!(result, Err(RotationError::EmptyItems));
    }

    #[test]
    fn window_larger_than_items_is_rejected() {
        let result = Rotation::new(
            vec![1, 2],
            RotationSpec::windowed(3, 3, TickInterval::from_millis(3000)),
        );
        assert_eq!(
            result,
            Err(RotationError::WindowSize {
                requested: 3,
                item_count: 2
            })
        );
    }

    #[test]
    fn zero_window_is_rejected() {
        let spec = RotationSpec {
            window_size: 0,
            advance_step: 1,
            interval: None,
        };
        assert!(matches!(
            Rotation::new(vec![1], spec),
            Err(RotationError::WindowSize { requested: 0, .. })
        ));
    }

    #[test]
    fn gallery_tick_shows_next_three() {
        let mut rotation = gallery();
        rotation.tick();
        assert_eq!(
            rotation.visible_window().copied().collect::<Vec<_>>(),
            vec![3, 4, 5]
        );
    }

    #[test]
    fn gallery_wraps_after_four_ticks() {
        let mut rotation = gallery();
        for _ in 0..4 {
            rotation.tick();
        }
        assert_eq!(rotation.current_index(), 1);
        assert_eq!(
            rotation.visible_window().copied().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn gallery_window_wraps_across_the_end() {
        let mut rotation = gallery();
        rotation.go_to(10);
        assert_eq!(rotation.window_positions(), vec![10, 0, 1]);
    }

    #[test]
    fn testimonial_ticks_cycle_through_all_quotes() {
        let mut rotation = testimonials();
        assert_eq!(*rotation.current(), "first");
        rotation.tick();
        assert_eq!(*rotation.current(), "second");
        rotation.tick();
        assert_eq!(*rotation.current(), "third");
        rotation.tick();
        assert_eq!(rotation.current_index(), 0);
    }

    #[test]
    fn go_to_normalizes_out_of_range_and_negative() {
        let mut rotation = testimonials();
        rotation.go_to(4);
        assert_eq!(rotation.current_index(), 1);
        rotation.go_to(-1);
        assert_eq!(rotation.current_index(), 2);
        rotation.go_to(-7);
        assert_eq!(rotation.current_index(), 2);
    }

    #[test]
    fn step_wraps_at_both_ends() {
        let mut rotation = Rotation::new(vec!['a', 'b'], RotationSpec::manual()).expect("builds");
        rotation.step(Direction::Previous);
        assert_eq!(rotation.current_index(), 1);
        rotation.step(Direction::Next);
        assert_eq!(rotation.current_index(), 0);
    }

    #[test]
    fn manual_rotation_requests_no_timer() {
        let rotation = Rotation::new(vec!['a', 'b'], RotationSpec::manual()).expect("builds");
        assert_eq!(rotation.schedule(), Schedule::Manual);
        assert!(rotation.timer().is_none());
    }

    #[test]
    fn auto_rotation_requests_its_interval() {
        let rotation = testimonials();
        assert_eq!(rotation.timer(), Some(TickInterval::from_millis(7000)));
    }

    #[test]
    fn dispose_is_idempotent_and_stops_ticks() {
        let mut rotation = testimonials();
        rotation.dispose();
        rotation.dispose();
        assert!(rotation.is_disposed());
        assert!(rotation.timer().is_none());

        let change = rotation.tick();
        assert!(change.is_unchanged());
        assert_eq!(rotation.current_index(), 0);
    }

    #[test]
    fn manual_navigation_does_not_touch_the_timer() {
        let mut rotation = testimonials();
        rotation.go_to(2);
        rotation.step(Direction::Previous);
        assert_eq!(rotation.timer(), Some(TickInterval::from_millis(7000)));

        // A tick right after a manual jump moves on from the new position.
        rotation.tick();
        assert_eq!(rotation.current_index(), 2);
    }

    #[test]
    fn tick_reports_keyed_window_change() {
        let mut rotation = gallery();
        let change = rotation.tick();
        assert_eq!(change.entered, vec![3, 4, 5]);
        assert_eq!(change.left, vec![0, 1, 2]);
        assert!(change.kept.is_empty());
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Previous.offset(), -1);
        assert_eq!(Direction::Next.offset(), 1);
    }
}
