// SPDX-License-Identifier: MPL-2.0
//! The three rotating displays on the page and the state they share.
//!
//! [`Carousel`] couples a [`Rotation`] with its mount identity, animation
//! clock and running [`Transition`]. The gallery, video slideshow and
//! testimonial block each own one and add their own controls and view.
//!
//! A mounted carousel with an automatic timer is ticked by an iced
//! subscription keyed by its [`MountId`]. When the carousel is remounted
//! (content reload) the new instance gets a fresh id, so the old timer is
//! dropped by the subscription diff and any tick still in flight for the
//! old id is ignored.

pub mod gallery;
pub mod testimonials;
pub mod transition;
pub mod video_slideshow;

pub use gallery::Gallery;
pub use testimonials::Testimonials;
pub use transition::{Pose, Transition};
pub use video_slideshow::VideoSlideshow;

use crate::error::RotationError;
use crate::rotation::{Direction, Rotation, RotationSpec, Schedule, WindowChange};
use crate::ui::sections::Section;
use std::time::Instant;

/// Which rotating display a message or timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKind {
    Gallery,
    Videos,
    Testimonials,
}

impl CarouselKind {
    pub const ALL: [CarouselKind; 3] = [
        CarouselKind::Gallery,
        CarouselKind::Videos,
        CarouselKind::Testimonials,
    ];

    /// Localized name used in "section could not be shown" toasts.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            CarouselKind::Gallery => "section-gallery",
            CarouselKind::Videos => "section-videos",
            CarouselKind::Testimonials => "section-testimonials",
        }
    }

    /// The page section hosting this carousel.
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            CarouselKind::Gallery => Section::Gallery,
            CarouselKind::Videos => Section::Videos,
            CarouselKind::Testimonials => Section::CallToAction,
        }
    }
}

/// Identity of one mounted carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A mounted rotation with its animation state.
#[derive(Debug)]
pub struct Carousel<T> {
    rotation: Rotation<T>,
    mount_id: MountId,
    transition: Option<Transition>,
    reduce_motion: bool,
    clock: Instant,
}

impl<T> Carousel<T> {
    /// Mounts a carousel at index 0. Fails, arming nothing, when the rotation
    /// cannot be built.
    pub fn mount(
        items: Vec<T>,
        spec: RotationSpec,
        reduce_motion: bool,
        now: Instant,
    ) -> Result<Self, RotationError> {
        let rotation = Rotation::new(items, spec)?;
        Ok(Self {
            rotation,
            mount_id: MountId::next(),
            transition: None,
            reduce_motion,
            clock: now,
        })
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation<T> {
        &self.rotation
    }

    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    #[must_use]
    pub fn schedule(&self) -> Schedule {
        self.rotation.schedule()
    }

    /// Timer tick. Ignored once disposed.
    pub fn tick(&mut self, now: Instant) {
        let previous = self.rotation.window_positions();
        let change = self.rotation.tick();
        self.begin_transition(change, previous, now);
    }

    pub fn go_to(&mut self, index: isize, now: Instant) {
        let previous = self.rotation.window_positions();
        let change = self.rotation.go_to(index);
        self.begin_transition(change, previous, now);
    }

    pub fn step(&mut self, direction: Direction, now: Instant) {
        let previous = self.rotation.window_positions();
        let change = self.rotation.step(direction);
        self.begin_transition(change, previous, now);
    }

    /// Advances the animation clock and drops a finished transition.
    pub fn frame(&mut self, now: Instant) {
        self.clock = now;
        if self
            .transition
            .as_ref()
            .is_some_and(|transition| transition.is_finished(now))
        {
            self.transition = None;
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    #[must_use]
    pub fn clock(&self) -> Instant {
        self.clock
    }

    /// Pose of a visible item at the current clock.
    #[must_use]
    pub fn pose_of(&self, position: usize) -> Pose {
        self.transition
            .as_ref()
            .map_or(Pose::RESTING, |transition| {
                transition.entering_pose(position, self.clock)
            })
    }

    /// Item positions to draw for a one-item stage, bottom to top, with
    /// their poses: the item that just left while it fades out, then the
    /// current item.
    #[must_use]
    pub fn layers(&self) -> Vec<(usize, Pose)> {
        let mut layers: Vec<(usize, Pose)> = self
            .transition
            .iter()
            .flat_map(|transition| {
                let pose = transition.leaving_pose(self.clock);
                transition
                    .leaving_slots()
                    .flatten()
                    .map(move |position| (position, pose))
            })
            .collect();
        let current = self.rotation.current_index();
        layers.push((current, self.pose_of(current)));
        layers
    }

    /// Cancels the timer and stops animating. Idempotent.
    pub fn dispose(&mut self) {
        self.rotation.dispose();
        self.transition = None;
    }

    fn begin_transition(&mut self, change: WindowChange, previous: Vec<usize>, now: Instant) {
        self.clock = now;
        if self.reduce_motion {
            return;
        }
        if let Some(transition) = Transition::start(change, previous, now) {
            tracing::trace!(?transition, "carousel transition started");
            self.transition = Some(transition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::TickInterval;
    use std::time::Duration;

    fn gallery(reduce_motion: bool) -> Carousel<u32> {
        Carousel::mount(
            (0..11).collect(),
            RotationSpec::windowed(3, 3, TickInterval::from_millis(3000)),
            reduce_motion,
            Instant::now(),
        )
        .expect("gallery mounts")
    }

    #[test]
    fn mounting_twice_yields_distinct_ids() {
        assert_ne!(gallery(false).mount_id(), gallery(false).mount_id());
    }

    #[test]
    fn empty_items_do_not_mount() {
        let result =
            Carousel::<u32>::mount(Vec::new(), RotationSpec::manual(), false, Instant::now());
        assert_eq!(result.err(), Some(RotationError::EmptyItems));
    }

    #[test]
    fn tick_starts_a_transition_that_frames_finish() {
        let mut carousel = gallery(false);
        let start = Instant::now();
        carousel.tick(start);
        assert!(carousel.is_animating());
        assert_eq!(carousel.rotation().window_positions(), vec![3, 4, 5]);

        carousel.frame(start + Duration::from_millis(100));
        assert!(carousel.is_animating());
        carousel.frame(start + Duration::from_secs(1));
        assert!(!carousel.is_animating());
    }

    #[test]
    fn reduced_motion_skips_transitions() {
        let mut carousel = gallery(true);
        carousel.tick(Instant::now());
        assert!(!carousel.is_animating());
        assert_eq!(carousel.rotation().current_index(), 3);
    }

    #[test]
    fn dispose_cancels_timer_and_ignores_ticks() {
        let mut carousel = gallery(false);
        carousel.dispose();
        carousel.dispose();
        assert_eq!(carousel.schedule(), Schedule::Cancelled);

        carousel.tick(Instant::now());
        assert_eq!(carousel.rotation().current_index(), 0);
        assert!(!carousel.is_animating());
    }

    fn quotes(reduce_motion: bool) -> Carousel<&'static str> {
        Carousel::mount(
            vec!["first", "second", "third"],
            RotationSpec::single(TickInterval::from_millis(7000)),
            reduce_motion,
            Instant::now(),
        )
        .expect("quotes mount")
    }

    #[test]
    fn resting_stage_draws_only_the_current_item() {
        let carousel = quotes(false);
        assert_eq!(carousel.layers(), vec![(0, Pose::RESTING)]);
    }

    #[test]
    fn stage_keeps_the_leaving_item_under_the_entering_one() {
        let mut carousel = quotes(false);
        let start = Instant::now();
        carousel.tick(start);
        carousel.frame(start + Duration::from_millis(150));

        let layers = carousel.layers();
        let positions: Vec<usize> = layers.iter().map(|(position, _)| *position).collect();
        assert_eq!(positions, vec![0, 1]);

        let (leaving, entering) = (layers[0].1, layers[1].1);
        assert!(leaving.opacity > 0.0 && leaving.opacity < 1.0);
        assert!(entering.opacity > 0.0 && entering.opacity < 1.0);
        assert!((leaving.opacity + entering.opacity - 1.0).abs() < 1e-6);

        carousel.frame(start + Duration::from_secs(1));
        assert_eq!(carousel.layers(), vec![(1, Pose::RESTING)]);
    }

    #[test]
    fn reduced_motion_stage_swaps_items_at_once() {
        let mut carousel = quotes(true);
        carousel.go_to(2, Instant::now());
        assert_eq!(carousel.layers(), vec![(2, Pose::RESTING)]);
    }

    #[test]
    fn carousels_live_in_their_sections() {
        assert_eq!(CarouselKind::Gallery.section(), Section::Gallery);
        assert_eq!(CarouselKind::Testimonials.section(), Section::CallToAction);
    }
}
