// SPDX-License-Identifier: MPL-2.0
//! The set of mounted carousels and their lifecycle.
//!
//! Carousels are mounted together when content arrives and unmounted
//! together before a reload or on close. A carousel whose rotation cannot be
//! built stays unmounted and its section is left out of the page.

use crate::config::Config;
use crate::content::{ContentSource, SiteContent};
use crate::error::RotationError;
use crate::rotation::TickInterval;
use crate::ui::carousel::{CarouselKind, Gallery, MountId, Testimonials, VideoSlideshow};
use crate::ui::sections::Section;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct Carousels {
    pub gallery: Option<Gallery>,
    pub videos: Option<VideoSlideshow>,
    pub testimonials: Option<Testimonials>,
}

/// A carousel that could not be mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountFailure {
    pub kind: CarouselKind,
    pub error: RotationError,
}

impl Carousels {
    /// Mounts every carousel enabled in `config`.
    pub fn mount(
        content: &SiteContent,
        source: &ContentSource,
        config: &Config,
        reduce_motion: bool,
        now: Instant,
    ) -> (Self, Vec<MountFailure>) {
        let mut failures = Vec::new();
        let mut record = |kind: CarouselKind, error: RotationError| {
            tracing::warn!(?kind, %error, "carousel not mounted");
            failures.push(MountFailure { kind, error });
        };

        let gallery = config
            .sections
            .gallery
            .then(|| {
                Gallery::mount(
                    source.images(&content.gallery),
                    config.carousel.gallery_interval(),
                    reduce_motion,
                    now,
                )
            })
            .and_then(|result| result.map_err(|err| record(CarouselKind::Gallery, err)).ok());

        let videos = config
            .sections
            .videos
            .then(|| VideoSlideshow::mount(content.videos.clone(), reduce_motion, now))
            .and_then(|result| result.map_err(|err| record(CarouselKind::Videos, err)).ok());

        let testimonials = config
            .sections
            .testimonials
            .then(|| {
                Testimonials::mount(
                    content.testimonials.clone(),
                    config.carousel.testimonial_interval(),
                    reduce_motion,
                    now,
                )
            })
            .and_then(|result| {
                result
                    .map_err(|err| record(CarouselKind::Testimonials, err))
                    .ok()
            });

        let carousels = Self {
            gallery,
            videos,
            testimonials,
        };
        tracing::debug!(mounted = ?carousels.mounted_kinds(), "carousels mounted");
        (carousels, failures)
    }

    /// Disposes every mounted carousel and drops it.
    pub fn unmount_all(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.state_mut().dispose();
        }
        if let Some(videos) = self.videos.as_mut() {
            videos.state_mut().dispose();
        }
        if let Some(testimonials) = self.testimonials.as_mut() {
            testimonials.state_mut().dispose();
        }
        *self = Self::default();
    }

    #[must_use]
    pub fn is_mounted(&self, kind: CarouselKind) -> bool {
        self.mount_id(kind).is_some()
    }

    #[must_use]
    pub fn mount_id(&self, kind: CarouselKind) -> Option<MountId> {
        match kind {
            CarouselKind::Gallery => self.gallery.as_ref().map(|c| c.state().mount_id()),
            CarouselKind::Videos => self.videos.as_ref().map(|c| c.state().mount_id()),
            CarouselKind::Testimonials => {
                self.testimonials.as_ref().map(|c| c.state().mount_id())
            }
        }
    }

    fn mounted_kinds(&self) -> Vec<CarouselKind> {
        CarouselKind::ALL
            .into_iter()
            .filter(|&kind| self.is_mounted(kind))
            .collect()
    }

    /// Whether a page section is on the page. The gallery and video
    /// sections exist only while their carousel is mounted.
    #[must_use]
    pub fn section_is_mounted(&self, section: Section) -> bool {
        match section {
            Section::Gallery => self.is_mounted(CarouselKind::Gallery),
            Section::Videos => self.is_mounted(CarouselKind::Videos),
            _ => true,
        }
    }

    /// Live timers, keyed by the instance that owns them.
    #[must_use]
    pub fn timers(&self) -> Vec<(CarouselKind, MountId, TickInterval)> {
        let gallery = self.gallery.as_ref().and_then(|c| {
            let state = c.state();
            state
                .rotation()
                .timer()
                .map(|interval| (CarouselKind::Gallery, state.mount_id(), interval))
        });
        let testimonials = self.testimonials.as_ref().and_then(|c| {
            let state = c.state();
            state
                .rotation()
                .timer()
                .map(|interval| (CarouselKind::Testimonials, state.mount_id(), interval))
        });
        gallery.into_iter().chain(testimonials).collect()
    }

    /// Applies a timer tick. Returns `false` when the tick belongs to an
    /// instance that is no longer mounted.
    pub fn tick(&mut self, kind: CarouselKind, mount: MountId, now: Instant) -> bool {
        if self.mount_id(kind) != Some(mount) {
            tracing::trace!(?kind, ?mount, "stale carousel tick ignored");
            return false;
        }
        match kind {
            CarouselKind::Gallery => {
                if let Some(gallery) = self.gallery.as_mut() {
                    gallery.state_mut().tick(now);
                }
            }
            CarouselKind::Videos => {
                if let Some(videos) = self.videos.as_mut() {
                    videos.state_mut().tick(now);
                }
            }
            CarouselKind::Testimonials => {
                if let Some(testimonials) = self.testimonials.as_mut() {
                    testimonials.state_mut().tick(now);
                }
            }
        }
        true
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.gallery.as_ref().is_some_and(|c| c.state().is_animating())
            || self.videos.as_ref().is_some_and(|c| c.state().is_animating())
            || self
                .testimonials
                .as_ref()
                .is_some_and(|c| c.state().is_animating())
    }

    pub fn frame(&mut self, now: Instant) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.state_mut().frame(now);
        }
        if let Some(videos) = self.videos.as_mut() {
            videos.state_mut().frame(now);
        }
        if let Some(testimonials) = self.testimonials.as_mut() {
            testimonials.state_mut().frame(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentConfig;

    fn mount_embedded(config: &Config) -> (Carousels, Vec<MountFailure>) {
        let content = SiteContent::embedded().expect("embedded manifest parses");
        let source = ContentSource::resolve(None, &ContentConfig::default());
        Carousels::mount(&content, &source, config, true, Instant::now())
    }

    #[test]
    fn embedded_content_mounts_all_three() {
        let (carousels, failures) = mount_embedded(&Config::default());
        assert!(failures.is_empty());
        for kind in CarouselKind::ALL {
            assert!(carousels.is_mounted(kind));
        }
    }

    #[test]
    fn only_automatic_carousels_have_timers() {
        let (carousels, _) = mount_embedded(&Config::default());
        let kinds: Vec<CarouselKind> = carousels.timers().into_iter().map(|t| t.0).collect();
        assert_eq!(kinds, vec![CarouselKind::Gallery, CarouselKind::Testimonials]);
    }

    #[test]
    fn disabled_sections_are_not_mounted_and_not_failures() {
        let mut config = Config::default();
        config.sections.videos = false;
        let (carousels, failures) = mount_embedded(&config);
        assert!(failures.is_empty());
        assert!(!carousels.is_mounted(CarouselKind::Videos));
        assert!(!carousels.section_is_mounted(Section::Videos));
        assert!(carousels.section_is_mounted(Section::CallToAction));
    }

    #[test]
    fn empty_lists_are_reported_as_failures() {
        let mut content = SiteContent::embedded().expect("embedded manifest parses");
        content.testimonials.clear();
        content.gallery.truncate(2);
        let source = ContentSource::resolve(None, &ContentConfig::default());
        let (carousels, failures) =
            Carousels::mount(&content, &source, &Config::default(), true, Instant::now());

        assert!(carousels.is_mounted(CarouselKind::Videos));
        assert_eq!(
            failures,
            vec![
                MountFailure {
                    kind: CarouselKind::Gallery,
                    error: RotationError::WindowSize {
                        requested: 3,
                        item_count: 2
                    },
                },
                MountFailure {
                    kind: CarouselKind::Testimonials,
                    error: RotationError::EmptyItems,
                },
            ]
        );
    }

    #[test]
    fn stale_ticks_are_ignored_after_remount() {
        let (mut carousels, _) = mount_embedded(&Config::default());
        let old = carousels.mount_id(CarouselKind::Gallery).unwrap();
        carousels.unmount_all();
        let (mut fresh, _) = mount_embedded(&Config::default());
        assert!(!carousels.tick(CarouselKind::Gallery, old, Instant::now()));
        assert!(!fresh.tick(CarouselKind::Gallery, old, Instant::now()));

        let current = fresh.mount_id(CarouselKind::Gallery).unwrap();
        assert!(fresh.tick(CarouselKind::Gallery, current, Instant::now()));
        assert_eq!(
            fresh.gallery.as_ref().unwrap().state().rotation().current_index(),
            3
        );
    }

    #[test]
    fn unmount_all_clears_timers() {
        let (mut carousels, _) = mount_embedded(&Config::default());
        carousels.unmount_all();
        assert!(carousels.timers().is_empty());
        assert!(!carousels.is_animating());
    }
}
