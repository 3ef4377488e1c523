// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! `App::update` routes simple messages inline and hands everything with a
//! side effect (scrolling, links, persistence, reloads) to this module.

use super::{config, App, Message, PageImages};
use crate::content::SiteContent;
use crate::error::Error;
use crate::ui::carousel::video_slideshow;
use crate::ui::design_tokens::sizing;
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::Notification;
use crate::ui::sections::{self, Anchor, Section};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Id of the page scrollable, targeted by anchor navigation.
pub const PAGE_SCROLLABLE: &str = "page-scrollable";

pub(super) fn handle_header_message(app: &mut App, message: header::Message) -> Task<Message> {
    match header::update(message, &mut app.menu_open) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::Navigate(anchor) => scroll_to_anchor(app, anchor),
        HeaderEvent::CycleTheme => {
            cycle_theme(app);
            Task::none()
        }
    }
}

pub(super) fn handle_section_message(app: &mut App, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::Navigate(anchor) => {
            app.menu_open = false;
            scroll_to_anchor(app, anchor)
        }
        sections::Message::OpenLink(url) => {
            open_link(app, &url);
            Task::none()
        }
    }
}

pub(super) fn handle_videos_message(
    app: &mut App,
    message: video_slideshow::Message,
    now: Instant,
) -> Task<Message> {
    let Some(videos) = app.carousels.videos.as_mut() else {
        return Task::none();
    };
    match videos.update(message, now) {
        video_slideshow::Event::None => {}
        video_slideshow::Event::OpenLink(url) => open_link(app, &url),
    }
    Task::none()
}

/// Scrolls the page so the anchor's section starts at the top of the
/// scrollable.
///
/// Anchors whose section is not mounted leave the scroll position alone.
fn scroll_to_anchor(app: &App, anchor: Anchor) -> Task<Message> {
    let layout = app.page_layout();
    let is_mounted = |section: Section| app.carousels.section_is_mounted(section);
    let Some(offset) = sections::offset_of(anchor.section(), layout, is_mounted) else {
        tracing::debug!(?anchor, "anchor target is not mounted");
        return Task::none();
    };

    let content_height = sections::page_height(layout, is_mounted);
    let y = relative_scroll(offset, content_height, app.viewport_height);
    tracing::debug!(?anchor, offset, y, "scrolling to anchor");
    operation::snap_to(Id::new(PAGE_SCROLLABLE), RelativeOffset { x: 0.0, y })
}

/// Converts an absolute offset into the `[0, 1]` position a scrollable
/// expects.
pub(super) fn relative_scroll(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let range = content_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}

/// Records the page viewport after a scroll.
pub(super) fn handle_scrolled(app: &mut App, viewport_height: f32, relative_y: f32) {
    app.viewport_height = viewport_height;
    app.scroll_progress = scroll_progress(relative_y);
}

/// Progress shown by the bar under the header. Pages too short to scroll
/// report a non-finite offset, shown as no progress.
pub(super) fn scroll_progress(relative_y: f32) -> f32 {
    if relative_y.is_finite() {
        relative_y.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn cycle_theme(app: &mut App) {
    app.theme_mode = app.theme_mode.next();
    app.config.general.theme_mode = app.theme_mode;
    tracing::debug!(mode = ?app.theme_mode, "theme mode changed");

    if let Err(err) = config::save_with_override(&app.config, app.config_dir.clone()) {
        tracing::warn!(%err, "failed to persist theme mode");
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

fn open_link(app: &mut App, url: &str) {
    tracing::info!(url, "opening link");
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(url, %err, "failed to open link");
        app.notifications
            .push(Notification::error("notification-open-link-error"));
    }
}

pub(super) fn handle_reload_request(app: &mut App) -> Task<Message> {
    if app.reloading {
        tracing::debug!("content reload already in flight");
        return Task::none();
    }
    app.reloading = true;
    tracing::info!(manifest = ?app.source.manifest(), "reloading content");
    Task::perform(app.source.clone().load_async(), Message::ContentReloaded)
}

/// Applies a reload result. Success replaces the content and remounts every
/// carousel; failure keeps the current page running.
pub(super) fn handle_content_reloaded(
    app: &mut App,
    result: Result<SiteContent, Error>,
    now: Instant,
) -> Task<Message> {
    app.reloading = false;
    match result {
        Ok(content) => {
            app.carousels.unmount_all();
            app.notifications
                .clear_with_prefix("notification-section-unavailable");
            app.images = PageImages::resolve(&content, &app.source);
            app.content = content;
            app.mount_carousels(now);
            app.notifications
                .push(Notification::success("notification-content-reloaded"));
        }
        Err(err) => {
            tracing::warn!(%err, "content reload failed");
            app.notifications
                .push(Notification::error("notification-content-load-error"));
        }
    }
    Task::none()
}

pub(super) fn handle_window_resized(app: &mut App, size: iced::Size) {
    app.window_width = size.width;
    app.viewport_height = (size.height - sizing::HEADER_HEIGHT).max(0.0);
    if !header::is_compact(size.width) {
        app.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_scroll_maps_offsets_into_range() {
        assert_eq!(relative_scroll(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(relative_scroll(1100.0, 3000.0, 800.0), 0.5);
        assert_eq!(relative_scroll(2900.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn short_pages_do_not_scroll() {
        assert_eq!(relative_scroll(400.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn scroll_progress_stays_in_range() {
        assert_eq!(scroll_progress(0.25), 0.25);
        assert_eq!(scroll_progress(1.2), 1.0);
        assert_eq!(scroll_progress(-0.1), 0.0);
        assert_eq!(scroll_progress(f32::NAN), 0.0);
    }
}
