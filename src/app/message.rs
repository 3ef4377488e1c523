// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::SiteContent;
use crate::error::Error;
use crate::rotation::Direction;
use crate::ui::carousel::{testimonials, video_slideshow, CarouselKind, MountId};
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::sections;
use iced::widget::scrollable;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Section(sections::Message),
    Videos(video_slideshow::Message),
    Testimonials(testimonials::Message),
    Notification(notifications::NotificationMessage),
    /// Timer tick for one mounted carousel. Dropped when `mount` no longer
    /// matches the mounted instance.
    CarouselTick {
        kind: CarouselKind,
        mount: MountId,
    },
    /// Animation frame while a carousel transition runs.
    Frame(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Keyboard arrows step the video slideshow.
    StepVideos(Direction),
    Scrolled(scrollable::Viewport),
    ContentReloadRequested,
    ContentReloaded(Result<SiteContent, Error>),
    WindowOpened(iced::window::Id),
    WindowResized(iced::Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form.
    pub lang: Option<String>,
    /// Content manifest to load instead of the built-in one.
    pub content: Option<PathBuf>,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
    /// Disable enter/exit animations regardless of the config file.
    pub reduce_motion: bool,
}
