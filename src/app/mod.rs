// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page.
//!
//! The `App` struct wires together content, localization, the mounted
//! carousels and the header, and translates messages into side effects like
//! scrolling, opening links, config persistence or content reloads.

mod carousels;
pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use carousels::{Carousels, MountFailure};
pub use message::{Flags, Message};

use crate::content::{ContentSource, ImageRef, SiteContent};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::header;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::PageLayout;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Everything resolved before the event loop starts.
///
/// Cloned into the iced boot closure, which may be called more than once.
#[derive(Debug, Clone)]
pub struct Boot {
    flags: Flags,
    config_dir: Option<PathBuf>,
    config: Config,
    source: ContentSource,
    content: SiteContent,
    warnings: Vec<String>,
}

impl Boot {
    /// Loads config and content. A broken content manifest falls back to
    /// the built-in one with a warning; only a broken built-in manifest is
    /// fatal.
    pub fn prepare(flags: Flags) -> Result<Self> {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let source = ContentSource::resolve(flags.content.clone(), &config.content);

        let mut warnings: Vec<String> = config_warning.into_iter().collect();
        let content = match source.load() {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(
                    %err,
                    manifest = ?source.manifest(),
                    "falling back to built-in content"
                );
                warnings.push("notification-content-load-error".to_string());
                SiteContent::embedded()?
            }
        };

        Ok(Self {
            flags,
            config_dir,
            config,
            source,
            content,
            warnings,
        })
    }
}

/// Images referenced by the static sections.
#[derive(Debug, Clone, Default)]
pub struct PageImages {
    pub portrait: Option<ImageRef>,
    pub logos: Vec<ImageRef>,
}

impl PageImages {
    fn resolve(content: &SiteContent, source: &ContentSource) -> Self {
        Self {
            portrait: content
                .speaker
                .portrait
                .as_deref()
                .map(|name| source.image(name)),
            logos: source.images(&content.logos),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    source: ContentSource,
    content: SiteContent,
    images: PageImages,
    carousels: Carousels,
    reduce_motion: bool,
    theme_mode: ThemeMode,
    window_id: Option<window::Id>,
    window_width: f32,
    /// Height of the page scrollable, used to turn anchor offsets into
    /// relative scroll positions.
    viewport_height: f32,
    /// How far the page is scrolled, in `[0, 1]`.
    scroll_progress: f32,
    menu_open: bool,
    /// A content reload is in flight.
    reloading: bool,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("speaker", &self.content.speaker.name)
            .field("carousels", &self.carousels)
            .field("theme_mode", &self.theme_mode)
            .field("window_id", &self.window_id)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        // Carousels are disposed before the window closes.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(boot: Boot) -> iced::Result {
    iced::application(move || App::new(boot.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the page from prepared state and mounts the carousels.
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            config_dir,
            config,
            source,
            content,
            warnings,
        } = boot;

        let i18n = I18n::new(flags.lang.clone(), &config);
        let reduce_motion = flags.reduce_motion || config.carousel.reduce_motion.unwrap_or(false);
        let images = PageImages::resolve(&content, &source);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            source,
            content,
            images,
            carousels: Carousels::default(),
            reduce_motion,
            window_id: None,
            window_width: WINDOW_DEFAULT_WIDTH,
            viewport_height: WINDOW_DEFAULT_HEIGHT - sizing::HEADER_HEIGHT,
            scroll_progress: 0.0,
            menu_open: false,
            reloading: false,
            notifications: notifications::Manager::new(),
        };

        for key in warnings {
            app.notifications.push(Notification::warning(key));
        }
        app.mount_carousels(Instant::now());

        tracing::info!(
            speaker = %app.content.speaker.name,
            locale = %app.i18n.current_locale(),
            reduce_motion,
            "page ready"
        );
        (app, Task::none())
    }

    /// Mounts every carousel from the current content, reporting failures
    /// as warnings.
    fn mount_carousels(&mut self, now: Instant) {
        let (carousels, failures) = Carousels::mount(
            &self.content,
            &self.source,
            &self.config,
            self.reduce_motion,
            now,
        );
        self.carousels = carousels;
        for failure in failures {
            self.notifications.push(
                Notification::warning("notification-section-unavailable")
                    .with_arg("section", self.i18n.tr(failure.kind.i18n_key())),
            );
        }
    }

    /// Layout the section heights are computed for.
    fn page_layout(&self) -> PageLayout {
        PageLayout::new(
            header::is_compact(self.window_width),
            self.content.keynotes.len(),
        )
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", &self.content.speaker.name)])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_carousel_subscription(self.carousels.timers()),
            subscription::create_frame_subscription(self.carousels.is_animating()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Header(header_message) => update::handle_header_message(self, header_message),
            Message::Section(section_message) => {
                update::handle_section_message(self, section_message)
            }
            Message::Videos(videos_message) => {
                update::handle_videos_message(self, videos_message, now)
            }
            Message::Testimonials(testimonials_message) => {
                if let Some(testimonials) = self.carousels.testimonials.as_mut() {
                    testimonials.update(testimonials_message, now);
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CarouselTick { kind, mount } => {
                self.carousels.tick(kind, mount, now);
                Task::none()
            }
            Message::Frame(instant) => {
                self.carousels.frame(instant);
                Task::none()
            }
            Message::Tick(instant) => {
                self.notifications.tick(instant);
                Task::none()
            }
            Message::StepVideos(direction) => {
                if let Some(videos) = self.carousels.videos.as_mut() {
                    videos.state_mut().step(direction, now);
                }
                Task::none()
            }
            Message::Scrolled(viewport) => {
                update::handle_scrolled(
                    self,
                    viewport.bounds().height,
                    viewport.relative_offset().y,
                );
                Task::none()
            }
            Message::ContentReloadRequested => update::handle_reload_request(self),
            Message::ContentReloaded(result) => update::handle_content_reloaded(self, result, now),
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(self, size);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.carousels.unmount_all();
                tracing::info!("window closing");
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
