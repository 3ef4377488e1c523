// SPDX-License-Identifier: MPL-2.0
//! Video slideshow: one video at a time, moved only by the user.
//!
//! Arrows step with wrap-around, dots jump to a slide, and the "Watch"
//! button asks the app to open the video in the browser.

use super::transition::{Pose, TRAVEL};
use super::Carousel;
use crate::content::VideoDescriptor;
use crate::error::RotationError;
use crate::i18n::fluent::I18n;
use crate::rotation::{Direction, RotationSpec};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sections::{self, PageLayout, Section};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Step(Direction),
    Select(usize),
    Watch,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(String),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub short_name: &'a str,
    pub layout: PageLayout,
    pub theme: Theme,
}

#[derive(Debug)]
pub struct VideoSlideshow {
    carousel: Carousel<VideoDescriptor>,
}

impl VideoSlideshow {
    pub fn mount(
        videos: Vec<VideoDescriptor>,
        reduce_motion: bool,
        now: Instant,
    ) -> Result<Self, RotationError> {
        Ok(Self {
            carousel: Carousel::mount(videos, RotationSpec::manual(), reduce_motion, now)?,
        })
    }

    #[must_use]
    pub fn state(&self) -> &Carousel<VideoDescriptor> {
        &self.carousel
    }

    pub fn state_mut(&mut self) -> &mut Carousel<VideoDescriptor> {
        &mut self.carousel
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Step(direction) => {
                self.carousel.step(direction, now);
                Event::None
            }
            Message::Select(index) => {
                let index = isize::try_from(index).unwrap_or(isize::MAX);
                self.carousel.go_to(index, now);
                Event::None
            }
            Message::Watch => Event::OpenLink(self.carousel.rotation().current().watch_url()),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let colors = ColorScheme::for_theme(&ctx.theme);
        let rotation = self.carousel.rotation();

        // The outgoing title fades out under the incoming one.
        let titles = self
            .carousel
            .layers()
            .into_iter()
            .fold(Stack::new(), |stack, (position, pose)| {
                stack.push(slide_layer(&rotation.items()[position], pose, colors.text_primary))
            });

        let slide = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(titles)
                .push(
                    button(
                        Row::new()
                            .spacing(spacing::XS)
                            .align_y(alignment::Vertical::Center)
                            .push(icons::sized(icons::play(), sizing::ICON_SM, colors.accent_text))
                            .push(Text::new(ctx.i18n.tr("video-watch"))),
                    )
                    .on_press(Message::Watch)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary),
                ),
        )
        .center(Length::Fill)
        .height(Length::Fixed(sizing::VIDEO_STAGE_HEIGHT))
        .style(styles::container::card);

        let arrow = |handle, direction| {
            button(icons::sized(handle, sizing::ICON_MD, colors.text_primary))
                .on_press(Message::Step(direction))
                .padding(spacing::SM)
                .style(styles::button::arrow)
        };

        let stage = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(arrow(icons::chevron_left(), Direction::Previous))
            .push(slide)
            .push(arrow(icons::chevron_right(), Direction::Next));

        let counter = ctx.i18n.tr_with_args(
            "video-slide-counter",
            &[
                ("current", &(rotation.current_index() + 1).to_string()),
                ("total", &rotation.len().to_string()),
            ],
        );

        let column = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(sections::heading(
                ctx.i18n
                    .tr_with_args("videos-title", &[("name", ctx.short_name)]),
                typography::TITLE_LG,
            ))
            .push(stage)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(alignment::Vertical::Center)
                    .push(dots(rotation.len(), rotation.current_index(), Message::Select))
                    .push(Space::new().width(spacing::XS))
                    .push(
                        Text::new(counter)
                            .size(typography::CAPTION)
                            .color(colors.text_muted),
                    ),
            );

        sections::band(Section::Videos, ctx.layout, column)
            .padding([spacing::XXL, 0.0])
            .into()
    }
}

/// Play glyph and title of one video, shifted and faded by `pose`.
fn slide_layer<'a>(video: &'a VideoDescriptor, pose: Pose, color: Color) -> Element<'a, Message> {
    let faded = Color {
        a: color.a * pose.opacity,
        ..color
    };
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(icons::sized(icons::play(), sizing::ICON_LG * 2.0, faded))
            .push(
                Text::new(video.title.as_str())
                    .size(typography::TITLE_MD)
                    .font(sections::semibold())
                    .color(faded)
                    .align_x(alignment::Horizontal::Center),
            ),
    )
    .center_x(Length::Fill)
    .padding(iced::Padding {
        top: (TRAVEL + pose.offset_y).max(0.0),
        bottom: (TRAVEL - pose.offset_y).max(0.0),
        ..iced::Padding::ZERO
    })
    .into()
}

/// Dot selector shared by the slideshow and testimonial block.
pub(crate) fn dots<'a, Message: Clone + 'a>(
    count: usize,
    selected: usize,
    on_select: fn(usize) -> Message,
) -> Element<'a, Message> {
    (0..count)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Space::new().width(sizing::DOT_SIZE).height(sizing::DOT_SIZE))
                    .on_press(on_select(index))
                    .padding(0)
                    .style(styles::button::dot(index == selected)),
            )
        })
        .into()
}
