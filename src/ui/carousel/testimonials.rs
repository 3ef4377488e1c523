// SPDX-License-Identifier: MPL-2.0
//! Testimonial quotes inside the call-to-action, advancing on a timer.
//!
//! Dots jump to a quote. Jumping does not restart or pause the timer.

use super::video_slideshow::dots;
use super::transition::{Pose, TRAVEL};
use super::Carousel;
use crate::error::RotationError;
use crate::rotation::{RotationSpec, TickInterval};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(usize),
}

#[derive(Debug)]
pub struct Testimonials {
    carousel: Carousel<String>,
}

impl Testimonials {
    pub fn mount(
        quotes: Vec<String>,
        interval: TickInterval,
        reduce_motion: bool,
        now: Instant,
    ) -> Result<Self, RotationError> {
        Ok(Self {
            carousel: Carousel::mount(quotes, RotationSpec::single(interval), reduce_motion, now)?,
        })
    }

    #[must_use]
    pub fn state(&self) -> &Carousel<String> {
        &self.carousel
    }

    pub fn state_mut(&mut self) -> &mut Carousel<String> {
        &mut self.carousel
    }

    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::Select(index) => {
                let index = isize::try_from(index).unwrap_or(isize::MAX);
                self.carousel.go_to(index, now);
            }
        }
    }

    /// Draws the current quote; during a change the previous quote fades
    /// out underneath it.
    pub fn view<'a>(&'a self, theme: &Theme) -> Element<'a, Message> {
        let colors = ColorScheme::for_theme(theme);
        let rotation = self.carousel.rotation();

        let stage = self
            .carousel
            .layers()
            .into_iter()
            .fold(Stack::new(), |stage, (position, pose)| {
                stage.push(quote_layer(&rotation.items()[position], pose, colors.text_secondary))
            });

        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Container::new(stage)
                    .width(Length::Fill)
                    .height(Length::Fixed(QUOTE_HEIGHT + 2.0 * TRAVEL)),
            )
            .push(dots(rotation.len(), rotation.current_index(), Message::Select))
            .into()
    }
}

const QUOTE_HEIGHT: f32 = typography::BODY_LG * 5.0;

fn quote_layer<'a>(quote: &'a str, pose: Pose, color: Color) -> Element<'a, Message> {
    let text = Text::new(format!("\u{201C}{quote}\u{201D}"))
        .size(typography::BODY_LG)
        .font(Font {
            style: font::Style::Italic,
            ..Font::DEFAULT
        })
        .color(Color {
            a: color.a * pose.opacity,
            ..color
        })
        .align_x(alignment::Horizontal::Center);

    Container::new(text)
        .center_x(Length::Fill)
        .height(Length::Fixed(QUOTE_HEIGHT + 2.0 * TRAVEL))
        .padding(iced::Padding {
            top: (TRAVEL + pose.offset_y).max(0.0),
            ..iced::Padding::ZERO
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Schedule;

    fn quotes() -> Vec<String> {
        ["First", "Second", "Third"].map(String::from).to_vec()
    }

    #[test]
    fn ticks_cycle_through_all_quotes() {
        let now = Instant::now();
        let mut testimonials =
            Testimonials::mount(quotes(), TickInterval::from_millis(7000), false, now).unwrap();
        let mut seen = vec![testimonials.state().rotation().current_index()];
        for _ in 0..3 {
            testimonials.state_mut().tick(now);
            seen.push(testimonials.state().rotation().current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn selecting_a_dot_keeps_the_timer() {
        let now = Instant::now();
        let mut testimonials =
            Testimonials::mount(quotes(), TickInterval::from_millis(7000), false, now).unwrap();
        testimonials.update(Message::Select(2), now);
        assert_eq!(testimonials.state().rotation().current(), "Third");
        assert_eq!(
            testimonials.state().schedule(),
            Schedule::Every(TickInterval::from_millis(7000))
        );
    }

    #[test]
    fn view_renders() {
        let testimonials =
            Testimonials::mount(quotes(), TickInterval::from_millis(7000), false, Instant::now())
                .unwrap();
        let _element = testimonials.view(&Theme::Dark);
    }

    #[test]
    fn changing_quote_draws_both_quotes_until_the_fade_ends() {
        let start = Instant::now();
        let mut testimonials =
            Testimonials::mount(quotes(), TickInterval::from_millis(7000), false, start).unwrap();
        testimonials.state_mut().tick(start);
        testimonials
            .state_mut()
            .frame(start + std::time::Duration::from_millis(100));

        let drawn: Vec<&str> = testimonials
            .state()
            .layers()
            .into_iter()
            .map(|(position, _)| testimonials.state().rotation().items()[position].as_str())
            .collect();
        assert_eq!(drawn, vec!["First", "Second"]);
        let _element = testimonials.view(&Theme::Light);
    }
}
