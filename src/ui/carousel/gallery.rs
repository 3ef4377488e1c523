// SPDX-License-Identifier: MPL-2.0
//! Community gallery: three photos at a time, advancing by three.
//!
//! There are no manual controls. When the window moves, the new photos fade
//! and rise into place while the previous ones fade out in the slots they
//! occupied.

use super::transition::{Pose, TRAVEL};
use super::Carousel;
use crate::config::{GALLERY_ADVANCE_STEP, GALLERY_WINDOW_SIZE};
use crate::content::ImageRef;
use crate::error::RotationError;
use crate::rotation::{RotationSpec, TickInterval};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sections::{self, PageLayout, Section};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{image, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};
use std::time::Instant;

#[derive(Debug)]
pub struct Gallery {
    carousel: Carousel<ImageRef>,
}

/// Copy shown above the photos.
pub struct ViewContext<'a> {
    pub title: String,
    pub quote: Option<&'a str>,
    pub layout: PageLayout,
    pub theme: Theme,
}

impl Gallery {
    pub fn mount(
        photos: Vec<ImageRef>,
        interval: TickInterval,
        reduce_motion: bool,
        now: Instant,
    ) -> Result<Self, RotationError> {
        let spec = RotationSpec::windowed(GALLERY_WINDOW_SIZE, GALLERY_ADVANCE_STEP, interval);
        Ok(Self {
            carousel: Carousel::mount(photos, spec, reduce_motion, now)?,
        })
    }

    #[must_use]
    pub fn state(&self) -> &Carousel<ImageRef> {
        &self.carousel
    }

    pub fn state_mut(&mut self) -> &mut Carousel<ImageRef> {
        &mut self.carousel
    }

    pub fn view<'a, Message: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let colors = ColorScheme::for_theme(&ctx.theme);
        let rotation = self.carousel.rotation();

        let current = rotation
            .window_positions()
            .into_iter()
            .zip(rotation.visible_window())
            .fold(Row::new().spacing(spacing::LG), |row, (position, photo)| {
                row.push(photo_slot(photo, self.carousel.pose_of(position)))
            });

        let mut stage = Stack::new().push(current);
        if let Some(transition) = self.carousel.transition() {
            let pose = transition.leaving_pose(self.carousel.clock());
            let leaving = transition.leaving_slots().fold(
                Row::new().spacing(spacing::LG),
                |row, slot| match slot {
                    Some(position) => row.push(photo_slot(&rotation.items()[position], pose)),
                    None => row.push(Space::new().width(Length::Fill)),
                },
            );
            stage = stage.push(leaving);
        }

        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(sections::heading(ctx.title, typography::TITLE_LG));
        if let Some(quote) = ctx.quote {
            column = column.push(
                Text::new(format!("\u{201C}{quote}\u{201D}"))
                    .size(typography::BODY_LG)
                    .color(colors.text_secondary)
                    .align_x(alignment::Horizontal::Center),
            );
        }
        column = column.push(Space::new().height(spacing::LG)).push(stage);

        sections::band(Section::Gallery, ctx.layout, column)
            .padding([spacing::XXL, 0.0])
            .into()
    }
}

/// One card slot. Its height is fixed; the pose shifts the card inside it.
fn photo_slot<'a, Message: 'a>(photo: &'a ImageRef, pose: Pose) -> Element<'a, Message> {
    let card: Element<'a, Message> = if photo.available {
        Container::new(
            image(photo.path.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GALLERY_CARD_HEIGHT))
                .content_fit(ContentFit::Cover)
                .opacity(pose.opacity),
        )
        .clip(true)
        .into()
    } else {
        let alpha = pose.opacity;
        Container::new(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(icons::sized(
                    icons::image(),
                    sizing::ICON_LG,
                    iced::Color {
                        a: alpha,
                        ..crate::ui::design_tokens::palette::STONE_500
                    },
                ))
                .push(Text::new(photo.name.as_str()).size(typography::CAPTION)),
        )
        .center(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_CARD_HEIGHT))
        .style(styles::container::fading_card(alpha))
        .into()
    };

    let top = (TRAVEL + pose.offset_y).max(0.0);
    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_CARD_HEIGHT + 2.0 * TRAVEL))
        .padding(iced::Padding {
            top,
            bottom: 2.0 * TRAVEL - top,
            ..iced::Padding::ZERO
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn photos(count: usize) -> Vec<ImageRef> {
        (1..=count)
            .map(|i| ImageRef {
                name: format!("jacob_gallery{i}.jpeg"),
                path: PathBuf::from(format!("/missing/jacob_gallery{i}.jpeg")),
                available: false,
            })
            .collect()
    }

    fn names(gallery: &Gallery) -> Vec<String> {
        gallery
            .state()
            .rotation()
            .visible_window()
            .map(|photo| photo.name.clone())
            .collect()
    }

    #[test]
    fn shows_three_and_advances_by_three() {
        let start = Instant::now();
        let mut gallery =
            Gallery::mount(photos(11), TickInterval::from_millis(3000), false, start).unwrap();
        assert_eq!(
            names(&gallery),
            vec!["jacob_gallery1.jpeg", "jacob_gallery2.jpeg", "jacob_gallery3.jpeg"]
        );

        gallery.state_mut().tick(start + Duration::from_secs(3));
        assert_eq!(
            names(&gallery),
            vec!["jacob_gallery4.jpeg", "jacob_gallery5.jpeg", "jacob_gallery6.jpeg"]
        );
    }

    #[test]
    fn wraps_without_a_seam() {
        let start = Instant::now();
        let mut gallery =
            Gallery::mount(photos(11), TickInterval::from_millis(3000), true, start).unwrap();
        for _ in 0..4 {
            gallery.state_mut().tick(start);
        }
        assert_eq!(gallery.state().rotation().current_index(), 1);
        assert_eq!(
            names(&gallery),
            vec!["jacob_gallery2.jpeg", "jacob_gallery3.jpeg", "jacob_gallery4.jpeg"]
        );
    }

    #[test]
    fn fewer_than_three_photos_fail_to_mount() {
        let result =
            Gallery::mount(photos(2), TickInterval::from_millis(3000), false, Instant::now());
        assert_eq!(
            result.err(),
            Some(RotationError::WindowSize {
                requested: 3,
                item_count: 2
            })
        );
    }

    #[test]
    fn view_renders_during_a_transition() {
        let start = Instant::now();
        let mut gallery =
            Gallery::mount(photos(11), TickInterval::from_millis(3000), false, start).unwrap();
        gallery.state_mut().tick(start);
        gallery.state_mut().frame(start + Duration::from_millis(200));

        let theme = Theme::Light;
        let _element: Element<'_, ()> = gallery.view(ViewContext {
            title: "Community".to_string(),
            quote: Some("Together"),
            layout: PageLayout::default(),
            theme: theme.clone(),
        });
    }
}
