// SPDX-License-Identifier: MPL-2.0
//! "As seen at" strip of partner logos.

use super::{band, Message, PageLayout, Section};
use crate::content::ImageRef;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(logos: &'a [ImageRef], layout: PageLayout) -> Element<'a, Message> {
    let strip = logos
        .iter()
        .fold(
            Row::new()
                .spacing(spacing::XXL)
                .align_y(alignment::Vertical::Center),
            |row, logo| row.push(logo_slot(logo)),
        );

    band(Section::Logos, layout, strip)
        .center_y(Length::Fixed(Section::Logos.height(layout)))
        .into()
}

fn logo_slot<'a>(logo: &'a ImageRef) -> Element<'a, Message> {
    let inner: Element<'a, Message> = if logo.available {
        image(logo.path.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .opacity(opacity::LOGO_IDLE)
            .into()
    } else {
        Container::new(Text::new(logo.name.as_str()).size(typography::CAPTION))
            .center(Length::Fill)
            .style(styles::container::fading_card(opacity::LOGO_IDLE))
            .into()
    };

    Container::new(inner)
        .width(Length::Fixed(sizing::LOGO_WIDTH))
        .height(Length::Fixed(sizing::LOGO_HEIGHT))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_missing_logos_as_placeholders() {
        let logos = vec![ImageRef {
            name: "jacob_logo1.png".to_string(),
            path: PathBuf::from("/missing/jacob_logo1.png"),
            available: false,
        }];
        let _element = view(&logos, PageLayout::default());
    }
}
