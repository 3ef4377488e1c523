// SPDX-License-Identifier: MPL-2.0
//! About block with the podcast episode link.

use super::{band, heading, Message, PageLayout, Section};
use crate::content::About;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, font, Element, Font, Theme};

pub fn view<'a>(
    about: &'a About,
    i18n: &I18n,
    layout: PageLayout,
    theme: &Theme,
) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);

    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(heading(about.heading.as_str(), typography::TITLE_LG));

    for paragraph in &about.paragraphs {
        column = column.push(
            Text::new(paragraph.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        );
    }

    if let Some(quote) = &about.quote {
        column = column.push(
            Text::new(quote.as_str())
                .size(typography::BODY)
                .font(Font {
                    style: font::Style::Italic,
                    ..Font::DEFAULT
                })
                .color(colors.text_muted),
        );
    }

    if let Some(video) = &about.video {
        column = column.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::play(), sizing::ICON_SM, colors.accent_text))
                    .push(Text::new(i18n.tr("about-watch-episode"))),
            )
            .on_press(Message::OpenLink(video.watch_url()))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary),
        );
    }

    band(Section::About, layout, column)
        .padding([spacing::XXL, 0.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn renders_embedded_copy() {
        let content = SiteContent::embedded().unwrap();
        let i18n = I18n::default();
        let _wide = view(&content.about, &i18n, PageLayout::new(false, 3), &Theme::Dark);
        let _compact = view(&content.about, &i18n, PageLayout::new(true, 3), &Theme::Dark);
    }
}
