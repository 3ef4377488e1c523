// SPDX-License-Identifier: MPL-2.0
//! Keynote topics as a row of cards (a column on narrow windows).

use super::{band, heading, semibold, Message, PageLayout, Section};
use crate::content::Keynote;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a>(
    keynotes: &'a [Keynote],
    i18n: &I18n,
    layout: PageLayout,
    theme: &Theme,
) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);
    let cards = keynotes.iter().map(|keynote| -> Element<'a, Message> {
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(keynote.title.as_str())
                        .size(typography::TITLE_MD)
                        .font(semibold()),
                )
                .push(
                    Text::new(keynote.description.as_str())
                        .size(typography::BODY)
                        .color(colors.text_secondary),
                ),
        )
        .width(Length::Fill)
        .max_width(sizing::KEYNOTE_CARD_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
    });

    let cards: Element<'a, Message> = if layout.compact {
        Column::with_children(cards).spacing(spacing::MD).into()
    } else {
        Row::with_children(cards).spacing(spacing::LG).into()
    };

    let column = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(heading(i18n.tr("keynotes-title"), typography::TITLE_LG))
        .push(cards);

    let panel = Container::new(column)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .style(styles::container::muted_panel);

    band(Section::Keynotes, layout, panel)
        .center_y(Length::Fixed(Section::Keynotes.height(layout)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn renders_in_both_layouts() {
        let content = SiteContent::embedded().unwrap();
        let i18n = I18n::default();
        let count = content.keynotes.len();
        let _wide = view(&content.keynotes, &i18n, PageLayout::new(false, count), &Theme::Light);
        let _narrow = view(&content.keynotes, &i18n, PageLayout::new(true, count), &Theme::Light);
    }
}
