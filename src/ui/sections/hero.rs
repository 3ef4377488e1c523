// SPDX-License-Identifier: MPL-2.0
//! Hero block: headline, tagline, booking and clip links, portrait.

use super::{band, heading, semibold, Anchor, Message, PageLayout, Section};
use crate::content::{Hero, ImageRef};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hero: &'a Hero,
    pub short_name: &'a str,
    pub portrait: Option<&'a ImageRef>,
    /// Compact layouts drop the portrait.
    pub layout: PageLayout,
    pub theme: Theme,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(&ctx.theme);

    let actions = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            button(
                Text::new(ctx.i18n.tr_with_args("nav-book", &[("name", ctx.short_name)]))
                    .font(semibold()),
            )
            .on_press(Message::Navigate(Anchor::Book))
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary),
        )
        .push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::play(), sizing::ICON_SM, colors.text_primary))
                    .push(Text::new(ctx.i18n.tr("hero-watch-clip"))),
            )
            .on_press(Message::Navigate(Anchor::Clip))
            .padding([spacing::SM, spacing::MD])
            .style(styles::button::link),
        );

    let copy = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(3))
        .push(heading(ctx.hero.headline.as_str(), typography::DISPLAY))
        .push(
            Text::new(ctx.hero.tagline.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        )
        .push(actions);

    let mut row = Row::new()
        .spacing(spacing::XXL)
        .align_y(alignment::Vertical::Center)
        .push(copy);

    if !ctx.layout.compact {
        if let Some(portrait) = ctx.portrait.filter(|portrait| portrait.available) {
            row = row.push(
                Container::new(
                    image(portrait.path.clone())
                        .height(Length::Fixed(Section::Hero.height(ctx.layout) - spacing::XXXL))
                        .content_fit(ContentFit::Contain),
                )
                .width(Length::FillPortion(2))
                .align_x(alignment::Horizontal::Right),
            );
        }
    }

    band(
        Section::Hero,
        ctx.layout,
        Container::new(row).center_y(Length::Fill),
    )
        .padding([spacing::XXL, 0.0])
        .style(styles::container::hero)
        .into()
}
