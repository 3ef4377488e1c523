// SPDX-License-Identifier: MPL-2.0
//! Call-to-action panel hosting the testimonial rotation.
//!
//! The testimonials are rendered by their own carousel; this view only
//! places them, so it takes the already-built element and a mapping for its
//! own messages.

use super::{band, heading, semibold, Message, PageLayout, Section};
use crate::content::{CallToAction, Speaker};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cta: &'a CallToAction,
    pub speaker: &'a Speaker,
    pub layout: PageLayout,
    pub theme: Theme,
}

pub fn view<'a, M: 'a>(
    ctx: ViewContext<'a>,
    testimonials: Option<Element<'a, M>>,
    on_section: fn(Message) -> M,
) -> Element<'a, M> {
    let colors = ColorScheme::for_theme(&ctx.theme);

    let copy: Element<'a, Message> = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading(ctx.cta.heading.as_str(), typography::TITLE_LG))
        .push(
            Text::new(ctx.cta.body.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_secondary)
                .align_x(alignment::Horizontal::Center),
        )
        .into();

    let contact: Element<'a, Message> = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::mail(), sizing::ICON_SM, colors.accent_text))
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("cta-contact", &[("name", ctx.speaker.short_name())]),
                )
                .font(semibold()),
            ),
    )
    .on_press(Message::OpenLink(ctx.speaker.mailto()))
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary)
    .into();

    let mut column = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(copy.map(on_section));
    if let Some(testimonials) = testimonials {
        column = column.push(testimonials);
    }
    column = column.push(contact.map(on_section));

    let panel = Container::new(column)
        .padding(spacing::XXL)
        .width(Length::Fill)
        .style(styles::container::call_to_action);

    band(Section::CallToAction, ctx.layout, panel)
        .center_y(Length::Fixed(Section::CallToAction.height(ctx.layout)))
        .into()
}
