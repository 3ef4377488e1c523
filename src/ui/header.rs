// SPDX-License-Identifier: MPL-2.0
//! Page header: speaker name, navigation and the compact full-screen menu.
//!
//! Windows at least [`COMPACT_LAYOUT_BREAKPOINT`] wide get inline links; narrower
//! windows get a menu button that opens a full-screen menu. Choosing any
//! entry closes the menu and asks the app to scroll to the anchor.

use crate::config::COMPACT_LAYOUT_BREAKPOINT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sections::{self, Anchor};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub speaker_name: &'a str,
    /// Name used in the "Book ..." label.
    pub short_name: &'a str,
    pub window_width: f32,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
}

impl ViewContext<'_> {
    fn book_label(&self) -> String {
        self.i18n
            .tr_with_args("nav-book", &[("name", self.short_name)])
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Anchor),
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Anchor),
    CycleTheme,
}

#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < COMPACT_LAYOUT_BREAKPOINT
}

pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            tracing::debug!(open = *menu_open, "compact menu toggled");
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(anchor) => {
            *menu_open = false;
            Event::Navigate(anchor)
        }
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// The header bar. The compact menu itself is drawn by [`menu_view`].
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(&ctx.theme);

    let brand = button(
        Text::new(ctx.speaker_name.to_string())
            .size(typography::TITLE_SM)
            .font(sections::semibold()),
    )
    .on_press(Message::Navigate(Anchor::Top))
    .padding(0)
    .style(styles::button::link);

    let mut bar = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if is_compact(ctx.window_width) {
        let icon = if ctx.menu_open {
            icons::cross()
        } else {
            icons::menu()
        };
        bar = bar.push(theme_button(ctx, colors.text_primary)).push(
            button(icons::sized(icon, sizing::ICON_LG, colors.text_primary))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XXS)
                .style(styles::button::link),
        );
    } else {
        for (key, anchor) in [
            ("nav-about", Anchor::About),
            ("nav-keynotes", Anchor::Keynotes),
            ("nav-community", Anchor::Community),
        ] {
            bar = bar.push(nav_link(ctx.i18n.tr(key), anchor, typography::BODY));
        }
        bar = bar
            .push(
                button(Text::new(ctx.book_label()).font(sections::semibold()))
                    .on_press(Message::Navigate(Anchor::Book))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::outlined),
            )
            .push(theme_button(ctx, colors.text_primary));
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::header)
        .into()
}

/// Full-screen compact menu, or `None` when it should not be shown.
pub fn menu_view<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.menu_open || !is_compact(ctx.window_width) {
        return None;
    }
    let colors = ColorScheme::for_theme(&ctx.theme);

    let top_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            button(
                Text::new(ctx.speaker_name.to_string())
                    .size(typography::TITLE_SM)
                    .font(sections::semibold()),
            )
            .on_press(Message::Navigate(Anchor::Top))
            .padding(0)
            .style(styles::button::link),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(icons::sized(icons::cross(), sizing::ICON_LG, colors.text_primary))
                .on_press(Message::CloseMenu)
                .padding(spacing::XXS)
                .style(styles::button::link),
        );

    let links = [
        ("nav-about", Anchor::About),
        ("nav-keynotes", Anchor::Keynotes),
        ("nav-community", Anchor::Community),
        ("nav-learn", Anchor::Learn),
    ]
    .into_iter()
    .fold(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center),
        |column, (key, anchor)| column.push(nav_link(ctx.i18n.tr(key), anchor, typography::MENU)),
    );

    let book = button(
        Text::new(ctx.book_label())
            .size(typography::BODY_LG)
            .font(sections::semibold())
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::Navigate(Anchor::Book))
    .width(Length::Fixed(320.0))
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::outlined);

    let layout = Column::new()
        .push(top_row)
        .push(
            Container::new(links)
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
        )
        .push(Container::new(book).center_x(Length::Fill))
        .padding(spacing::XL);

    Some(
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::menu_overlay)
            .into(),
    )
}

fn nav_link<'a>(label: String, anchor: Anchor, size: f32) -> Element<'a, Message> {
    button(Text::new(label).size(size))
        .on_press(Message::Navigate(anchor))
        .padding([spacing::XXS, 0.0])
        .style(styles::button::link)
        .into()
}

fn theme_button<'a>(ctx: &ViewContext<'a>, color: iced::Color) -> Element<'a, Message> {
    let icon = match ctx.theme_mode {
        ThemeMode::Light => icons::sun(),
        ThemeMode::Dark => icons::moon(),
        ThemeMode::System => icons::monitor(),
    };
    iced::widget::tooltip(
        button(icons::sized(icon, sizing::ICON_MD, color))
            .on_press(Message::CycleTheme)
            .padding(spacing::XXS)
            .style(styles::button::link),
        Text::new(ctx.i18n.tr(ctx.theme_mode.i18n_key())).size(typography::CAPTION),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}
