// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits above a single scrollable page, with a thin bar along
//! its bottom edge tracking how far the page is scrolled. The compact menu
//! and toasts are stacked over both.

use super::update::PAGE_SCROLLABLE;
use super::{App, Message};
use crate::ui::carousel::{gallery, video_slideshow};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::notifications::Toast;
use crate::ui::design_tokens::sizing;
use crate::ui::sections::{about, cta, footer, hero, keynotes, logos};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Id, Scrollable, Space, Stack};
use iced::{Element, Length};

/// Renders the whole page.
pub fn view(app: &App) -> Element<'_, Message> {
    let theme = app.theme();
    let layout = app.page_layout();
    let speaker = &app.content.speaker;

    let header_ctx = HeaderViewContext {
        i18n: &app.i18n,
        speaker_name: &speaker.name,
        short_name: speaker.short_name(),
        window_width: app.window_width,
        menu_open: app.menu_open,
        theme_mode: app.theme_mode,
        theme: theme.clone(),
    };

    let mut page = Column::new()
        .push(
            hero::view(hero::ViewContext {
                i18n: &app.i18n,
                hero: &app.content.hero,
                short_name: speaker.short_name(),
                portrait: app.images.portrait.as_ref(),
                layout,
                theme: theme.clone(),
            })
            .map(Message::Section),
        )
        .push(logos::view(&app.images.logos, layout).map(Message::Section))
        .push(about::view(&app.content.about, &app.i18n, layout, &theme).map(Message::Section))
        .push(
            keynotes::view(&app.content.keynotes, &app.i18n, layout, &theme)
                .map(Message::Section),
        );

    if let Some(videos) = &app.carousels.videos {
        page = page.push(
            videos
                .view(video_slideshow::ViewContext {
                    i18n: &app.i18n,
                    short_name: speaker.short_name(),
                    layout,
                    theme: theme.clone(),
                })
                .map(Message::Videos),
        );
    }

    if let Some(gallery) = &app.carousels.gallery {
        page = page.push(gallery.view(gallery::ViewContext {
            title: app.i18n.tr("gallery-title"),
            quote: app.content.community.quote.as_deref(),
            layout,
            theme: theme.clone(),
        }));
    }

    let testimonials = app
        .carousels
        .testimonials
        .as_ref()
        .map(|testimonials| testimonials.view(&theme).map(Message::Testimonials));

    page = page
        .push(cta::view(
            cta::ViewContext {
                i18n: &app.i18n,
                cta: &app.content.cta,
                speaker,
                layout,
                theme: theme.clone(),
            },
            testimonials,
            Message::Section,
        ))
        .push(footer::view(&app.i18n, &speaker.name, layout).map(Message::Section));

    let scroller = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE))
        .direction(scrollable::Direction::Vertical(scrollable::Scrollbar::default()))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let body = Stack::new()
        .push(scroller)
        .push(scroll_progress_bar(app.scroll_progress, app.window_width));

    let column = Column::new()
        .push(header::view(&header_ctx).map(Message::Header))
        .push(body);

    let mut stack = Stack::new().push(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page),
    );
    if let Some(menu) = header::menu_view(&header_ctx) {
        stack = stack.push(menu.map(Message::Header));
    }
    stack = stack
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));

    stack.width(Length::Fill).height(Length::Fill).into()
}

/// Bar pinned under the header whose filled width follows `progress`.
fn scroll_progress_bar<'a>(progress: f32, window_width: f32) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fixed(window_width * progress.clamp(0.0, 1.0)))
        .height(Length::Fixed(sizing::SCROLL_PROGRESS_HEIGHT))
        .style(styles::container::scroll_progress)
        .into()
}
