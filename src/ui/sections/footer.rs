// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use super::{band, Message, PageLayout, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::Text;
use iced::{Element, Length};

/// Copyright line for the given year.
#[must_use]
pub fn copyright(i18n: &I18n, name: &str, year: i32) -> String {
    i18n.tr_with_args("footer-rights", &[("year", &year.to_string()), ("name", name)])
}

pub fn view<'a>(i18n: &I18n, name: &str, layout: PageLayout) -> Element<'a, Message> {
    let year = chrono::Local::now().year();
    band(
        Section::Footer,
        layout,
        Text::new(copyright(i18n, name, year)).size(typography::CAPTION),
    )
    .center_y(Length::Fixed(Section::Footer.height(layout)))
    .style(styles::container::footer)
    .into()
}
