// SPDX-License-Identifier: MPL-2.0
//! Static page sections and the page layout they share.
//!
//! Every section has a fixed height for a given [`PageLayout`] so anchor
//! offsets are known without measuring widgets: the offset of a section is
//! the sum of the heights of the sections mounted above it. Narrow windows
//! use taller bands for the sections whose content wraps or stacks.

pub mod about;
pub mod cta;
pub mod footer;
pub mod hero;
pub mod keynotes;
pub mod logos;

use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::text::IntoFragment;
use iced::widget::{Container, Text};
use iced::{font, Element, Font, Length};

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Logos,
    About,
    Keynotes,
    Videos,
    Gallery,
    CallToAction,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Logos,
        Section::About,
        Section::Keynotes,
        Section::Videos,
        Section::Gallery,
        Section::CallToAction,
        Section::Footer,
    ];

    /// Height of the section's band in the given layout.
    #[must_use]
    pub fn height(self, layout: PageLayout) -> f32 {
        use sizing::section;
        if layout.compact {
            match self {
                Section::Hero => return section::compact::HERO,
                Section::About => return section::compact::ABOUT,
                Section::Keynotes => return stacked_keynotes_height(layout.keynotes),
                Section::Videos => return section::compact::VIDEOS,
                Section::Gallery => return section::compact::GALLERY,
                Section::CallToAction => return section::compact::CTA,
                Section::Logos | Section::Footer => {}
            }
        }
        match self {
            Section::Hero => section::HERO,
            Section::Logos => section::LOGOS,
            Section::About => section::ABOUT,
            Section::Keynotes => section::KEYNOTES,
            Section::Videos => section::VIDEOS,
            Section::Gallery => section::GALLERY,
            Section::CallToAction => section::CTA,
            Section::Footer => section::FOOTER,
        }
    }
}

/// Inputs that section heights depend on besides the section itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Below the compact breakpoint; multi-column rows stack.
    pub compact: bool,
    /// Number of keynote cards, which stack one per row when compact.
    pub keynotes: usize,
}

impl PageLayout {
    #[must_use]
    pub fn new(compact: bool, keynotes: usize) -> Self {
        Self { compact, keynotes }
    }
}

/// Keynotes band height with `count` cards stacked, never below the wide
/// height.
fn stacked_keynotes_height(count: usize) -> f32 {
    let cards = count as f32;
    let gaps = count.saturating_sub(1) as f32;
    let stacked = sizing::section::compact::KEYNOTES_CHROME
        + cards * sizing::KEYNOTE_CARD_STACKED_HEIGHT
        + gaps * spacing::MD;
    stacked.max(sizing::section::KEYNOTES)
}

/// Interactions raised by the static sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(Anchor),
    OpenLink(String),
}

/// Navigation targets offered by the header and hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    About,
    Keynotes,
    Community,
    /// Compact-menu entry pointing at the video slideshow.
    Learn,
    /// Hero "Watch clip" link.
    Clip,
    Book,
}

impl Anchor {
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Anchor::Top => Section::Hero,
            Anchor::About => Section::About,
            Anchor::Keynotes => Section::Keynotes,
            Anchor::Community => Section::Gallery,
            Anchor::Learn | Anchor::Clip => Section::Videos,
            Anchor::Book => Section::CallToAction,
        }
    }
}

/// Vertical offset of `target` inside the page, or `None` when it is not
/// mounted.
pub fn offset_of(
    target: Section,
    layout: PageLayout,
    is_mounted: impl Fn(Section) -> bool,
) -> Option<f32> {
    if !is_mounted(target) {
        return None;
    }
    Some(
        Section::ALL
            .iter()
            .take_while(|&&section| section != target)
            .filter(|&&section| is_mounted(section))
            .map(|section| section.height(layout))
            .sum(),
    )
}

/// Total height of the mounted sections.
pub fn page_height(layout: PageLayout, is_mounted: impl Fn(Section) -> bool) -> f32 {
    Section::ALL
        .iter()
        .filter(|&&section| is_mounted(section))
        .map(|section| section.height(layout))
        .sum()
}

// =============================================================================
// Shared building blocks
// =============================================================================

pub(crate) fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

pub(crate) fn semibold() -> Font {
    Font {
        weight: font::Weight::Semibold,
        ..Font::DEFAULT
    }
}

pub(crate) fn heading<'a>(content: impl IntoFragment<'a>, size: f32) -> Text<'a> {
    Text::new(content).size(size).font(bold())
}

/// Fixed-height band with the content width capped and centered.
pub(crate) fn band<'a, Message: 'a>(
    section: Section,
    layout: PageLayout,
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(section.height(layout)))
    .center_x(Length::Fill)
}
