// SPDX-License-Identifier: MPL-2.0
//! `podium` is a single-page speaker showcase built with the Iced GUI
//! framework.
//!
//! The page is static apart from three rotating displays: a community
//! gallery showing three photos at a time, a manually driven video
//! slideshow and a testimonial block. All three share the [`rotation`]
//! primitive; [`ui::carousel`] adds mounting, timers and animation.

pub mod app;
pub use app::config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod rotation;
pub mod ui;
