// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes the page following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Page
//!
//! - [`header`] - Speaker name, navigation links and the compact menu
//! - [`sections`] - Static page sections and the anchor layout
//! - [`carousel`] - Gallery, video slideshow and testimonial rotations
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and page colors
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod carousel;
pub mod design_tokens;
pub mod header;
pub mod icons;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
