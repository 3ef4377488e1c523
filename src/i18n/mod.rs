// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application chrome.
//!
//! Navigation labels, buttons and notifications are localized with Fluent.
//! Page copy (biography, keynote topics, quotes) comes from the site
//! content manifest instead.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Fallback to `en-US` when no locale matches

pub mod fluent;
