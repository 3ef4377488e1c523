// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report problems that do not stop the page from rendering: a
//! carousel that could not mount, unreadable settings, a failed content
//! reload or a link the system could not open.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - queueing and expiry
//! - [`toast`] - rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-content-load-error"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
