// SPDX-License-Identifier: MPL-2.0
//! Line icons, embedded as SVG and tinted at render time.
//!
//! Handles are parsed once and cached with `OnceLock`. Icons use generic
//! visual names (`chevron_left`, not `previous_video`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps 24x24 path data in a stroked SVG document.
fn document(body: &str) -> Vec<u8> {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"none\" \
         stroke=\"black\" stroke-width=\"2\" stroke-linecap=\"round\" \
         stroke-linejoin=\"round\">{body}</svg>"
    )
    .into_bytes()
}

macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory(document($body)))
                .clone()
        }
    };
}

define_icon!(
    mail,
    "<rect x=\"2\" y=\"4\" width=\"20\" height=\"16\" rx=\"2\"/><path d=\"m22 7-10 6L2 7\"/>",
    "Envelope."
);
define_icon!(
    play,
    "<polygon points=\"6 3 20 12 6 21 6 3\"/>",
    "Triangle pointing right."
);
define_icon!(
    menu,
    "<line x1=\"4\" x2=\"20\" y1=\"6\" y2=\"6\"/><line x1=\"4\" x2=\"20\" y1=\"12\" y2=\"12\"/><line x1=\"4\" x2=\"20\" y1=\"18\" y2=\"18\"/>",
    "Three horizontal bars."
);
define_icon!(
    cross,
    "<path d=\"M18 6 6 18\"/><path d=\"m6 6 12 12\"/>",
    "Diagonal cross."
);
define_icon!(
    chevron_left,
    "<path d=\"m15 18-6-6 6-6\"/>",
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    "<path d=\"m9 18 6-6-6-6\"/>",
    "Chevron pointing right."
);
define_icon!(
    sun,
    "<circle cx=\"12\" cy=\"12\" r=\"4\"/><path d=\"M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M6.3 17.7l-1.4 1.4M19.1 4.9l-1.4 1.4\"/>",
    "Sun with rays."
);
define_icon!(
    moon,
    "<path d=\"M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z\"/>",
    "Crescent moon."
);
define_icon!(
    monitor,
    "<rect x=\"2\" y=\"3\" width=\"20\" height=\"14\" rx=\"2\"/><path d=\"M8 21h8M12 17v4\"/>",
    "Screen on a stand."
);
define_icon!(
    checkmark,
    "<path d=\"M20 6 9 17l-5-5\"/>",
    "Check mark."
);
define_icon!(
    warning,
    "<path d=\"m21.7 18-8-14a2 2 0 0 0-3.4 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.7-3Z\"/><path d=\"M12 9v4M12 17h.01\"/>",
    "Triangle with exclamation mark."
);
define_icon!(
    info,
    "<circle cx=\"12\" cy=\"12\" r=\"10\"/><path d=\"M12 16v-4M12 8h.01\"/>",
    "Circled letter i."
);
define_icon!(
    image,
    "<rect x=\"3\" y=\"3\" width=\"18\" height=\"18\" rx=\"2\"/><circle cx=\"9\" cy=\"9\" r=\"2\"/><path d=\"m21 15-3-3a2 2 0 0 0-3 0l-9 9\"/>",
    "Framed landscape, used for missing photos."
);

/// An icon of `size` pixels tinted with `color`.
pub fn sized<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
