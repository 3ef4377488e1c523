// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized from the embedded podium SVG at startup.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/podium.svg");

/// Edge length of the rasterized icon in pixels.
pub const ICON_SIZE: u32 = 128;

/// Renders the SVG into a square RGBA buffer of `size` pixels.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// Returns `None` (and the platform default icon is used) if rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let Some(rgba) = rasterize(ICON_SIZE) else {
        tracing::warn!("window icon could not be rendered");
        return None;
    };
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_rgba_buffer() {
        let rgba = rasterize(ICON_SIZE).expect("embedded svg renders");
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(rgba.iter().any(|&channel| channel != 0));
    }
}
