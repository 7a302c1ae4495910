// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the project SVG at startup into the RGBA buffer the window
//! title bar expects. Any failure yields `None` and the window simply runs
//! without an icon.

use iced::window::{icon, Icon};
use resvg::usvg;

// Embedded so packaging does not need to locate assets on disk.
const SVG_SOURCE: &str = include_str!("../assets/branding/smartcalc.svg");

/// Icon edge length in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG mark to a square RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_icon_renders() {
        assert!(load_window_icon().is_some());
    }
}
