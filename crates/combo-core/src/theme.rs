// File: crates/combo-core/src/theme.rs
// Summary: Light/Dark theming: background and the series palette.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Colors handed out to series in order, wrapping around.
    pub palette: [Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            palette: [
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 255, 230, 70),
                Color::from_argb(255, 180, 120, 255),
                Color::from_argb(255, 96, 156, 255),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            palette: [
                Color::from_argb(255, 32, 120, 200),
                Color::from_argb(255, 20, 160, 90),
                Color::from_argb(255, 200, 60, 60),
                Color::from_argb(255, 200, 150, 20),
                Color::from_argb(255, 120, 70, 200),
                Color::from_argb(255, 40, 120, 200),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            palette: [
                Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
                Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
                Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
            ],
        }
    }

    /// Palette color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
