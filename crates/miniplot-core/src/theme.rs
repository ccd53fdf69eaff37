// File: crates/miniplot-core/src/theme.rs
// Summary: Color themes; maps scene roles to Skia colors.

use skia_safe as skia;

use crate::geometry::Role;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub series: skia::Color,
    pub series_fill: skia::Color,
    pub marker: skia::Color,
}

impl Theme {
    /// White canvas with the blue series color of the original desktop viewer.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 0, 0, 0),
            series: skia::Color::from_argb(255, 51, 153, 230),
            series_fill: skia::Color::from_argb(77, 51, 153, 230),
            marker: skia::Color::from_argb(255, 51, 153, 230),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            series: skia::Color::from_argb(255, 64, 160, 255),
            series_fill: skia::Color::from_argb(96, 64, 160, 255),
            marker: skia::Color::from_argb(255, 96, 156, 255),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            title: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),      // base3
            series: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),     // blue
            series_fill: skia::Color::from_argb(96, 0x26, 0x8b, 0xd2),
            marker: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),     // cyan
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            title: skia::Color::from_argb(255, 0x07, 0x36, 0x42),      // base02
            series: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            series_fill: skia::Color::from_argb(80, 0x26, 0x8b, 0xd2),
            marker: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            series: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            series_fill: skia::Color::from_argb(120, 0x00, 0xaa, 0xff),
            marker: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
        }
    }

    pub fn color(&self, role: Role) -> skia::Color {
        match role {
            Role::Grid => self.grid,
            Role::Axis => self.axis_line,
            Role::Tick => self.tick,
            Role::Label => self.axis_label,
            Role::Title => self.title,
            Role::Series => self.series,
            Role::SeriesFill => self.series_fill,
            Role::Marker => self.marker,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}
