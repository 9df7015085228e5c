//! Visual themes passed explicitly to the renderer.

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    #[must_use]
    pub const fn hex(v: u32) -> Self {
        Self(((v >> 16) & 0xff) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8)
    }
}

/// Which of the two built-in looks a theme was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    /// Dark grey figure with white text, the default.
    Dark,
    /// The plotting library's stock light look.
    Light,
}

/// Categorical cycle used for successive year lines.
pub const LINE_CYCLE: [Rgb; 10] = [
    Rgb::hex(0x1f77b4),
    Rgb::hex(0xff7f0e),
    Rgb::hex(0x2ca02c),
    Rgb::hex(0xd62728),
    Rgb::hex(0x9467bd),
    Rgb::hex(0x8c564b),
    Rgb::hex(0xe377c2),
    Rgb::hex(0x7f7f7f),
    Rgb::hex(0xbcbd22),
    Rgb::hex(0x17becf),
];

/// Colors and figure size for one rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Origin of this theme.
    pub kind: ThemeKind,
    /// Background of the whole image.
    pub figure_bg: Rgb,
    /// Background of the plotting area.
    pub axes_bg: Rgb,
    /// Axis lines and legend border.
    pub edge: Rgb,
    /// Title, axis descriptions, tick labels and legend text.
    pub text: Rgb,
    /// Grid lines.
    pub grid: Rgb,
    /// Image size in pixels (figure inches at 100 dpi).
    pub size_px: (u32, u32),
}

impl Theme {
    /// Dark grey look: `#2d2d2d` backgrounds, white text and edges, gray grid, 14x7 in.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            figure_bg: Rgb::hex(0x2d2d2d),
            axes_bg: Rgb::hex(0x2d2d2d),
            edge: Rgb::hex(0xffffff),
            text: Rgb::hex(0xffffff),
            grid: Rgb::hex(0x808080),
            size_px: (1400, 700),
        }
    }

    /// Stock light look: white backgrounds, black text, light grid, 6.4x4.8 in.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            figure_bg: Rgb::hex(0xffffff),
            axes_bg: Rgb::hex(0xffffff),
            edge: Rgb::hex(0x000000),
            text: Rgb::hex(0x000000),
            grid: Rgb::hex(0xb0b0b0),
            size_px: (640, 480),
        }
    }

    /// Map the `--light` flag onto a theme.
    #[must_use]
    pub const fn from_light_flag(light: bool) -> Self {
        if light { Self::light() } else { Self::dark() }
    }

    /// Color of the `idx`-th line; the cycle repeats after ten lines.
    #[must_use]
    pub const fn line_color(&self, idx: usize) -> Rgb {
        LINE_CYCLE[idx % LINE_CYCLE.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
