//! Palette type and named lookup.
//!
//! Seven fixed palettes, each a dark/medium/highlight triple of the same
//! hue. The values are deliberately conservative: the dark level stays
//! readable on both black and white terminal backgrounds, and the
//! highlight level caps at full channel intensity without tint drift.

use donut_term::color::Rgb;

// ─── Palette ────────────────────────────────────────────────────────────────

/// An ordered triple of colors, one per intensity band.
///
/// The compositor maps each shading glyph to one of three bands and
/// colors it with the matching level. Selection happens once at startup;
/// after that the palette is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Low intensity — the torus's dim, steeply-angled surface.
    pub low: Rgb,
    /// Medium intensity — the bulk of the visible surface.
    pub mid: Rgb,
    /// High intensity — the highlight facing the light source.
    pub high: Rgb,
}

impl Palette {
    /// The default palette. Green, as the original tradition demands.
    pub const GREEN: Self = Self {
        low: Rgb::new(0, 100, 0),
        mid: Rgb::new(0, 180, 0),
        high: Rgb::new(100, 255, 100),
    };

    pub const RED: Self = Self {
        low: Rgb::new(100, 0, 0),
        mid: Rgb::new(180, 0, 0),
        high: Rgb::new(255, 100, 100),
    };

    pub const BLUE: Self = Self {
        low: Rgb::new(0, 0, 100),
        mid: Rgb::new(0, 0, 180),
        high: Rgb::new(100, 100, 255),
    };

    pub const CYAN: Self = Self {
        low: Rgb::new(0, 100, 100),
        mid: Rgb::new(0, 180, 180),
        high: Rgb::new(100, 255, 255),
    };

    pub const MAGENTA: Self = Self {
        low: Rgb::new(100, 0, 100),
        mid: Rgb::new(180, 0, 180),
        high: Rgb::new(255, 100, 255),
    };

    pub const YELLOW: Self = Self {
        low: Rgb::new(100, 100, 0),
        mid: Rgb::new(180, 180, 0),
        high: Rgb::new(255, 255, 100),
    };

    /// White renders as a grayscale ramp rather than three whites.
    pub const WHITE: Self = Self {
        low: Rgb::new(100, 100, 100),
        mid: Rgb::new(180, 180, 180),
        high: Rgb::new(255, 255, 255),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::GREEN
    }
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

/// Look up a palette by name.
///
/// English and German names are synonyms and yield identical palettes.
/// Returns `None` if the name is not recognized — the caller chooses the
/// fallback (the CLI warns and uses green).
#[must_use]
pub fn named(name: &str) -> Option<Palette> {
    Some(match name {
        "green" | "gruen" => Palette::GREEN,
        "red" | "rot" => Palette::RED,
        "blue" | "blau" => Palette::BLUE,
        "cyan" => Palette::CYAN,
        "magenta" => Palette::MAGENTA,
        "yellow" | "gelb" => Palette::YELLOW,
        "white" | "weiss" => Palette::WHITE,
        _ => return None,
    })
}

/// The canonical (English) palette names, for help text and warnings.
#[must_use]
pub const fn names() -> &'static [&'static str] {
    &["green", "red", "blue", "cyan", "magenta", "yellow", "white"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
