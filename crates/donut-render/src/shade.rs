// SPDX-License-Identifier: MIT
//
// Glyph shading — the brightness ramp and its intensity bands.
//
// Twelve glyphs ordered by visual density carry all of the renderer's
// shading: the rasterizer picks one per visible surface point from a
// signed brightness score, and the compositor later groups them into
// three bands to assign palette colors. Color is a pure function of the
// final glyph — the raw brightness score is gone by composition time.

// ─── Ramp ───────────────────────────────────────────────────────────────────

/// The shading ramp, sparsest to densest.
pub const RAMP: [u8; 12] = *b".,-~:;=!*#$@";

/// Select the ramp glyph for a signed brightness score.
///
/// Scores at or below zero collapse to the sparsest glyph; scores at or
/// beyond the end of the ramp saturate at the densest. No score can
/// index out of range.
///
/// # Examples
///
/// ```
/// use donut_render::shade::glyph_for;
///
/// assert_eq!(glyph_for(-3), b'.');
/// assert_eq!(glyph_for(5), b';');
/// assert_eq!(glyph_for(99), b'@');
/// ```
#[inline]
#[must_use]
pub fn glyph_for(brightness: i32) -> u8 {
    #[allow(clippy::cast_sign_loss)] // clamp() pins the value to 0..=11.
    let idx = brightness.clamp(0, (RAMP.len() - 1) as i32) as usize;
    RAMP[idx]
}

// ─── Intensity bands ────────────────────────────────────────────────────────

/// One of the three intensity groups a shading glyph belongs to.
///
/// The compositor colors every glyph of a band identically, so the band
/// partition — not the full 12-step ramp — decides the palette level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// `.` `,` `-` — the dim, steeply-angled surface.
    Low,
    /// `~` `:` `;` `=` — the bulk of the lit surface.
    Mid,
    /// `!` `*` `#` `$` `@` — the highlight facing the light.
    High,
}

impl Band {
    /// Classify a glyph, or `None` for anything outside the ramp
    /// (notably the blank glyph, which gets no color at all).
    #[must_use]
    pub const fn of(glyph: u8) -> Option<Self> {
        match glyph {
            b'.' | b',' | b'-' => Some(Self::Low),
            b'~' | b':' | b';' | b'=' => Some(Self::Mid),
            b'!' | b'*' | b'#' | b'$' | b'@' => Some(Self::High),
            _ => None,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Ramp lookup ────────────────────────────────────────────────────

    #[test]
    fn zero_selects_sparsest() {
        assert_eq!(glyph_for(0), b'.');
    }

    #[test]
    fn negative_clamps_to_sparsest() {
        assert_eq!(glyph_for(-1), b'.');
        assert_eq!(glyph_for(i32::MIN), b'.');
    }

    #[test]
    fn max_index_selects_densest() {
        assert_eq!(glyph_for(11), b'@');
    }

    #[test]
    fn beyond_ramp_clamps_to_densest() {
        assert_eq!(glyph_for(12), b'@');
        assert_eq!(glyph_for(i32::MAX), b'@');
    }

    #[test]
    fn interior_scores_map_in_order() {
        for (i, &glyph) in RAMP.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)] // i <= 11.
            let score = i as i32;
            assert_eq!(glyph_for(score), glyph);
        }
    }

    // ── Band membership ────────────────────────────────────────────────

    #[test]
    fn every_ramp_glyph_has_a_band() {
        for &glyph in &RAMP {
            assert!(
                Band::of(glyph).is_some(),
                "ramp glyph '{}' is unbanded",
                glyph as char
            );
        }
    }

    #[test]
    fn blank_has_no_band() {
        assert_eq!(Band::of(b' '), None);
    }

    #[test]
    fn unrelated_bytes_have_no_band() {
        assert_eq!(Band::of(b'x'), None);
        assert_eq!(Band::of(b'\n'), None);
        assert_eq!(Band::of(0), None);
    }

    #[test]
    fn bands_partition_the_ramp_in_order() {
        // The ramp's density ordering and the band ordering agree:
        // three Low, then four Mid, then five High.
        let bands: Vec<Band> = RAMP.iter().map(|&g| Band::of(g).unwrap()).collect();
        assert_eq!(&bands[..3], &[Band::Low; 3]);
        assert_eq!(&bands[3..7], &[Band::Mid; 4]);
        assert_eq!(&bands[7..], &[Band::High; 5]);
    }
}
