// SPDX-License-Identifier: MIT
//
// Frame compositor — resolved glyph grid to terminal bytes.
//
// Walks the frame in screen order and emits one printable frame: a
// cursor-home so the frame overwrites its predecessor in place, then 22
// newline-prefixed rows of 80 glyphs. Every shading glyph is wrapped in
// its own color-start and reset so color never bleeds across cells;
// blank cells are bare spaces with no escapes at all.
//
// The compositor writes into whatever `Write` it is handed — in the
// host loop that's an `OutputBuffer`, so the whole frame reaches the
// terminal as a single write after this returns.

use std::io::{self, Write};

use donut_palette::Palette;
use donut_term::ansi;
use donut_term::color::Rgb;

use crate::buffer::Frame;
use crate::shade::Band;

/// The palette level for an intensity band.
#[inline]
const fn level(palette: &Palette, band: Band) -> Rgb {
    match band {
        Band::Low => palette.low,
        Band::Mid => palette.mid,
        Band::High => palette.high,
    }
}

/// Emit one terminal-printable frame for a resolved glyph grid.
///
/// # Errors
///
/// Propagates write errors from `out`. Writing into an in-memory
/// buffer never fails; the host surfaces real stdout failures when it
/// flushes.
pub fn compose(frame: &Frame, palette: &Palette, out: &mut impl Write) -> io::Result<()> {
    ansi::cursor_home(out)?;

    for row in frame.rows() {
        out.write_all(b"\n")?;
        for &glyph in row {
            match Band::of(glyph) {
                Some(band) => {
                    ansi::fg(out, level(palette, band))?;
                    out.write_all(&[glyph])?;
                    ansi::reset(out)?;
                }
                None => out.write_all(&[glyph])?,
            }
        }
    }

    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{HEIGHT, WIDTH};
    use pretty_assertions::assert_eq;

    /// Compose into an in-memory buffer and return the bytes as a string.
    fn composed(frame: &Frame, palette: &Palette) -> String {
        let mut out = Vec::new();
        compose(frame, palette, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ── Blank frames ───────────────────────────────────────────────────

    #[test]
    fn blank_frame_is_uncolored_rows_of_spaces() {
        let frame = Frame::new();
        let mut expected = String::from("\x1b[H");
        for _ in 0..HEIGHT {
            expected.push('\n');
            expected.push_str(&" ".repeat(WIDTH));
        }
        assert_eq!(composed(&frame, &Palette::GREEN), expected);
    }

    #[test]
    fn blank_frame_emits_no_color_codes() {
        let out = composed(&Frame::new(), &Palette::GREEN);
        assert!(!out.contains("\x1b[38"), "color start emitted for blanks");
        assert!(!out.contains("\x1b[0m"), "color reset emitted for blanks");
    }

    // ── Frame structure ────────────────────────────────────────────────

    #[test]
    fn output_starts_with_cursor_home() {
        let out = composed(&Frame::new(), &Palette::GREEN);
        assert!(out.starts_with("\x1b[H"));
    }

    #[test]
    fn every_row_carries_all_columns() {
        let mut frame = Frame::new();
        frame.plot(40, 11, 0.25, b'@');
        let out = composed(&frame, &Palette::GREEN);

        let body = out.strip_prefix("\x1b[H").unwrap();
        let rows: Vec<&str> = body.split('\n').skip(1).collect(); // leading newline
        assert_eq!(rows.len(), HEIGHT);

        for (y, row) in rows.iter().enumerate() {
            let glyphs = row
                .split("\x1b[")
                .enumerate()
                .map(|(i, piece)| {
                    // Pieces after a split start with the escape payload
                    // ("38;2;...m" or "0m"); strip it to count glyphs.
                    if i == 0 {
                        piece.len()
                    } else {
                        piece.splitn(2, 'm').nth(1).map_or(0, str::len)
                    }
                })
                .sum::<usize>();
            assert_eq!(glyphs, WIDTH, "row {y} has {glyphs} glyphs");
        }
    }

    // ── Per-glyph coloring ─────────────────────────────────────────────

    #[test]
    fn high_band_glyph_gets_highlight_color() {
        let mut frame = Frame::new();
        frame.plot(5, 3, 0.25, b'@');
        let out = composed(&frame, &Palette::GREEN);
        assert!(out.contains("\x1b[38;2;100;255;100m@\x1b[0m"));
    }

    #[test]
    fn low_band_glyph_gets_dim_color() {
        let mut frame = Frame::new();
        frame.plot(5, 3, 0.25, b'.');
        let out = composed(&frame, &Palette::GREEN);
        assert!(out.contains("\x1b[38;2;0;100;0m.\x1b[0m"));
    }

    #[test]
    fn mid_band_glyph_gets_mid_color() {
        let mut frame = Frame::new();
        frame.plot(5, 3, 0.25, b'~');
        let out = composed(&frame, &Palette::RED);
        assert!(out.contains("\x1b[38;2;180;0;0m~\x1b[0m"));
    }

    #[test]
    fn adjacent_glyphs_are_colored_individually() {
        let mut frame = Frame::new();
        frame.plot(5, 3, 0.25, b'@');
        frame.plot(6, 3, 0.25, b'@');
        let out = composed(&frame, &Palette::GREEN);

        // Never batched: each glyph carries its own start and reset.
        assert!(out.contains(
            "\x1b[38;2;100;255;100m@\x1b[0m\x1b[38;2;100;255;100m@\x1b[0m"
        ));
    }

    #[test]
    fn color_follows_the_glyph_not_the_depth() {
        // Identical glyphs at different depths color identically.
        let mut frame = Frame::new();
        frame.plot(5, 3, 0.9, b';');
        frame.plot(10, 3, 0.1, b';');
        let out = composed(&frame, &Palette::CYAN);
        assert_eq!(out.matches("\x1b[38;2;0;180;180m;\x1b[0m").count(), 2);
    }

    #[test]
    fn palette_selects_the_emitted_colors() {
        let mut frame = Frame::new();
        frame.plot(5, 3, 0.25, b'@');

        let green = composed(&frame, &Palette::GREEN);
        let white = composed(&frame, &Palette::WHITE);
        assert!(green.contains("\x1b[38;2;100;255;100m"));
        assert!(white.contains("\x1b[38;2;255;255;255m"));
    }

    // ── Band levels ────────────────────────────────────────────────────

    #[test]
    fn level_maps_bands_to_palette_fields() {
        let p = Palette::MAGENTA;
        assert_eq!(level(&p, Band::Low), p.low);
        assert_eq!(level(&p, Band::Mid), p.mid);
        assert_eq!(level(&p, Band::High), p.high);
    }
}
