// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — the compositor and the terminal module
// make those calls. This module just knows the byte-level encoding of the
// handful of terminal commands the animation needs.
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to `OutputBuffer` (backed by a Vec).

use std::io::{self, Write};

use crate::color::Rgb;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to the top-left corner (CUP with no parameters).
///
/// Emitted once per frame so the new frame overwrites the previous one
/// in place instead of scrolling the terminal.
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H")
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color using 24-bit `TrueColor` SGR.
///
/// # Examples
///
/// ```
/// use donut_term::ansi;
/// use donut_term::color::Rgb;
///
/// let mut buf = Vec::new();
/// ansi::fg(&mut buf, Rgb::new(0, 180, 0)).unwrap();
/// assert_eq!(buf, b"\x1b[38;2;0;180;0m");
/// ```
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
