// SPDX-License-Identifier: MIT
//
// donut-term — Terminal control for donut-tty.
//
// The platform layer for a terminal animation: raw-mode entry and exit
// with guaranteed restore, ANSI escape output, non-blocking keyboard
// polling, and a frame-sized output buffer so every frame reaches the
// terminal in a single write.
//
// This crate intentionally avoids external TUI frameworks (ratatui,
// crossterm) in favor of direct terminal control via ANSI escape
// sequences and raw termios. The program needs a handful of escape
// sequences and one non-blocking read — an abstraction layer would be
// larger than the code it replaced.

pub mod ansi;
pub mod color;
pub mod input;
pub mod output;
pub mod terminal;
