// SPDX-License-Identifier: MIT
//
// donut-tty — a rotating, shaded, colored ASCII torus in the terminal.
//
// This is the host loop that wires together all the crates:
//
//   donut-term    → raw mode, ANSI output, key polling, output buffer
//   donut-palette → named 3-level color palettes
//   donut-render  → torus rasterizer and frame compositor
//
// Each displayed frame flows through:
//
//   poll_key → rasterize(rotation) → compose(frame, palette)
//   → flush (one write) → rotation.step() → sleep(base ÷ speed)
//
// The loop is synchronous and single-threaded: a frame is fully
// computed and flushed before the angles advance, and the quit check
// runs exactly once between frames. The only state that survives a
// frame is the pair of rotation angles.

use std::env;
use std::io;
use std::process;
use std::thread;
use std::time::Duration;

use donut_palette::{named, names, Palette};
use donut_render::{compose, rasterize, Frame, Rotation};
use donut_term::input::{self, Key};
use donut_term::output::OutputBuffer;
use donut_term::terminal::Terminal;

// ─── Pacing ─────────────────────────────────────────────────────────────────

/// Base sleep between frames in microseconds (~30 fps at speed 1.0).
const BASE_FRAME_US: u64 = 33_333;

/// The per-frame sleep for a speed factor.
///
/// Higher factors shorten the sleep: 2.0 animates twice as fast as 1.0,
/// 0.5 half as fast. Callers guarantee the factor is positive and finite.
fn sleep_interval(speed: f32) -> Duration {
    // Positive operands; truncating sub-microsecond precision is fine.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let micros = (BASE_FRAME_US as f64 / f64::from(speed)) as u64;
    Duration::from_micros(micros)
}

// ─── Command line ───────────────────────────────────────────────────────────

/// Resolved command-line configuration.
struct Config {
    palette: Palette,
    speed: f32,
}

/// Look up the palette for a color argument.
///
/// Names are matched case-insensitively. Unknown names warn on stderr
/// and fall back to green.
fn palette_for(arg: &str) -> Palette {
    named(&arg.to_ascii_lowercase()).unwrap_or_else(|| {
        eprintln!("Warning: Unknown color '{arg}'. Using default 'green'.");
        eprintln!("Available: {}", names().join(", "));
        Palette::GREEN
    })
}

/// Parse the speed argument.
///
/// Unparseable, non-positive, or non-finite values warn on stderr and
/// fall back to 1.0.
fn speed_for(arg: &str) -> f32 {
    match arg.parse::<f32>() {
        Ok(v) if v > 0.0 && v.is_finite() => v,
        _ => {
            eprintln!(
                "Warning: Invalid speed factor '{arg}'. Must be a positive number. Using default 1.0."
            );
            1.0
        }
    }
}

/// Whether a keystroke ends the animation: q, Q, or Escape.
const fn is_quit(key: Key) -> bool {
    matches!(key, Key::Escape | Key::Char('q' | 'Q'))
}

fn print_usage(program: &str) {
    println!("Usage: {program} [color] [speed]");
    println!("Press 'q' or ESC to quit.");
    println!();
    println!("Arguments:");
    println!("  color          Color name (optional, default: green).");
    println!("                 Available: {}", names().join(", "));
    println!("  speed          Positive speed factor (optional, default: 1.0).");
    println!("                 > 1.0: faster, < 1.0: slower.");
}

// ─── Host loop ──────────────────────────────────────────────────────────────

/// Run the animation until a quit key arrives.
///
/// The terminal handle restores raw mode and the cursor on drop, so an
/// early error return still leaves the terminal usable.
fn run(config: &Config) -> io::Result<()> {
    let mut term = Terminal::new();
    term.enter()?;

    let mut rotation = Rotation::new();
    let mut frame = Frame::new();
    let mut out = OutputBuffer::new();
    let interval = sleep_interval(config.speed);

    loop {
        // Cooperative cancellation: one non-blocking check per frame.
        // Unexpected read errors propagate and end the program;
        // "no data available" is the normal case and keeps looping.
        if let Some(key) = input::poll_key()? {
            if is_quit(key) {
                break;
            }
        }

        rasterize(rotation, &mut frame);
        compose(&frame, &config.palette, &mut out)?;
        out.flush_stdout()?;

        rotation.step();
        thread::sleep(interval);
    }

    term.leave()
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Some(first) = args.get(1) {
        if first == "-h" || first == "--help" {
            print_usage(&args[0]);
            return;
        }
    }
    if args.len() > 3 {
        eprintln!(
            "Warning: Too many arguments. Use '{} --help' for help.",
            args[0]
        );
    }

    let config = Config {
        palette: args.get(1).map_or(Palette::GREEN, |arg| palette_for(arg)),
        speed: args.get(2).map_or(1.0, |arg| speed_for(arg)),
    };

    if let Err(e) = run(&config) {
        eprintln!("donut-tty: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Pacing ────────────────────────────────────────────────────────

    #[test]
    fn speed_one_sleeps_the_base_interval() {
        assert_eq!(sleep_interval(1.0), Duration::from_micros(BASE_FRAME_US));
    }

    #[test]
    fn speed_two_halves_the_interval() {
        // Both sides truncate to whole microseconds.
        assert_eq!(
            sleep_interval(2.0),
            Duration::from_micros(BASE_FRAME_US / 2)
        );
    }

    #[test]
    fn speed_half_doubles_the_interval() {
        let base = sleep_interval(1.0);
        assert_eq!(sleep_interval(0.5), base * 2);
    }

    // ── Speed parsing ─────────────────────────────────────────────────

    #[test]
    fn valid_speed_is_kept() {
        assert_eq!(speed_for("2.5"), 2.5);
        assert_eq!(speed_for("0.25"), 0.25);
    }

    #[test]
    fn garbage_speed_falls_back_to_one() {
        assert_eq!(speed_for("fast"), 1.0);
        assert_eq!(speed_for(""), 1.0);
        assert_eq!(speed_for("1.0x"), 1.0);
    }

    #[test]
    fn non_positive_speed_falls_back_to_one() {
        assert_eq!(speed_for("0"), 1.0);
        assert_eq!(speed_for("-3"), 1.0);
    }

    #[test]
    fn non_finite_speed_falls_back_to_one() {
        assert_eq!(speed_for("inf"), 1.0);
        assert_eq!(speed_for("NaN"), 1.0);
    }

    // ── Palette selection ─────────────────────────────────────────────

    #[test]
    fn known_color_resolves() {
        assert_eq!(palette_for("red"), Palette::RED);
        assert_eq!(palette_for("rot"), Palette::RED);
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(palette_for("Green"), Palette::GREEN);
        assert_eq!(palette_for("CYAN"), Palette::CYAN);
    }

    #[test]
    fn unknown_color_falls_back_to_green() {
        assert_eq!(palette_for("plaid"), Palette::GREEN);
    }

    // ── Quit keys ─────────────────────────────────────────────────────

    #[test]
    fn q_quits_both_cases() {
        assert!(is_quit(Key::Char('q')));
        assert!(is_quit(Key::Char('Q')));
    }

    #[test]
    fn escape_quits() {
        assert!(is_quit(Key::Escape));
    }

    #[test]
    fn other_keys_do_not_quit() {
        assert!(!is_quit(Key::Char('a')));
        assert!(!is_quit(Key::Char(' ')));
        assert!(!is_quit(Key::Char('\u{3}'))); // Ctrl-C byte in raw mode
    }
}
