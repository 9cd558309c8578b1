//! # donut-palette — named color palettes for the torus renderer
//!
//! A palette is an ordered triple of colors: one for each intensity band
//! the compositor distinguishes (dim surface, mid surface, highlight).
//! Palettes are selected once at startup by name and held immutably for
//! the program's lifetime — the rendering path never does color math.
//!
//! Name lookup accepts both English and German names (`red`/`rot`,
//! `blue`/`blau`, ...), a habit inherited from the program this renderer
//! descends from. Unknown names are the caller's problem: [`named`]
//! returns `None` and the CLI layer decides what to fall back to.

pub mod palette;

pub use palette::{names, named, Palette};
