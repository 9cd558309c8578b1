// SPDX-License-Identifier: MIT
//
// donut-render — the rendering core of donut-tty.
//
// Two stages run once per displayed frame:
//
//   raster.rs  → sweep the torus surface, project every sample to the
//                character grid, resolve visibility in a depth buffer,
//                pick a shading glyph per visible point
//   compose.rs → walk the resolved glyph grid in screen order and emit
//                one terminal-printable frame, coloring each glyph by
//                its intensity band
//
// Between them sit the shared pieces: the fixed 80×22 frame storage
// (buffer.rs) and the glyph ramp with its intensity bands (shade.rs).
//
// Everything here is pure computation over fixed-size storage: no
// terminal state, no configuration, no clock. The host owns the
// rotation angles and the pacing; this crate owns one frame at a time.

pub mod buffer;
pub mod compose;
pub mod raster;
pub mod shade;

pub use buffer::{Frame, HEIGHT, WIDTH};
pub use compose::compose;
pub use raster::{rasterize, Rotation};
