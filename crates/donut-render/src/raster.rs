// SPDX-License-Identifier: MIT
//
// Surface rasterizer — torus sweep, projection, and visibility.
//
// The torus is generated analytically: an inner angle walks the tube's
// circular cross-section while an outer angle sweeps that circle around
// the central axis. Every sample is rotated by the two animation angles,
// projected with a fixed-distance perspective camera, and offered to the
// frame's depth buffer; the nearest sample per cell survives.
//
// The brightness expression is a fixed convention: the surface normal's
// projection against the light direction, folded through both rotations
// and pre-scaled to the glyph ramp's resolution. Its constants are part
// of the picture — change one and the whole shading character shifts —
// so the expression is kept as a unit and not re-derived.
//
// Trigonometric shorthands (sin_a, cos_b, ...) are inherently similar
// names; spelling them out further hurts comparison with the math.
#![allow(clippy::similar_names)]
// Float→int screen coordinates truncate by convention.
#![allow(clippy::cast_possible_truncation)]

use crate::buffer::Frame;
use crate::shade::glyph_for;

// ─── Sampling constants ─────────────────────────────────────────────────────

/// Sweep bound for both angular parameters, just short of 2π. The
/// literal keeps the per-ring sample count fixed.
const FULL_TURN: f32 = 6.28;

/// Step of the inner angle (tube cross-section), ~314 samples per ring.
const TUBE_STEP: f32 = 0.02;

/// Step of the outer angle (sweep around the axis), ~90 rings.
const SWEEP_STEP: f32 = 0.07;

/// Viewer distance added to every sample's depth denominator. Large
/// enough that the denominator stays positive for the whole surface
/// (the rotated offset never exceeds 4).
const CAMERA_DIST: f32 = 5.0;

/// Horizontal projection scale and center. The horizontal scale is
/// double the vertical to offset the tall aspect of terminal cells.
const X_SCALE: f32 = 30.0;
const X_CENTER: f32 = 40.0;

/// Vertical projection scale and center.
const Y_SCALE: f32 = 15.0;
const Y_CENTER: f32 = 12.0;

/// Brightness pre-scale matching the 12-glyph ramp's resolution.
const LUMA_SCALE: f32 = 8.0;

// ─── Rotation state ─────────────────────────────────────────────────────────

/// The two animation angles, in radians.
///
/// The host loop owns one `Rotation` and advances it between frames;
/// the rasterizer only reads it. The angles grow without bound — the
/// trigonometry wraps them implicitly, so no reset or clamp is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Rotation about the horizontal axis.
    pub a: f32,
    /// Rotation about the vertical axis.
    pub b: f32,
}

/// Per-frame increment of the horizontal-axis angle.
const A_STEP: f32 = 0.04;

/// Per-frame increment of the vertical-axis angle.
const B_STEP: f32 = 0.02;

impl Rotation {
    /// The starting orientation: both angles zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { a: 0.0, b: 0.0 }
    }

    /// Advance both angles by their fixed per-frame deltas.
    ///
    /// The two rates differ so the tumble never settles into a short
    /// repeating cycle.
    pub fn step(&mut self) {
        self.a += A_STEP;
        self.b += B_STEP;
    }
}

// ─── Rasterization ──────────────────────────────────────────────────────────

/// Rasterize one frame of the torus at the given orientation.
///
/// Clears the frame, then sweeps the surface: tube radius 1, sweep
/// radius 2, rotated by `rot.a` and `rot.b`, projected at fixed camera
/// distance. Each sample writes its glyph through the frame's
/// depth-tested [`plot`](Frame::plot); occluded samples are discarded
/// there.
///
/// A pure, deterministic function of the rotation — rerunning it with
/// equal angles reproduces the frame bit for bit.
pub fn rasterize(rot: Rotation, frame: &mut Frame) {
    frame.clear();

    let (sin_a, cos_a) = rot.a.sin_cos();
    let (sin_b, cos_b) = rot.b.sin_cos();

    let mut sweep = 0.0_f32;
    while sweep < FULL_TURN {
        let (sin_sweep, cos_sweep) = sweep.sin_cos();
        // Distance of the tube wall from the central axis: sweep radius
        // 2 plus the cross-section's cosine (tube radius 1).
        let ring = cos_sweep + 2.0;

        let mut tube = 0.0_f32;
        while tube < FULL_TURN {
            let (sin_tube, cos_tube) = tube.sin_cos();

            // Inverse distance from the viewer; larger = nearer.
            let depth = 1.0 / (sin_tube * ring * sin_a + sin_sweep * cos_a + CAMERA_DIST);

            // The sample's height after the first rotation, reused by
            // both screen coordinates.
            let tilt = sin_tube * ring * cos_a - sin_sweep * sin_a;

            let x = (X_CENTER + X_SCALE * depth * (cos_tube * ring * cos_b - tilt * sin_b)) as i32;
            let y = (Y_CENTER + Y_SCALE * depth * (cos_tube * ring * sin_b + tilt * cos_b)) as i32;

            // Surface-normal shading, pre-scaled for the glyph ramp.
            let brightness = (LUMA_SCALE
                * ((sin_sweep * sin_a - sin_tube * cos_sweep * cos_a) * cos_b
                    - sin_tube * cos_sweep * sin_a
                    - sin_sweep * cos_a
                    - cos_tube * cos_sweep * sin_b)) as i32;

            frame.plot(x, y, depth, glyph_for(brightness));

            tube += TUBE_STEP;
        }
        sweep += SWEEP_STEP;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
