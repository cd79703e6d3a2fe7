//! Wavy transmission lines.
//!
//! A message between two events is drawn as a hand-drawn-looking wave rather
//! than a straight segment: a chain of cubic Bézier arcs whose vertical
//! offsets alternate sign. The wave is built in a local space where the line
//! runs along the positive x-axis, then rotated and translated into place.

use crate::geom::{Point, point};
use crate::path::{PathBuilder, PathSegment};

/// Target length of one sub-curve, in user units.
const TARGET_CURVE_LENGTH: f64 = 5.0;

/// Vertical control-point offset of each sub-curve. Fixed, not scaled by the
/// line's length, so very short messages look visually exaggerated.
const WAVE_AMPLITUDE: f64 = 2.0;

/// Builds a wavy line from `start` to `end`.
///
/// Degenerate geometry (coincident or non-finite endpoints, or a span too
/// short to fit a single sub-curve) falls back to a straight segment.
pub fn wavy_line(start: Point, end: Point) -> PathBuilder {
    let span = end.minus(start);
    let radius = span.length();
    let angle = span.angle();

    let num_curves = if radius.is_finite() {
        (radius / TARGET_CURVE_LENGTH).round() as i64
    } else {
        0
    };
    if num_curves < 1 {
        let mut builder = PathBuilder::new();
        builder.move_abs(start).line_abs(end);
        return builder;
    }

    let base = base_wave(radius, num_curves);

    let mut builder = PathBuilder::new();
    for seg in base.segments() {
        transformed(&mut builder, *seg, angle, start);
    }
    builder
}

/// The wave in local space: along +x from (0, 0) to (length, 0).
fn base_wave(length: f64, num_curves: i64) -> PathBuilder {
    let curve_length = length / num_curves as f64;
    let mut offset = WAVE_AMPLITUDE;

    let mut builder = PathBuilder::new();

    let mut from = point(0.0, 0.0);
    builder.move_abs(from);
    builder.cubic_abs(
        point(curve_length / 2.0, 0.0),
        point(curve_length / 2.0, offset),
        point(curve_length, offset),
    );
    from = point(curve_length, offset);

    // Intermediate arcs continue from the previous end with the offset sign
    // flipped. The bound collapses to an empty range when num_curves < 3.
    for _ in 1..(num_curves - 2).max(1) {
        offset = -offset;
        let to = point(from.x + curve_length, from.y + offset);
        builder.cubic_abs(
            point(from.x + curve_length / 2.0, from.y),
            point(from.x + curve_length / 2.0, from.y + offset),
            to,
        );
        from = to;
    }

    // Final arc returns to the axis at x = length.
    builder.cubic_abs(
        point(from.x + curve_length / 2.0, from.y),
        point(from.x + curve_length / 2.0, 0.0),
        point(length, 0.0),
    );

    builder
}

/// Re-emits one local-space segment rotated by `angle` and translated by
/// `origin`. Absolute points get the full transform; relative displacements
/// only rotate.
fn transformed(out: &mut PathBuilder, seg: PathSegment, angle: f64, origin: Point) {
    let tx = |p: Point| origin.add(p.as_direction().rotate(angle));

    match seg {
        PathSegment::MoveAbs(p) => {
            out.move_abs(tx(p));
        }
        PathSegment::MoveRel(d) => {
            out.move_rel(d.rotate(angle));
        }
        PathSegment::LineAbs(p) => {
            out.line_abs(tx(p));
        }
        PathSegment::LineRel(d) => {
            out.line_rel(d.rotate(angle));
        }
        PathSegment::QuadraticAbs { control, end } => {
            out.quadratic_abs(tx(control), tx(end));
        }
        PathSegment::CubicAbs {
            start_control,
            end_control,
            end,
        } => {
            out.cubic_abs(tx(start_control), tx(end_control), tx(end));
        }
    }
}
