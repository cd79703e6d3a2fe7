//! SVG path assembly.
//!
//! [`PathBuilder`] is an append-only accumulator of draw instructions that
//! serializes to SVG path data. It performs no coherence checking on the
//! instruction sequence (a curve with no preceding move serializes
//! positionally, exactly as recorded); correctness of the sequence is the
//! caller's responsibility.

use crate::geom::{Direction, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One recorded draw instruction.
///
/// The kind set is closed: serialization matches on it exhaustively, so an
/// unknown kind cannot reach [`PathBuilder::to_path_data`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveAbs(Point),
    MoveRel(Direction),
    LineAbs(Point),
    LineRel(Direction),
    QuadraticAbs { control: Point, end: Point },
    CubicAbs {
        start_control: Point,
        end_control: Point,
        end: Point,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_abs(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveAbs(p));
        self
    }

    pub fn move_rel(&mut self, d: Direction) -> &mut Self {
        self.segments.push(PathSegment::MoveRel(d));
        self
    }

    pub fn line_abs(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineAbs(p));
        self
    }

    pub fn line_rel(&mut self, d: Direction) -> &mut Self {
        self.segments.push(PathSegment::LineRel(d));
        self
    }

    pub fn quadratic_abs(&mut self, control: Point, end: Point) -> &mut Self {
        self.segments.push(PathSegment::QuadraticAbs { control, end });
        self
    }

    pub fn cubic_abs(&mut self, start_control: Point, end_control: Point, end: Point) -> &mut Self {
        self.segments.push(PathSegment::CubicAbs {
            start_control,
            end_control,
            end,
        });
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Serializes the recorded instructions to SVG path data, in insertion
    /// order, tokens joined by single spaces.
    pub fn to_path_data(&self) -> String {
        let mut out = String::with_capacity(self.segments.len() * 16);
        for seg in &self.segments {
            if !out.is_empty() {
                out.push(' ');
            }
            match seg {
                PathSegment::MoveAbs(p) => {
                    let _ = write!(out, "M {} {}", fmt_path(p.x), fmt_path(p.y));
                }
                PathSegment::MoveRel(d) => {
                    let _ = write!(out, "m {} {}", fmt_path(d.dx), fmt_path(d.dy));
                }
                PathSegment::LineAbs(p) => {
                    let _ = write!(out, "L {} {}", fmt_path(p.x), fmt_path(p.y));
                }
                PathSegment::LineRel(d) => {
                    let _ = write!(out, "l {} {}", fmt_path(d.dx), fmt_path(d.dy));
                }
                PathSegment::QuadraticAbs { control, end } => {
                    let _ = write!(
                        out,
                        "Q {} {} {} {}",
                        fmt_path(control.x),
                        fmt_path(control.y),
                        fmt_path(end.x),
                        fmt_path(end.y)
                    );
                }
                PathSegment::CubicAbs {
                    start_control,
                    end_control,
                    end,
                } => {
                    let _ = write!(
                        out,
                        "C {} {} {} {} {} {}",
                        fmt_path(start_control.x),
                        fmt_path(start_control.y),
                        fmt_path(end_control.x),
                        fmt_path(end_control.y),
                        fmt_path(end.x),
                        fmt_path(end.y)
                    );
                }
            }
        }
        out
    }
}

/// Formats a path coordinate with 3 fractional digits, trailing zeros trimmed.
///
/// Non-finite values collapse to `0` so a degenerate input can never produce
/// unparseable path data.
pub fn fmt_path(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
