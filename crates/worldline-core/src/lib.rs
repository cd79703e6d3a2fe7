#![forbid(unsafe_code)]

//! Geometry and search primitives for space-time diagrams (headless).
//!
//! Design goals:
//! - pure value types and deterministic outputs (stable path-data strings)
//! - SVG path data as the single rendering currency
//! - no UI framework, no I/O, no global state

pub mod geom;
pub mod graph;
pub mod path;
pub mod wave;

pub use geom::{Direction, Point, direction, point};
pub use graph::{DEFAULT_EXPANSION_CAP, Edge, Graph, Path, edge, get_paths, get_paths_with_cap};
pub use path::{PathBuilder, PathSegment};
pub use wave::wavy_line;
