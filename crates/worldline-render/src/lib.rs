#![forbid(unsafe_code)]

//! Layout, pointer interaction and SVG rendering for space-time diagrams.
//!
//! A space-time diagram shows concurrent processes as vertical lanes, the
//! discrete events on each process, and the messages passing between them.
//! This crate is headless: it consumes the typed model from [`model`],
//! produces a serializable [`layout::SpaceTimeLayout`], and renders that to a
//! single SVG string. Interaction (click/hover path selection) lives in
//! [`selection`] and drives highlight recomputation synchronously.

pub mod config;
pub mod layout;
pub mod model;
pub mod selection;
pub mod svg;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid diagram model: {message}")]
    InvalidModel { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use config::SpaceTimeConfig;
pub use layout::{SpaceTimeLayout, layout_space_time, space_between};
pub use model::{
    EventRef, SpaceTimeDiagram, SpaceTimeEvent, SpaceTimeMessage, SpaceTimeProcess, TickLine,
};
pub use selection::{DiagramController, PathSelection, SharedSelection, shared_selection};
pub use svg::{RenderOptions, render_svg};
