#![forbid(unsafe_code)]

//! `worldline` is a headless engine for interactive space-time (Lamport)
//! diagrams: concurrent processes as vertical lanes, discrete events on each
//! lane, wavy message curves between them, and pointer-driven highlighting of
//! the causal path between two selected events.
//!
//! The crate root re-exports the geometry and search primitives from
//! `worldline-core`. Layout, interaction and SVG output live behind the
//! `render` feature in [`render`].
//!
//! # Features
//!
//! - `render`: enable layout + interaction + SVG rendering (`worldline::render`)

pub use worldline_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use worldline_render::config::SpaceTimeConfig;
    pub use worldline_render::layout::{
        EventLayout, MessageLayout, ProcessLayout, SegmentLayout, SpaceTimeLayout, TickLayout,
        layout_space_time, space_between,
    };
    pub use worldline_render::model::{
        EventRef, SpaceTimeDiagram, SpaceTimeEvent, SpaceTimeMessage, SpaceTimeProcess, TickLine,
    };
    pub use worldline_render::selection::{
        DiagramController, PathSelection, SharedSelection, shared_selection,
    };
    pub use worldline_render::svg::{RenderOptions, render_svg};
    pub use worldline_render::{Error, Result};

    /// Lays out and renders a diagram with an empty selection, in one call.
    ///
    /// Interactive hosts should keep a [`DiagramController`] instead and
    /// re-render from [`DiagramController::layout`] as the selection changes.
    ///
    /// ```
    /// use worldline::render::*;
    ///
    /// let diagram = SpaceTimeDiagram::new(200.0, 200.0)
    ///     .with_process(SpaceTimeProcess::from_times([1.0, 5.0]).with_label("a"))
    ///     .with_process(SpaceTimeProcess::from_times([3.0, 7.0]).with_label("b"))
    ///     .with_message(SpaceTimeMessage::new((0, 0), (1, 0)));
    ///
    /// let svg = render_diagram_svg(
    ///     &diagram,
    ///     &SpaceTimeConfig::default(),
    ///     &RenderOptions::default(),
    /// )?;
    /// assert!(svg.starts_with("<svg "));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn render_diagram_svg(
        diagram: &SpaceTimeDiagram,
        config: &SpaceTimeConfig,
        options: &RenderOptions,
    ) -> Result<String> {
        let layout = layout_space_time(diagram, config, &PathSelection::new())?;
        Ok(render_svg(&layout, options))
    }
}
