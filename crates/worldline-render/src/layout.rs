//! The layout engine.
//!
//! Maps abstract (process index, time value) coordinates into viewport
//! coordinates, builds the causal graph out of the diagram's own processes
//! and messages, and resolves highlight flags against the active causal path.
//! Everything here is a pure function of (model, config, selection state).

use crate::config::SpaceTimeConfig;
use crate::model::{EventRef, SpaceTimeDiagram};
use crate::selection::PathSelection;
use crate::{Error, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;
use worldline_core::geom::{Point, point};
use worldline_core::graph::{Edge, edge, get_paths_with_cap};
use worldline_core::wave::wavy_line;

/// Geometry of one process lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessLayout {
    /// Lane x position.
    pub x: f64,
    pub label: Option<String>,
    /// Anchor point for the lane label, below the timeline.
    pub label_anchor: Point,
    pub segments: Vec<SegmentLayout>,
    pub events: Vec<EventLayout>,
}

/// One straight piece of a process timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentLayout {
    pub from: Point,
    pub to: Point,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    pub reference: EventRef,
    pub center: Point,
    pub label: Option<String>,
    pub highlight: bool,
}

/// A message rendered as a wavy transit curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageLayout {
    pub from: EventRef,
    pub to: EventRef,
    pub start: Point,
    pub end: Point,
    /// SVG path data of the wavy curve from `start` to `end`.
    pub path_data: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLayout {
    pub points: Vec<Point>,
}

/// The fully placed diagram, ready for SVG emission (or snapshotting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTimeLayout {
    pub width: f64,
    pub height: f64,
    pub event_radius: f64,
    pub processes: Vec<ProcessLayout>,
    pub messages: Vec<MessageLayout>,
    pub ticks: Vec<TickLayout>,
    /// The active causal path driving the highlight flags, start to end.
    pub active_path: Vec<EventRef>,
}

/// Evenly spaces `count` positions across `[0, width]`.
///
/// One position sits at the midpoint; two sit at the extremes; three or more
/// are evenly spaced including both endpoints.
pub fn space_between(count: usize, width: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![width / 2.0],
        n => {
            let step = width / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// The causal graph of a diagram: consecutive events within each process,
/// plus one edge per message.
pub fn to_graph(diagram: &SpaceTimeDiagram) -> Vec<Edge<EventRef>> {
    let mut edges = Vec::new();

    for (process_index, process) in diagram.processes.iter().enumerate() {
        for event_index in 0..process.events.len().saturating_sub(1) {
            edges.push(edge(
                EventRef::new(process_index, event_index),
                EventRef::new(process_index, event_index + 1),
            ));
        }
    }

    for message in &diagram.messages {
        edges.push(edge(message.from, message.to));
    }

    edges
}

/// Computes the active causal path for a (start, end) selection: the
/// fewest-node path found by the search, ties broken by discovery order.
/// Absent endpoints yield an empty path.
pub fn active_path(
    diagram: &SpaceTimeDiagram,
    config: &SpaceTimeConfig,
    start: Option<EventRef>,
    end: Option<EventRef>,
) -> Vec<EventRef> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };

    let graph = to_graph(diagram);
    let paths = get_paths_with_cap(&graph, &start, &end, config.expansion_cap, |a, b| a == b);
    trace!(
        candidates = paths.len(),
        ?start,
        ?end,
        "recomputed causal paths"
    );

    let mut shortest: Option<Vec<EventRef>> = None;
    for path in paths {
        if shortest.as_ref().is_none_or(|s| path.len() < s.len()) {
            shortest = Some(path);
        }
    }
    shortest.unwrap_or_default()
}

/// Lays out a diagram against the current selection.
///
/// This is the unmemoized entry point; it re-runs the path search whenever
/// both selection endpoints are present. Interactive hosts should go through
/// [`crate::DiagramController`], which caches the active path on the identity
/// of the selection endpoints.
pub fn layout_space_time(
    diagram: &SpaceTimeDiagram,
    config: &SpaceTimeConfig,
    selection: &PathSelection,
) -> Result<SpaceTimeLayout> {
    validate(diagram)?;
    let path = active_path(diagram, config, selection.start(), selection.end());
    layout_with_path(diagram, config, selection.start(), path)
}

/// Checks the model's internal references before any geometry is computed.
pub(crate) fn validate(diagram: &SpaceTimeDiagram) -> Result<()> {
    fn invalid(message: String) -> Error {
        Error::InvalidModel { message }
    }

    if !(diagram.width.is_finite() && diagram.width > 0.0)
        || !(diagram.height.is_finite() && diagram.height > 0.0)
    {
        return Err(invalid(format!(
            "viewport must be finite and positive, got {}x{}",
            diagram.width, diagram.height
        )));
    }

    for (index, message) in diagram.messages.iter().enumerate() {
        for (side, reference) in [("from", message.from), ("to", message.to)] {
            if diagram.event(reference).is_none() {
                return Err(invalid(format!(
                    "message {index} {side} endpoint references event {}/{} which does not exist",
                    reference.process, reference.event
                )));
            }
        }
    }

    for (index, tick) in diagram.ticks.iter().enumerate() {
        if tick.times.len() > diagram.processes.len() {
            return Err(invalid(format!(
                "tick {index} has {} entries but the diagram has only {} processes",
                tick.times.len(),
                diagram.processes.len()
            )));
        }
    }

    Ok(())
}

/// Lays out a diagram against a precomputed active path. Callers must have
/// run [`validate`] on the model first; indices are trusted here.
pub(crate) fn layout_with_path(
    diagram: &SpaceTimeDiagram,
    config: &SpaceTimeConfig,
    selection_start: Option<EventRef>,
    active_path: Vec<EventRef>,
) -> Result<SpaceTimeLayout> {
    let margin = diagram.width * config.side_margin;
    let inner_width = diagram.width - 2.0 * margin;
    let lane_xs: Vec<f64> = space_between(diagram.processes.len(), inner_width)
        .into_iter()
        .map(|x| margin + x)
        .collect();

    let max_time = diagram.max_time();
    let usable_height = diagram.height - 2.0 * config.time_padding;
    let time_scale = if max_time > 0.0 {
        usable_height / max_time
    } else {
        0.0
    };
    // Time increases upward: t = 0 sits at the bottom padding line.
    let time_to_y = |time: f64| diagram.height - config.time_padding - time * time_scale;

    let on_path: FxHashSet<EventRef> = active_path.iter().copied().collect();

    let mut processes = Vec::with_capacity(diagram.processes.len());
    for (process_index, process) in diagram.processes.iter().enumerate() {
        let x = lane_xs[process_index];
        let at = |time: f64| point(x, time_to_y(time));

        let mut segments = Vec::new();
        if process.events.is_empty() {
            segments.push(SegmentLayout {
                from: at(-config.timeline_lead),
                to: at(max_time + config.timeline_trail),
                highlight: false,
            });
        } else {
            segments.push(SegmentLayout {
                from: at(-config.timeline_lead),
                to: at(process.events[0].time),
                highlight: false,
            });

            for (event_index, pair) in process.events.windows(2).enumerate() {
                let both_on_path = on_path.contains(&EventRef::new(process_index, event_index))
                    && on_path.contains(&EventRef::new(process_index, event_index + 1));
                segments.push(SegmentLayout {
                    from: at(pair[0].time),
                    to: at(pair[1].time),
                    highlight: process.highlight || both_on_path,
                });
            }

            segments.push(SegmentLayout {
                from: at(process.events[process.events.len() - 1].time),
                to: at(max_time + config.timeline_trail),
                highlight: false,
            });
        }

        let events = process
            .events
            .iter()
            .enumerate()
            .map(|(event_index, event)| {
                let reference = EventRef::new(process_index, event_index);
                EventLayout {
                    reference,
                    center: at(event.time),
                    label: event.label.clone(),
                    highlight: process.highlight
                        || event.highlight
                        || selection_start == Some(reference)
                        || on_path.contains(&reference),
                }
            })
            .collect();

        processes.push(ProcessLayout {
            x,
            label: process.label.clone(),
            label_anchor: point(x, diagram.height - 2.0),
            segments,
            events,
        });
    }

    let messages = diagram
        .messages
        .iter()
        .map(|message| {
            // Indices were validated by the caller, so the lookups cannot fail.
            let from_time = diagram.event(message.from).map(|e| e.time).unwrap_or(0.0);
            let to_time = diagram.event(message.to).map(|e| e.time).unwrap_or(0.0);
            let start = point(lane_xs[message.from.process], time_to_y(from_time));
            let end = point(lane_xs[message.to.process], time_to_y(to_time));

            MessageLayout {
                from: message.from,
                to: message.to,
                start,
                end,
                path_data: wavy_line(start, end).to_path_data(),
                highlight: on_path.contains(&message.from) && on_path.contains(&message.to),
            }
        })
        .collect();

    let ticks = diagram
        .ticks
        .iter()
        .map(|tick| TickLayout {
            points: tick
                .times
                .iter()
                .enumerate()
                .map(|(process_index, &time)| point(lane_xs[process_index], time_to_y(time)))
                .collect(),
        })
        .collect();

    Ok(SpaceTimeLayout {
        width: diagram.width,
        height: diagram.height,
        event_radius: config.event_radius,
        processes,
        messages,
        ticks,
        active_path,
    })
}
