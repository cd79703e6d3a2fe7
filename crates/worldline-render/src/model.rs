//! The diagram input model.
//!
//! Callers construct these types directly (or deserialize them); nothing here
//! is derived from a UI tree. Indices are the identity currency: a message
//! names its endpoints as (process index, event index) pairs into the
//! diagram's own event lists, it does not own the events.

use serde::{Deserialize, Serialize};

/// A reference to one event: process index plus event index within that
/// process's ordered event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRef {
    pub process: usize,
    pub event: usize,
}

impl EventRef {
    pub const fn new(process: usize, event: usize) -> Self {
        Self { process, event }
    }
}

impl From<(usize, usize)> for EventRef {
    fn from((process, event): (usize, usize)) -> Self {
        Self { process, event }
    }
}

/// A discrete, time-stamped point on a process timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTimeEvent {
    pub time: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

impl SpaceTimeEvent {
    pub fn at(time: f64) -> Self {
        Self {
            time,
            label: None,
            highlight: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// An ordered timeline of events, rendered as one vertical lane.
///
/// Event times are expected to increase along the list; this is a convention,
/// not an enforced invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceTimeProcess {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub highlight: bool,
    pub events: Vec<SpaceTimeEvent>,
}

impl SpaceTimeProcess {
    pub fn from_times(times: impl IntoIterator<Item = f64>) -> Self {
        Self {
            label: None,
            highlight: false,
            events: times.into_iter().map(SpaceTimeEvent::at).collect(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// A directed message from one event to another, usually across processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceTimeMessage {
    pub from: EventRef,
    pub to: EventRef,
}

impl SpaceTimeMessage {
    pub fn new(from: impl Into<EventRef>, to: impl Into<EventRef>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A simultaneity band: one time value per process (a prefix of the process
/// list is allowed), connected as a single polyline across the lanes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickLine {
    pub times: Vec<f64>,
}

impl TickLine {
    pub fn new(times: impl IntoIterator<Item = f64>) -> Self {
        Self {
            times: times.into_iter().collect(),
        }
    }
}

/// The complete input of one diagram instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceTimeDiagram {
    /// Target viewport size in user units.
    pub width: f64,
    pub height: f64,
    pub processes: Vec<SpaceTimeProcess>,
    #[serde(default)]
    pub messages: Vec<SpaceTimeMessage>,
    #[serde(default)]
    pub ticks: Vec<TickLine>,
}

impl SpaceTimeDiagram {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            processes: Vec::new(),
            messages: Vec::new(),
            ticks: Vec::new(),
        }
    }

    pub fn with_process(mut self, process: SpaceTimeProcess) -> Self {
        self.processes.push(process);
        self
    }

    pub fn with_message(mut self, message: SpaceTimeMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_tick(mut self, tick: TickLine) -> Self {
        self.ticks.push(tick);
        self
    }

    pub fn event(&self, reference: EventRef) -> Option<&SpaceTimeEvent> {
        self.processes
            .get(reference.process)?
            .events
            .get(reference.event)
    }

    /// The largest time value across all events and tick entries; 0 if none.
    pub fn max_time(&self) -> f64 {
        let event_times = self
            .processes
            .iter()
            .flat_map(|p| p.events.iter().map(|e| e.time));
        let tick_times = self.ticks.iter().flat_map(|t| t.times.iter().copied());

        event_times.chain(tick_times).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_time_spans_events_and_ticks() {
        let diagram = SpaceTimeDiagram::new(200.0, 200.0)
            .with_process(SpaceTimeProcess::from_times([1.0, 4.0]))
            .with_process(SpaceTimeProcess::from_times([2.0]))
            .with_tick(TickLine::new([6.5, 3.0]));

        assert_eq!(diagram.max_time(), 6.5);
    }

    #[test]
    fn max_time_defaults_to_zero() {
        assert_eq!(SpaceTimeDiagram::new(100.0, 100.0).max_time(), 0.0);
    }

    #[test]
    fn event_lookup_checks_both_indices() {
        let diagram = SpaceTimeDiagram::new(100.0, 100.0)
            .with_process(SpaceTimeProcess::from_times([1.0]));

        assert!(diagram.event(EventRef::new(0, 0)).is_some());
        assert!(diagram.event(EventRef::new(0, 1)).is_none());
        assert!(diagram.event(EventRef::new(1, 0)).is_none());
    }

    #[test]
    fn diagram_round_trips_through_json() {
        let diagram = SpaceTimeDiagram::new(200.0, 180.0)
            .with_process(SpaceTimeProcess::from_times([0.0, 5.0]).with_label("p0"))
            .with_message(SpaceTimeMessage::new((0, 0), (0, 1)));

        let json = serde_json::to_string(&diagram).unwrap();
        let back: SpaceTimeDiagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diagram);
    }
}
