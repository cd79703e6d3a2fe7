//! Layout tuning knobs.

use serde::{Deserialize, Serialize};
use worldline_core::graph::DEFAULT_EXPANSION_CAP;

/// Geometry constants of the layout engine. The defaults reproduce the
/// canonical look: processes spread over the central 70% of the viewport,
/// time running bottom-to-top with a 12-unit band reserved at each extreme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceTimeConfig {
    /// Fraction of the viewport width left as margin on each side of the
    /// process band.
    pub side_margin: f64,
    /// Vertical padding, in user units, between the viewport edges and the
    /// `[0, max_time]` band.
    pub time_padding: f64,
    /// Radius of event markers.
    pub event_radius: f64,
    /// How far (in time units) a process line extends before its first event.
    pub timeline_lead: f64,
    /// How far (in time units) past the global max time a process line
    /// extends.
    pub timeline_trail: f64,
    /// Expansion cap handed to the causal-path search.
    pub expansion_cap: usize,
}

impl Default for SpaceTimeConfig {
    fn default() -> Self {
        Self {
            side_margin: 0.15,
            time_padding: 12.0,
            event_radius: 3.0,
            timeline_lead: 3.0,
            timeline_trail: 10.0,
            expansion_cap: DEFAULT_EXPANSION_CAP,
        }
    }
}
