//! Pointer-driven path selection.
//!
//! [`PathSelection`] is the one piece of mutable state in the whole engine: a
//! (start, end) pair of event references. [`DiagramController`] wraps a
//! diagram plus a selection cell and implements the pointer protocol on top:
//! click toggles the start, hover sets a transient end, leaving the surface
//! clears everything. Each state change synchronously invalidates the cached
//! causal path; re-reading without a change never re-runs the search.

use crate::Result;
use crate::config::SpaceTimeConfig;
use crate::layout::{self, SpaceTimeLayout};
use crate::model::{EventRef, SpaceTimeDiagram};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// The currently selected (start, end) pair. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathSelection {
    start: Option<EventRef>,
    end: Option<EventRef>,
}

impl PathSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<EventRef> {
        self.start
    }

    pub fn end(&self) -> Option<EventRef> {
        self.end
    }

    pub fn set_start(&mut self, start: Option<EventRef>) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Option<EventRef>) {
        self.end = end;
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

/// A selection cell that can be shared between several diagram controllers,
/// so hovering one diagram highlights the same causal path in the others.
///
/// The whole engine is single-threaded and synchronous by contract, hence the
/// `Rc<RefCell<..>>` spelling rather than anything lock-based.
pub type SharedSelection = Rc<RefCell<PathSelection>>;

pub fn shared_selection() -> SharedSelection {
    Rc::new(RefCell::new(PathSelection::default()))
}

#[derive(Debug, Default)]
struct PathCache {
    key: Option<(Option<EventRef>, Option<EventRef>)>,
    path: Vec<EventRef>,
    runs: u64,
}

/// Owns one diagram instance, its configuration, and (optionally shared)
/// selection state, and memoizes the causal-path search on the identity of
/// the selection endpoints.
///
/// The memoization is a contract, not an optimization: the search is
/// worst-case exponential in graph branching and must not run on every
/// render. [`DiagramController::search_runs`] exposes the recompute count so
/// hosts (and tests) can observe the invariant.
#[derive(Debug)]
pub struct DiagramController {
    diagram: SpaceTimeDiagram,
    config: SpaceTimeConfig,
    selection: SharedSelection,
    cache: RefCell<PathCache>,
}

impl DiagramController {
    /// Creates a controller with a private selection cell.
    pub fn new(diagram: SpaceTimeDiagram, config: SpaceTimeConfig) -> Result<Self> {
        Self::with_selection(diagram, config, shared_selection())
    }

    /// Creates a controller bound to an externally owned selection cell.
    pub fn with_selection(
        diagram: SpaceTimeDiagram,
        config: SpaceTimeConfig,
        selection: SharedSelection,
    ) -> Result<Self> {
        layout::validate(&diagram)?;
        Ok(Self {
            diagram,
            config,
            selection,
            cache: RefCell::new(PathCache::default()),
        })
    }

    pub fn diagram(&self) -> &SpaceTimeDiagram {
        &self.diagram
    }

    pub fn config(&self) -> &SpaceTimeConfig {
        &self.config
    }

    /// The selection cell, for sharing with other controllers.
    pub fn selection(&self) -> SharedSelection {
        Rc::clone(&self.selection)
    }

    /// Click on an event: selects it as the path start, or clears the start
    /// when it is already selected.
    pub fn click(&self, target: EventRef) {
        let mut selection = self.selection.borrow_mut();
        if selection.start() == Some(target) {
            selection.set_start(None);
        } else {
            selection.set_start(Some(target));
        }
    }

    /// Pointer entered an event marker: provisional path end.
    pub fn hover_enter(&self, target: EventRef) {
        self.selection.borrow_mut().set_end(Some(target));
    }

    /// Pointer left the event marker.
    pub fn hover_leave(&self) {
        self.selection.borrow_mut().set_end(None);
    }

    /// Pointer left the diagram surface entirely: drop the whole selection.
    pub fn pointer_leave(&self) {
        self.selection.borrow_mut().clear();
    }

    /// The active causal path for the current selection, recomputed only when
    /// a selection endpoint changed since the last call.
    pub fn active_path(&self) -> Vec<EventRef> {
        let (start, end) = {
            let selection = self.selection.borrow();
            (selection.start(), selection.end())
        };
        let key = (start, end);

        let mut cache = self.cache.borrow_mut();
        if cache.key != Some(key) {
            cache.path = layout::active_path(&self.diagram, &self.config, start, end);
            cache.key = Some(key);
            cache.runs += 1;
            trace!(runs = cache.runs, len = cache.path.len(), "active path recomputed");
        }
        cache.path.clone()
    }

    /// How many times the path search actually ran. Stable across repeated
    /// [`DiagramController::active_path`] / [`DiagramController::layout`]
    /// calls with an unchanged selection.
    pub fn search_runs(&self) -> u64 {
        self.cache.borrow().runs
    }

    /// Lays the diagram out against the current (memoized) causal path.
    pub fn layout(&self) -> Result<SpaceTimeLayout> {
        let path = self.active_path();
        let start = self.selection.borrow().start();
        layout::layout_with_path(&self.diagram, &self.config, start, path)
    }
}
