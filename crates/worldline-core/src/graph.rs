//! All-paths search over small directed graphs.
//!
//! The processes and messages of a diagram form a small, essentially acyclic
//! graph; highlighting needs every simple path between two selected nodes.
//! The search works backward from the target and bounds its total work, so it
//! is deliberately not a general-purpose graph algorithm.

use tracing::debug;

/// A directed edge. Node identity is caller-defined (`T` may be a coordinate
/// pair without a usable `Eq`, hence the caller-supplied equality below).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<T> {
    pub start: T,
    pub end: T,
}

/// An unordered collection of edges. Duplicate edges are harmless but
/// wasteful: each one re-expands the same parent.
pub type Graph<T> = Vec<Edge<T>>;

/// An ordered node sequence from start to end, both inclusive.
pub type Path<T> = Vec<T>;

pub fn edge<T>(start: T, end: T) -> Edge<T> {
    Edge { start, end }
}

/// Total number of work-list pops [`get_paths`] performs before giving up.
///
/// Process/message graphs in this domain are small; the cap exists so a
/// pathological input degrades to "fewer paths found" instead of unbounded
/// work.
pub const DEFAULT_EXPANSION_CAP: usize = 100;

/// Enumerates every simple path from `start` to `end`, bounded by
/// [`DEFAULT_EXPANSION_CAP`] expansion steps.
pub fn get_paths<T, F>(graph: &[Edge<T>], start: &T, end: &T, is_equal: F) -> Vec<Path<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    get_paths_with_cap(graph, start, end, DEFAULT_EXPANSION_CAP, is_equal)
}

/// [`get_paths`] with an explicit expansion cap.
///
/// Works backward from `end`: a work-list holds partial paths, each beginning
/// at some node. Popping a path whose head equals `start` accepts it;
/// otherwise every edge ending at the head contributes a new partial path
/// with that edge's start prepended.
///
/// The cap counts pops globally, not per path. When it is hit, the search
/// stops and returns the complete paths found so far; partial paths are
/// silently dropped. This is a documented limitation for oversized graphs,
/// not an error.
pub fn get_paths_with_cap<T, F>(
    graph: &[Edge<T>],
    start: &T,
    end: &T,
    cap: usize,
    is_equal: F,
) -> Vec<Path<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result: Vec<Path<T>> = Vec::new();
    let mut partials: Vec<Path<T>> = vec![vec![end.clone()]];

    for _ in 0..cap {
        let Some(path) = partials.pop() else {
            return result;
        };

        let head = &path[0];
        if is_equal(head, start) {
            result.push(path);
            continue;
        }

        for edge in graph.iter().filter(|edge| is_equal(&edge.end, head)) {
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.push(edge.start.clone());
            extended.extend_from_slice(&path);
            partials.push(extended);
        }
    }

    if !partials.is_empty() {
        debug!(
            dropped = partials.len(),
            found = result.len(),
            cap,
            "path search hit its expansion cap; dropping partial paths"
        );
    }

    result
}
