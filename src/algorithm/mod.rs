/// Resumable, one-step-per-frame graph algorithms.

pub mod dijkstra;
pub mod traversal;

use crate::core::types::{Action, NodeColor, NodeIndex};
use crate::graph::graph_arena::GraphArena;
use dijkstra::Dijkstra;
use traversal::{Traversal, TraversalKind};

/// Tentative distance of a node not reached yet.
pub const INFINITY: u64 = u64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    Running,
    Completed,
}

/// Inspectable snapshot of an algorithm's internal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub status: Status,
    pub current: Option<NodeIndex>,
    pub visited: Vec<bool>,
    /// Frontier contents in pop order
    pub frontier: Vec<NodeIndex>,
    /// Tentative or final distances; empty for unweighted traversals
    pub distances: Vec<u64>,
    /// Nodes in the order they were visited or finalized
    pub order: Vec<NodeIndex>,
}

/// A pluggable step function over the graph's arena.
pub trait AlgorithmState {
    fn action(&self) -> Action;

    fn status(&self) -> Status;

    /// Perform one unit of visible work. Returns `true` once the algorithm
    /// has completed; stepping a completed state changes nothing.
    fn step(&mut self, arena: &mut GraphArena) -> bool;

    fn progress(&self) -> Progress;
}

/// Build a fresh state for `action`, clearing all coloring in `arena`.
///
/// `start` and `target` are node values; an unknown or missing start falls
/// back to the lowest-valued node.
pub fn create(
    action: Action,
    arena: &mut GraphArena,
    start: Option<u32>,
    target: Option<u32>,
) -> Box<dyn AlgorithmState> {
    arena.clear_marks();

    let start_index = start
        .and_then(|v| arena.find_by_value(v))
        .or_else(|| arena.lowest_value());
    if let Some(index) = start_index {
        arena.set_node_color(index, NodeColor::Highlighted);
    }

    let count = arena.node_count();
    match action {
        Action::DepthFirstSearch => {
            Box::new(Traversal::new(TraversalKind::Depth, count, start_index))
        }
        Action::BreadthFirstSearch => {
            Box::new(Traversal::new(TraversalKind::Breadth, count, start_index))
        }
        Action::Dijkstra => {
            let target_index = target.and_then(|v| arena.find_by_value(v));
            Box::new(Dijkstra::new(count, start_index, target_index))
        }
    }
}
