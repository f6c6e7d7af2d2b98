/// Depth-first and breadth-first traversal as step-wise state machines.

use super::{AlgorithmState, Progress, Status};
use crate::core::types::*;
use crate::graph::graph_arena::GraphArena;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Frontier is a stack
    Depth,
    /// Frontier is a queue
    Breadth,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    node: NodeIndex,
    via: Option<EdgeIndex>,
}

pub struct Traversal {
    kind: TraversalKind,
    status: Status,
    frontier: VecDeque<Entry>,
    visited: Vec<bool>,
    // BFS enqueues each node once
    discovered: Vec<bool>,
    current: Option<NodeIndex>,
    order: Vec<NodeIndex>,
}

impl Traversal {
    pub fn new(kind: TraversalKind, node_count: usize, start: Option<NodeIndex>) -> Self {
        let mut traversal = Self {
            kind,
            status: Status::NotStarted,
            frontier: VecDeque::new(),
            visited: vec![false; node_count],
            discovered: vec![false; node_count],
            current: None,
            order: Vec::new(),
        };
        if let Some(start) = start.filter(|&s| s < node_count) {
            traversal.discovered[start] = true;
            traversal.frontier.push_back(Entry {
                node: start,
                via: None,
            });
        }
        traversal
    }

    fn pop(&mut self) -> Option<Entry> {
        match self.kind {
            TraversalKind::Depth => self.frontier.pop_back(),
            TraversalKind::Breadth => self.frontier.pop_front(),
        }
    }

    fn finish(&mut self, arena: &mut GraphArena) {
        if let Some(last) = self.current.take() {
            arena.set_node_color(last, NodeColor::Visited);
        }
        self.status = Status::Completed;
        log::info!(
            "{} completed after visiting {} node(s)",
            self.action(),
            self.order.len()
        );
    }

    fn expand(&mut self, arena: &mut GraphArena, node: NodeIndex) {
        let neighbors = arena.neighbors(node);
        match self.kind {
            TraversalKind::Depth => {
                // Pushed highest value first so the lowest value is popped next
                for &(next, edge) in neighbors.iter().rev() {
                    if self.visited[next] {
                        arena.reject_edge(edge);
                    } else {
                        self.discovered[next] = true;
                        self.frontier.push_back(Entry {
                            node: next,
                            via: Some(edge),
                        });
                        arena.set_node_color(next, NodeColor::Highlighted);
                    }
                }
            }
            TraversalKind::Breadth => {
                for &(next, edge) in &neighbors {
                    if self.discovered[next] {
                        arena.reject_edge(edge);
                    } else {
                        self.discovered[next] = true;
                        self.frontier.push_back(Entry {
                            node: next,
                            via: Some(edge),
                        });
                        arena.set_node_color(next, NodeColor::Highlighted);
                    }
                }
            }
        }
    }
}

impl AlgorithmState for Traversal {
    fn action(&self) -> Action {
        match self.kind {
            TraversalKind::Depth => Action::DepthFirstSearch,
            TraversalKind::Breadth => Action::BreadthFirstSearch,
        }
    }

    fn status(&self) -> Status {
        self.status
    }

    fn step(&mut self, arena: &mut GraphArena) -> bool {
        if self.status == Status::Completed {
            return true;
        }
        self.status = Status::Running;

        // Stale stack entries are skipped within the same step
        let entry = loop {
            match self.pop() {
                None => {
                    self.finish(arena);
                    return true;
                }
                Some(entry) if self.visited[entry.node] => {
                    if let Some(edge) = entry.via {
                        arena.reject_edge(edge);
                    }
                }
                Some(entry) => break entry,
            }
        };

        if let Some(previous) = self.current.replace(entry.node) {
            arena.set_node_color(previous, NodeColor::Visited);
        }
        self.visited[entry.node] = true;
        self.order.push(entry.node);
        arena.set_node_color(entry.node, NodeColor::Current);
        if let Some(edge) = entry.via {
            arena.set_edge_color(edge, EdgeColor::Traversed);
        }
        log::debug!("{} visits node {}", self.action(), entry.node);

        self.expand(arena, entry.node);
        false
    }

    fn progress(&self) -> Progress {
        let mut frontier: Vec<NodeIndex> = self.frontier.iter().map(|e| e.node).collect();
        if self.kind == TraversalKind::Depth {
            frontier.reverse();
        }
        Progress {
            status: self.status,
            current: self.current,
            visited: self.visited.clone(),
            frontier,
            distances: Vec::new(),
            order: self.order.clone(),
        }
    }
}
