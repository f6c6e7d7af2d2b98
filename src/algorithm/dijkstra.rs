/// Dijkstra's shortest paths, one finalized node per step.

use super::{AlgorithmState, Progress, Status, INFINITY};
use crate::core::types::*;
use crate::graph::graph_arena::GraphArena;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Heap key: distance, then node value for deterministic ties.
type FrontierKey = Reverse<(u64, u32, NodeIndex)>;

pub struct Dijkstra {
    status: Status,
    distances: Vec<u64>,
    finalized: Vec<bool>,
    // Edge of the best known path into each node
    via: Vec<Option<EdgeIndex>>,
    frontier: BinaryHeap<FrontierKey>,
    current: Option<NodeIndex>,
    order: Vec<NodeIndex>,
    target: Option<NodeIndex>,
    start: Option<NodeIndex>,
}

impl Dijkstra {
    pub fn new(node_count: usize, start: Option<NodeIndex>, target: Option<NodeIndex>) -> Self {
        let mut dijkstra = Self {
            status: Status::NotStarted,
            distances: vec![INFINITY; node_count],
            finalized: vec![false; node_count],
            via: vec![None; node_count],
            frontier: BinaryHeap::new(),
            current: None,
            order: Vec::new(),
            target: target.filter(|&t| t < node_count),
            start: start.filter(|&s| s < node_count),
        };
        if let Some(start) = dijkstra.start {
            dijkstra.distances[start] = 0;
        }
        dijkstra
    }

    fn finish(&mut self, arena: &mut GraphArena) {
        if let Some(last) = self.current.take() {
            arena.set_node_color(last, NodeColor::Visited);
        }
        self.frontier.clear();
        self.status = Status::Completed;
        log::info!("Dijkstra completed after finalizing {} node(s)", self.order.len());
    }

    fn relax(&mut self, arena: &mut GraphArena, node: NodeIndex, distance: u64) {
        for (next, edge) in arena.neighbors(node) {
            if self.finalized[next] {
                arena.reject_edge(edge);
                continue;
            }
            let weight = arena.edges[edge].weight() as u64;
            let candidate = distance.saturating_add(weight);
            if candidate < self.distances[next] {
                if let Some(previous) = self.via[next].replace(edge) {
                    arena.reject_edge(previous);
                }
                self.distances[next] = candidate;
                self.frontier
                    .push(Reverse((candidate, arena.nodes[next].value(), next)));
                arena.set_node_color(next, NodeColor::Highlighted);
            } else if self.via[next] != Some(edge) {
                arena.reject_edge(edge);
            }
        }
    }
}

impl AlgorithmState for Dijkstra {
    fn action(&self) -> Action {
        Action::Dijkstra
    }

    fn status(&self) -> Status {
        self.status
    }

    fn step(&mut self, arena: &mut GraphArena) -> bool {
        if self.status == Status::Completed {
            return true;
        }
        if self.status == Status::NotStarted {
            if let Some(start) = self.start {
                self.frontier
                    .push(Reverse((0, arena.nodes[start].value(), start)));
            }
            self.status = Status::Running;
        }

        // Superseded heap entries are skipped within the same step
        let (distance, node) = loop {
            match self.frontier.pop() {
                None => {
                    self.finish(arena);
                    return true;
                }
                Some(Reverse((d, _, n))) if self.finalized[n] || d > self.distances[n] => {}
                Some(Reverse((d, _, n))) => break (d, n),
            }
        };

        if let Some(previous) = self.current.replace(node) {
            arena.set_node_color(previous, NodeColor::Visited);
        }
        self.finalized[node] = true;
        self.order.push(node);
        arena.set_node_color(node, NodeColor::Current);
        if let Some(edge) = self.via[node] {
            arena.set_edge_color(edge, EdgeColor::Traversed);
        }
        log::debug!("Dijkstra finalizes node {} at distance {}", node, distance);

        if self.target == Some(node) {
            self.finish(arena);
            return true;
        }

        self.relax(arena, node, distance);
        false
    }

    fn progress(&self) -> Progress {
        let mut pending: Vec<(u64, u32, NodeIndex)> = self
            .frontier
            .iter()
            .map(|Reverse(key)| *key)
            .filter(|&(d, _, n)| !self.finalized[n] && d == self.distances[n])
            .collect();
        pending.sort_unstable();
        pending.dedup();

        let mut frontier: Vec<NodeIndex> = pending.into_iter().map(|(_, _, n)| n).collect();
        if self.status == Status::NotStarted {
            frontier.extend(self.start);
        }

        Progress {
            status: self.status,
            current: self.current,
            visited: self.finalized.clone(),
            frontier,
            distances: self.distances.clone(),
            order: self.order.clone(),
        }
    }
}
