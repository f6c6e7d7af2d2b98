/// Node arena and edge list shared between the graph and its algorithm state.

use crate::core::types::*;
use crate::graph::graph_edge::Edge;
use crate::graph::graph_node::Node;

/// Owns every node; edges refer to nodes by arena index only.
#[derive(Debug, Clone, Default)]
pub struct GraphArena {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn find_by_value(&self, value: u32) -> Option<NodeIndex> {
        self.nodes.iter().position(|n| n.value() == value)
    }

    /// Index of the node with the lowest value.
    pub fn lowest_value(&self) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .enumerate()
            .min_by_key(|(_, n)| n.value())
            .map(|(i, _)| i)
    }

    /// Nodes reachable from `from` in one hop, with the edge used, ordered by
    /// ascending node value then edge index.
    pub fn neighbors(&self, from: NodeIndex) -> Vec<(NodeIndex, EdgeIndex)> {
        let mut out: Vec<(NodeIndex, EdgeIndex)> = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.other(from).map(|n| (n, i)))
            .filter(|&(n, _)| n < self.nodes.len())
            .collect();
        out.sort_by_key(|&(n, e)| (self.nodes[n].value(), e));
        out
    }

    pub fn set_node_color(&mut self, index: NodeIndex, color: NodeColor) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.set_color(color);
        }
    }

    pub fn set_edge_color(&mut self, index: EdgeIndex, color: EdgeColor) {
        if let Some(edge) = self.edges.get_mut(index) {
            edge.set_color(color);
        }
    }

    /// Mark an edge as rejected unless it is already part of the traversal tree.
    pub fn reject_edge(&mut self, index: EdgeIndex) {
        if let Some(edge) = self.edges.get_mut(index) {
            if edge.color() != EdgeColor::Traversed {
                edge.set_color(EdgeColor::Rejected);
            }
        }
    }

    /// Restore every node and edge to its untouched color.
    pub fn clear_marks(&mut self) {
        for node in &mut self.nodes {
            node.set_color(NodeColor::Unvisited);
        }
        for edge in &mut self.edges {
            edge.set_color(EdgeColor::Default);
        }
    }
}
