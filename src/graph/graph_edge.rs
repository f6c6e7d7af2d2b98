/// Edge between two arena nodes; geometry is derived from the endpoints each frame.

use crate::core::types::*;
use crate::graph::graph_node::Node;

const COINCIDENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Edge {
    first: NodeIndex,
    second: NodeIndex,
    weight: u32,
    directed: bool,
    width: f64,
    color: EdgeColor,

    // Derived from endpoint positions
    origin: Vec2,
    length: f64,
    angle: f64,
}

impl Edge {
    pub fn new(
        first: NodeIndex,
        second: NodeIndex,
        weight: u32,
        directed: bool,
        width: f64,
        nodes: &[Node],
    ) -> Self {
        let mut edge = Self {
            first,
            second,
            weight,
            directed,
            width,
            color: EdgeColor::Default,
            origin: Vec2::default(),
            length: width,
            angle: 0.0,
        };
        edge.update(nodes);
        edge
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn color(&self) -> EdgeColor {
        self.color
    }

    pub fn set_color(&mut self, color: EdgeColor) {
        self.color = color;
    }

    /// Endpoint reached when leaving `from` along this edge, honoring direction.
    pub fn other(&self, from: NodeIndex) -> Option<NodeIndex> {
        if from == self.first {
            Some(self.second)
        } else if from == self.second && !self.directed {
            Some(self.first)
        } else {
            None
        }
    }

    /// Recompute length and angle from the endpoints' current positions.
    pub fn update(&mut self, nodes: &[Node]) {
        let (Some(a), Some(b)) = (nodes.get(self.first), nodes.get(self.second)) else {
            return;
        };
        self.origin = a.position();
        let (length, angle) = edge_geometry(a.position(), b.position(), self.width);
        self.length = length;
        self.angle = angle;
    }

    pub fn shape(&self) -> EdgeShape {
        EdgeShape {
            origin: self.origin,
            length: self.length,
            width: self.width,
            angle: self.angle,
            color: self.color,
            directed: self.directed,
            weight: self.weight,
        }
    }
}

/// Length (center distance plus padding) and angle of the segment `from -> to`.
/// Coincident endpoints yield `(padding, 0.0)`.
pub fn edge_geometry(from: Vec2, to: Vec2, padding: f64) -> (f64, f64) {
    let delta = to - from;
    let distance = delta.length();
    if !distance.is_finite() || distance < COINCIDENT_EPSILON {
        return (padding, 0.0);
    }
    (distance + padding, delta.y.atan2(delta.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(points: &[(f64, f64)]) -> Vec<Node> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Node::new(i as u32 + 1, Vec2::new(x, y), 1.0, 1000.0, 1000.0))
            .collect()
    }

    #[test]
    fn test_geometry_3_4_5() {
        let (length, angle) = edge_geometry(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 10.0);
        assert!((length - 15.0).abs() < 1e-12);
        assert!((angle - 4.0f64.atan2(3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_geometry_coincident_endpoints() {
        let p = Vec2::new(400.0, 400.0);
        let (length, angle) = edge_geometry(p, p, 10.0);
        assert_eq!(length, 10.0);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_geometry_vertical_and_left_quadrants() {
        let (_, up) = edge_geometry(Vec2::new(5.0, 5.0), Vec2::new(5.0, 0.0), 0.0);
        assert!((up + std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let (_, left) = edge_geometry(Vec2::new(5.0, 5.0), Vec2::new(0.0, 5.0), 0.0);
        assert!((left - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_update_follows_moved_endpoint() {
        let mut arena = nodes(&[(100.0, 100.0), (100.0, 100.0)]);
        let mut edge = Edge::new(0, 1, 1, false, 10.0, &arena);
        assert_eq!(edge.length(), 10.0);
        assert_eq!(edge.angle(), 0.0);

        arena[1].set_position(Vec2::new(103.0, 104.0));
        edge.update(&arena);
        assert!((edge.length() - 15.0).abs() < 1e-12);
        assert_eq!(edge.shape().origin, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_other_respects_direction() {
        let arena = nodes(&[(0.0, 0.0), (10.0, 0.0)]);
        let undirected = Edge::new(0, 1, 1, false, 10.0, &arena);
        assert_eq!(undirected.other(0), Some(1));
        assert_eq!(undirected.other(1), Some(0));

        let directed = Edge::new(0, 1, 1, true, 10.0, &arena);
        assert_eq!(directed.other(0), Some(1));
        assert_eq!(directed.other(1), None);
        assert_eq!(directed.other(2), None);
    }
}
