/// Common type definitions shared by the graph, algorithm, input and platform layers.

use super::config;
use std::fmt;
use std::str::FromStr;

/// Index of a node in the graph's node arena
pub type NodeIndex = usize;

/// Index of an edge in the graph's edge list
pub type EdgeIndex = usize;

/// Algorithm driving the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    DepthFirstSearch,
    BreadthFirstSearch,
    Dijkstra,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::DepthFirstSearch => "DFS",
            Action::BreadthFirstSearch => "BFS",
            Action::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth" => Ok(Action::DepthFirstSearch),
            "bfs" | "breadth" => Ok(Action::BreadthFirstSearch),
            "dijkstra" => Ok(Action::Dijkstra),
            other => Err(format!("unknown algorithm '{}'", other)),
        }
    }
}

/// Visit state shown by a node's fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeColor {
    #[default]
    Unvisited,
    Visited,
    Current,
    /// Discovered and waiting in the frontier
    Highlighted,
}

impl NodeColor {
    pub fn fill(self) -> Color {
        let hex = match self {
            NodeColor::Unvisited => config::NODE_UNVISITED,
            NodeColor::Visited => config::NODE_VISITED,
            NodeColor::Current => config::NODE_CURRENT,
            NodeColor::Highlighted => config::NODE_HIGHLIGHTED,
        };
        Color::from_hex(hex, 1.0)
    }
}

/// Traversal state shown by an edge's fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeColor {
    #[default]
    Default,
    Traversed,
    Rejected,
}

impl EdgeColor {
    pub fn fill(self) -> Color {
        let hex = match self {
            EdgeColor::Default => config::EDGE_DEFAULT,
            EdgeColor::Traversed => config::EDGE_TRAVERSED,
            EdgeColor::Rejected => config::EDGE_REJECTED,
        };
        Color::from_hex(hex, 1.0)
    }
}

/// Geometry of a node as submitted to a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    pub center: Vec2,
    pub radius: f64,
    pub color: NodeColor,
    pub label: String,
}

/// Geometry of an edge as submitted to a canvas.
///
/// The rectangle starts at `origin` (the first node's center), is rotated by
/// `angle` and extends `width / 2` past both centers.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    pub origin: Vec2,
    pub length: f64,
    pub width: f64,
    pub angle: f64,
    pub color: EdgeColor,
    pub directed: bool,
    pub weight: u32,
}

impl EdgeShape {
    /// Unit vector pointing from the first endpoint to the second.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Distance between the two endpoint centers.
    pub fn span(&self) -> f64 {
        (self.length - self.width).max(0.0)
    }

    pub fn midpoint(&self) -> Vec2 {
        self.origin + self.direction() * (self.span() / 2.0)
    }
}

/// One entry of the per-frame draw list
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Edge(EdgeShape),
    Node(NodeShape),
}

/// 2D coordinate vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }
}

/// Pointer button carried by raw button events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Key code carried by raw key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Backspace,
    Other(u32),
}

/// Raw device event as produced by a windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    Closed,
    ButtonPressed(MouseButton, Vec2),
    ButtonReleased(MouseButton, Vec2),
    KeyPressed(KeyCode),
    /// Unicode codepoint of typed text
    TextEntered(u32),
}

/// Debounced key signal for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
}
