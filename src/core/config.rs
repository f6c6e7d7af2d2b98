/// Visual and behavioral constants, plus the runtime sketch configuration.

use super::types::{Action, Vec2};

// --- Visual colors (hex) ---
pub const BG_COLOR: u32 = 0x0D1117;
pub const NODE_UNVISITED: u32 = 0x30363D;
pub const NODE_VISITED: u32 = 0x2ECC71;
pub const NODE_CURRENT: u32 = 0xE94560;
pub const NODE_HIGHLIGHTED: u32 = 0x4A90D9;
pub const NODE_BORDER: u32 = 0x8B949E;
pub const EDGE_DEFAULT: u32 = 0x8E8EA0;
pub const EDGE_TRAVERSED: u32 = 0x2ECC71;
pub const EDGE_REJECTED: u32 = 0x5C2430;
pub const TEXT_PRIMARY: u32 = 0xE6EDF3;
pub const TEXT_SECONDARY: u32 = 0x8B949E;

// --- Node / edge sizes ---
pub const NODE_RADIUS: f64 = 30.0;
pub const NODE_LABEL_SIZE: f64 = 14.0;
pub const EDGE_WIDTH: f64 = 10.0;
pub const EDGE_LABEL_SIZE: f64 = 11.0;
pub const ARROW_DOT_RADIUS: f64 = 5.0;

// --- Graph ---
pub const SPAWN_X: f64 = 400.0;
pub const SPAWN_Y: f64 = 400.0;
pub const DEFAULT_NUMBER_OF_NODES: usize = 6;
pub const LAYOUT_MARGIN: f64 = 20.0;

// --- Input ---
pub const INPUT_DELAY_SECS: f64 = 0.1;

// --- Window ---
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 800;
pub const FRAME_MS: u64 = 16;

pub fn spawn_point() -> Vec2 {
    Vec2::new(SPAWN_X, SPAWN_Y)
}

/// Runtime configuration injected into a [`crate::graph::graph::Graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Number of nodes spawned on every reset
    pub size: usize,
    pub action: Action,
    /// Drawable area (width, height)
    pub bounds: (f64, f64),
    /// Value of the node the algorithms start from; lowest value when unset
    pub start: Option<u32>,
    /// Dijkstra stops once this node is finalized; runs to exhaustion when unset
    pub target: Option<u32>,
}

impl SketchConfig {
    pub fn new(size: usize, action: Action, bounds: (f64, f64)) -> Self {
        Self {
            size,
            action,
            bounds,
            start: None,
            target: None,
        }
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_NUMBER_OF_NODES,
            Action::DepthFirstSearch,
            (WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64),
        )
    }
}
