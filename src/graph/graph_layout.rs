/// Node placement and the demo topology built after every reset.

use crate::core::config;
use crate::core::types::*;

pub struct GraphLayout;

impl GraphLayout {
    pub fn new() -> Self {
        Self
    }

    /// Evenly spaced positions on a circle centered in `bounds`, starting at
    /// twelve o'clock and running clockwise.
    pub fn circle(&self, count: usize, bounds: (f64, f64), node_radius: f64) -> Vec<Vec2> {
        let (width, height) = bounds;
        let center = Vec2::new(width / 2.0, height / 2.0);
        if count <= 1 {
            return vec![center; count];
        }

        let ring = (width.min(height) / 2.0 - node_radius - config::LAYOUT_MARGIN).max(0.0);
        (0..count)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / count as f64
                    - std::f64::consts::FRAC_PI_2;
                center + Vec2::new(angle.cos(), angle.sin()) * ring
            })
            .collect()
    }

    /// Deterministic weighted edges `(value, value, weight)` over nodes `1..=count`:
    /// a ring plus a chord from every odd node two steps ahead.
    pub fn ring_with_chords(&self, count: usize) -> Vec<(u32, u32, u32)> {
        let n = count as u32;
        if n < 2 {
            return Vec::new();
        }

        let mut edges = Vec::new();
        let ring_len = if n == 2 { 1 } else { n };
        for i in 0..ring_len {
            let a = i + 1;
            let b = (i + 1) % n + 1;
            edges.push((a, b, (i * 7) % 9 + 1));
        }
        // Smaller rings would get chords that duplicate ring edges
        if n > 4 {
            for i in (0..n).step_by(2) {
                edges.push((i + 1, (i + 2) % n + 1, (i * 5) % 11 + 3));
            }
        }
        edges
    }
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self::new()
    }
}
