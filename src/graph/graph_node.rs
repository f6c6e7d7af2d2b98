/// Draggable, labeled circular node.

use crate::core::types::*;

#[derive(Debug, Clone)]
pub struct Node {
    value: u32,
    position: Vec2,
    radius: f64,
    color: NodeColor,

    // Containment bounds for drags
    area_width: f64,
    area_height: f64,

    dragging: bool,
}

impl Node {
    pub fn new(value: u32, position: Vec2, radius: f64, area_width: f64, area_height: f64) -> Self {
        let mut node = Self {
            value,
            position: Vec2::default(),
            radius,
            color: NodeColor::Unvisited,
            area_width,
            area_height,
            dragging: false,
        };
        node.set_position(position);
        node
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the node, clamped so the whole circle stays inside its area.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = Vec2 {
            x: clamp_axis(position.x, self.radius, self.area_width),
            y: clamp_axis(position.y, self.radius, self.area_height),
        };
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> NodeColor {
        self.color
    }

    pub fn set_color(&mut self, color: NodeColor) {
        self.color = color;
    }

    /// Hit test against the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Follow the pointer while a drag is in progress.
    pub fn update(&mut self, pointer: Vec2) {
        if self.dragging {
            self.set_position(pointer);
        }
    }

    pub fn shape(&self) -> NodeShape {
        NodeShape {
            center: self.position,
            radius: self.radius,
            color: self.color,
            label: self.value.to_string(),
        }
    }
}

fn clamp_axis(v: f64, radius: f64, extent: f64) -> f64 {
    if extent <= radius * 2.0 {
        return extent / 2.0;
    }
    if v.is_nan() {
        return extent / 2.0;
    }
    v.clamp(radius, extent - radius)
}
