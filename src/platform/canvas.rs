/// Abstract drawing surface the graph submits its draw list to.

use crate::core::config;
use crate::core::types::{Color, DrawPrimitive, EdgeShape, NodeShape, Vec2};

pub trait Canvas {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);
    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64);

    /// Rectangle anchored at `origin`, rotated by `angle` radians around it,
    /// spanning `[-width/2, length - width/2]` along its axis.
    fn fill_rotated_rect(&self, origin: Vec2, length: f64, width: f64, angle: f64, color: Color);

    fn draw_text_centered(&self, center: Vec2, text: &str, size: f64, color: Color);

    /// Draw one draw-list entry.
    fn draw(&self, primitive: &DrawPrimitive) {
        match primitive {
            DrawPrimitive::Edge(edge) => draw_edge(self, edge),
            DrawPrimitive::Node(node) => draw_node(self, node),
        }
    }
}

fn draw_edge<C: Canvas + ?Sized>(canvas: &C, edge: &EdgeShape) {
    canvas.fill_rotated_rect(edge.origin, edge.length, edge.width, edge.angle, edge.color.fill());

    // Direction marker just outside the target circle
    if edge.directed {
        let offset = edge.span() - config::NODE_RADIUS - config::ARROW_DOT_RADIUS * 2.0;
        if offset > 0.0 {
            let tip = edge.origin + edge.direction() * offset;
            canvas.fill_circle(
                tip.x,
                tip.y,
                config::ARROW_DOT_RADIUS,
                Color::from_hex(config::TEXT_PRIMARY, 1.0),
            );
        }
    }

    canvas.draw_text_centered(
        edge.midpoint(),
        &edge.weight.to_string(),
        config::EDGE_LABEL_SIZE,
        Color::from_hex(config::TEXT_SECONDARY, 1.0),
    );
}

fn draw_node<C: Canvas + ?Sized>(canvas: &C, node: &NodeShape) {
    let (cx, cy) = (node.center.x, node.center.y);
    canvas.fill_circle(cx, cy, node.radius, node.color.fill());
    canvas.stroke_circle(cx, cy, node.radius, Color::from_hex(config::NODE_BORDER, 1.0), 2.0);
    canvas.draw_text_centered(
        node.center,
        &node.label,
        config::NODE_LABEL_SIZE,
        Color::from_hex(config::TEXT_PRIMARY, 1.0),
    );
}
