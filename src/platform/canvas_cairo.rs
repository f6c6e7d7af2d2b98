/// Cairo-based canvas implementation.

use crate::core::types::{Color, Vec2};
use crate::platform::canvas::Canvas;
use cairo::Context;
use std::f64::consts::PI;

pub struct CanvasCairo {
    cr: Context,
}

impl CanvasCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn circle_path(&self, cx: f64, cy: f64, radius: f64) {
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
    }
}

impl Canvas for CanvasCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.circle_path(cx, cy, radius);
        self.cr.fill().ok();
    }

    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.circle_path(cx, cy, radius);
        self.cr.stroke().ok();
    }

    fn fill_rotated_rect(&self, origin: Vec2, length: f64, width: f64, angle: f64, color: Color) {
        self.cr.save().ok();
        self.cr.translate(origin.x, origin.y);
        self.cr.rotate(angle);
        self.set_color(color);
        self.cr.rectangle(-width / 2.0, -width / 2.0, length, width);
        self.cr.fill().ok();
        self.cr.restore().ok();
    }

    fn draw_text_centered(&self, center: Vec2, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.cr
            .select_font_face("monospace", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.cr.set_font_size(size);
        let (dx, dy) = match self.cr.text_extents(text) {
            Ok(ext) => (
                ext.x_bearing() + ext.width() / 2.0,
                ext.y_bearing() + ext.height() / 2.0,
            ),
            Err(_) => (0.0, -size / 2.0),
        };
        self.cr.move_to(center.x - dx, center.y - dy);
        self.cr.show_text(text).ok();
    }
}
