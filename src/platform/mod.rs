pub mod canvas;
pub mod canvas_cairo;
pub mod window_x11;
