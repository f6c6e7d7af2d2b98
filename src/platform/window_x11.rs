/// X11 window implementation with Cairo surface; doubles as the raw input source.

use crate::core::types::{KeyCode, MouseButton, RawEvent, Vec2};
use crate::input::input_translator::RawEventSource;
use std::collections::VecDeque;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;
use x11::{keysym, xlib};

pub struct WindowX11 {
    display: *mut xlib::Display,
    window: xlib::Window,
    width: i32,
    height: i32,
    wm_delete_window: xlib::Atom,
    screen: i32,

    pointer: Vec2,

    // Translated events waiting to be polled
    pending: VecDeque<RawEvent>,
}

impl WindowX11 {
    pub fn new() -> Self {
        Self {
            display: ptr::null_mut(),
            window: 0,
            width: 0,
            height: 0,
            wm_delete_window: 0,
            screen: 0,
            pointer: Vec2::default(),
            pending: VecDeque::new(),
        }
    }

    pub fn create(&mut self, width: i32, height: i32, title: &str) -> bool {
        let (Ok(title_c), Ok(wm_delete)) = (CString::new(title), CString::new("WM_DELETE_WINDOW"))
        else {
            log::error!("Window title contains a NUL byte");
            return false;
        };

        unsafe {
            self.display = xlib::XOpenDisplay(ptr::null());
            if self.display.is_null() {
                log::error!("Failed to open X11 display");
                return false;
            }

            self.screen = xlib::XDefaultScreen(self.display);
            let root = xlib::XRootWindow(self.display, self.screen);

            self.window = xlib::XCreateSimpleWindow(
                self.display,
                root,
                0,
                0,
                width as u32,
                height as u32,
                0,
                xlib::XBlackPixel(self.display, self.screen),
                xlib::XBlackPixel(self.display, self.screen),
            );

            self.width = width;
            self.height = height;

            xlib::XStoreName(self.display, self.window, title_c.as_ptr());

            xlib::XSelectInput(
                self.display,
                self.window,
                xlib::ExposureMask
                    | xlib::ButtonPressMask
                    | xlib::ButtonReleaseMask
                    | xlib::PointerMotionMask
                    | xlib::KeyPressMask
                    | xlib::StructureNotifyMask,
            );

            // WM_DELETE_WINDOW protocol
            self.wm_delete_window =
                xlib::XInternAtom(self.display, wm_delete.as_ptr(), xlib::False);
            xlib::XSetWMProtocols(
                self.display,
                self.window,
                &mut self.wm_delete_window as *mut _,
                1,
            );

            xlib::XMapWindow(self.display, self.window);
            xlib::XFlush(self.display);

            true
        }
    }

    /// Create a Cairo context for the current window using cairo-sys FFI.
    pub fn create_cairo_context(&self) -> Option<cairo::Context> {
        if self.display.is_null() {
            return None;
        }

        unsafe {
            let visual = xlib::XDefaultVisual(self.display, self.screen);

            let surface_ptr = cairo_sys::cairo_xlib_surface_create(
                self.display,
                self.window,
                visual,
                self.width,
                self.height,
            );

            if surface_ptr.is_null() {
                return None;
            }

            let cr_ptr = cairo_sys::cairo_create(surface_ptr);
            // Surface is now referenced by the context, release our ref
            cairo_sys::cairo_surface_destroy(surface_ptr);

            if cr_ptr.is_null() {
                return None;
            }

            // Wrap the raw pointer in cairo-rs Context (takes ownership)
            Some(cairo::Context::from_raw_full(cr_ptr))
        }
    }

    /// Move every pending X11 event into the raw event queue.
    fn pump(&mut self) {
        if self.display.is_null() {
            return;
        }

        unsafe {
            while xlib::XPending(self.display) > 0 {
                let mut event: xlib::XEvent = std::mem::zeroed();
                xlib::XNextEvent(self.display, &mut event);

                match event.get_type() {
                    xlib::ButtonPress | xlib::ButtonRelease => {
                        let btn = event.button;
                        let position = Vec2::new(btn.x as f64, btn.y as f64);
                        self.pointer = position;

                        // Wheel buttons are not pointer clicks
                        let Some(button) = map_button(btn.button) else {
                            continue;
                        };
                        if event.get_type() == xlib::ButtonPress {
                            self.pending.push_back(RawEvent::ButtonPressed(button, position));
                        } else {
                            self.pending.push_back(RawEvent::ButtonReleased(button, position));
                        }
                    }
                    xlib::MotionNotify => {
                        let motion = event.motion;
                        self.pointer = Vec2::new(motion.x as f64, motion.y as f64);
                    }
                    xlib::KeyPress => {
                        let mut key = event.key;
                        let mut buffer = [0 as c_char; 8];
                        let mut sym: xlib::KeySym = 0;
                        let count = xlib::XLookupString(
                            &mut key,
                            buffer.as_mut_ptr(),
                            buffer.len() as c_int,
                            &mut sym,
                            ptr::null_mut(),
                        );

                        self.pending.push_back(RawEvent::KeyPressed(map_keysym(sym)));
                        if count == 1 {
                            let byte = buffer[0] as u8;
                            if (0x20..0x7F).contains(&byte) {
                                self.pending.push_back(RawEvent::TextEntered(byte as u32));
                            }
                        }
                    }
                    xlib::ConfigureNotify => {
                        let configure = event.configure;
                        self.width = configure.width;
                        self.height = configure.height;
                    }
                    xlib::ClientMessage => {
                        let cm = event.client_message;
                        if cm.data.get_long(0) as xlib::Atom == self.wm_delete_window {
                            self.pending.push_back(RawEvent::Closed);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    pub fn flush(&self) {
        if self.display.is_null() {
            return;
        }
        unsafe {
            xlib::XFlush(self.display);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl RawEventSource for WindowX11 {
    fn poll_event(&mut self) -> Option<RawEvent> {
        if self.pending.is_empty() {
            self.pump();
        }
        self.pending.pop_front()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }
}

impl Default for WindowX11 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WindowX11 {
    fn drop(&mut self) {
        unsafe {
            if !self.display.is_null() {
                xlib::XDestroyWindow(self.display, self.window);
                xlib::XCloseDisplay(self.display);
            }
        }
    }
}

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        1 => Some(MouseButton::Left),
        2 => Some(MouseButton::Middle),
        3 => Some(MouseButton::Right),
        4..=7 => None,
        other => Some(MouseButton::Other(other as u8)),
    }
}

fn map_keysym(sym: xlib::KeySym) -> KeyCode {
    match sym as u32 {
        keysym::XK_Return | keysym::XK_KP_Enter => KeyCode::Enter,
        keysym::XK_BackSpace => KeyCode::Backspace,
        other => KeyCode::Other(other),
    }
}
