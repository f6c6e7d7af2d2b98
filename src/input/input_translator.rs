/// Translates raw device events into debounced, one-shot per-frame signals.

use crate::core::config;
use crate::core::types::{Key, KeyCode, MouseButton, RawEvent, Vec2};
use std::time::{Duration, Instant};

/// A backend that yields raw device events and knows where the pointer is.
pub trait RawEventSource {
    /// Next pending event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<RawEvent>;

    fn pointer_position(&self) -> Vec2;
}

/// Input snapshot for the current frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub left_pressed: bool,
    pub left_released: bool,
    pub last_key: Option<Key>,
    pub pointer: Vec2,
    /// Raw button state, tracked from every press/release regardless of debounce
    pub left_held: bool,
    /// Sticky: once a close event arrives it stays set.
    pub close_requested: bool,
}

pub struct InputTranslator {
    input_delay: Duration,
    last_accepted: Option<Instant>,
    frame: FrameInput,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs_f64(config::INPUT_DELAY_SECS))
    }

    pub fn with_delay(input_delay: Duration) -> Self {
        Self {
            input_delay,
            last_accepted: None,
            frame: FrameInput::default(),
        }
    }

    /// Drain `source` and build this frame's snapshot.
    pub fn poll(&mut self, source: &mut dyn RawEventSource) -> &FrameInput {
        self.poll_at(source, Instant::now())
    }

    /// Same as [`poll`](Self::poll) with an explicit clock reading.
    ///
    /// The debounce gate is checked once per poll: when it is open every
    /// press, release and key event drained in this poll is accepted, so a
    /// key press and the text it produces arrive together.
    pub fn poll_at(&mut self, source: &mut dyn RawEventSource, now: Instant) -> &FrameInput {
        self.frame.left_pressed = false;
        self.frame.left_released = false;
        self.frame.last_key = None;

        let open = self.gate_open(now);
        let mut accepted = false;

        while let Some(event) = source.poll_event() {
            match event {
                RawEvent::Closed => {
                    log::info!("Close requested");
                    self.frame.close_requested = true;
                }
                RawEvent::ButtonPressed(button, _) => {
                    if button == MouseButton::Left {
                        self.frame.left_held = true;
                    }
                    accepted |= open;
                    if open && button == MouseButton::Left {
                        self.frame.left_pressed = true;
                    }
                }
                RawEvent::ButtonReleased(button, _) => {
                    if button == MouseButton::Left {
                        self.frame.left_held = false;
                    }
                    accepted |= open;
                    if open && button == MouseButton::Left {
                        self.frame.left_released = true;
                    }
                }
                RawEvent::KeyPressed(code) => {
                    accepted |= open;
                    if open {
                        match code {
                            KeyCode::Enter => self.frame.last_key = Some(Key::Enter),
                            KeyCode::Backspace => self.frame.last_key = Some(Key::Backspace),
                            KeyCode::Other(_) => {}
                        }
                    }
                }
                RawEvent::TextEntered(codepoint) => {
                    accepted |= open;
                    if open && codepoint < 0x80 {
                        if let Some(c) = char::from_u32(codepoint) {
                            self.frame.last_key = Some(Key::Char(c));
                        }
                    }
                }
            }
        }

        if accepted {
            self.last_accepted = Some(now);
        } else if !open {
            log::trace!("Input dropped by debounce");
        }

        self.frame.pointer = source.pointer_position();
        &self.frame
    }

    pub fn should_close(&self) -> bool {
        self.frame.close_requested
    }

    fn gate_open(&self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.input_delay,
            None => true,
        }
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new()
    }
}
