//! Custom cursor follower state.
//!
//! Tracks the last pointer position and whether the pointer is over an
//! interactive element. Rendering is skipped entirely when motion is
//! reduced, so nothing here depends on `MotionMode`.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Elements that grow the cursor and show the "View" label.
pub const INTERACTIVE_SELECTOR: &str = "button, a, [data-hover=\"true\"]";

/// Off-screen start so the follower is hidden until the first move.
pub const OFFSCREEN: f64 = -100.0;

pub const REST_SIZE_PX: u32 = 48;
pub const HOVER_SIZE_PX: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self { x: OFFSCREEN, y: OFFSCREEN, hovering: false }
    }
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Pointer entered an element; `interactive` says whether it (or an
    /// ancestor) matches `INTERACTIVE_SELECTOR`.
    pub fn pointer_over(&mut self, interactive: bool) {
        self.hovering = interactive;
    }

    /// Pointer left an element. Leaving an interactive element into another
    /// interactive one keeps the hover.
    pub fn pointer_out(&mut self, interactive: bool) {
        if !interactive {
            self.hovering = false;
        }
    }

    #[must_use]
    pub fn size_px(&self) -> u32 {
        if self.hovering { HOVER_SIZE_PX } else { REST_SIZE_PX }
    }

    /// CSS transform centering the follower on the pointer.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", self.x, self.y)
    }
}
