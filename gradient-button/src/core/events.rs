//! Input events consumed by the frame loop

/// The closed set of inputs the frame loop reacts to.
///
/// Platform events are mapped into this type before they reach any
/// application state; anything the loop does not care about becomes
/// [`InputEvent::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,
    /// Pointer moved, in logical pixels relative to the window origin
    PointerMotion { x: i32, y: i32 },
    Other,
}

impl InputEvent {
    pub fn pointer(x: f64, y: f64) -> Self {
        InputEvent::PointerMotion {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }
}
