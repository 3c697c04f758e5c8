//! Per-frame state machine, independent of any window or GPU

use crate::core::{Color, InputEvent};
use crate::render::RenderList;
use crate::runtime::OffsetReceiver;
use crate::widgets::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal; entered on [`InputEvent::Quit`]
    Stopped,
}

/// Owns the button and decides what each frame looks like
pub struct FrameLoop {
    state: LoopState,
    button: Button,
    clear_color: Color,
    offsets: OffsetReceiver,
}

impl FrameLoop {
    pub fn new(button: Button, clear_color: Color, offsets: OffsetReceiver) -> Self {
        Self {
            state: LoopState::Running,
            button,
            clear_color,
            offsets,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Apply one input. Inputs arriving after a quit are ignored.
    pub fn handle_input(&mut self, event: InputEvent) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }
        match event {
            InputEvent::Quit => {
                log::info!("quit requested");
                self.state = LoopState::Stopped;
            }
            InputEvent::PointerMotion { x, y } => {
                if self.button.update_hover(x, y) {
                    log::trace!("hover changed to {}", self.button.is_hovered());
                }
            }
            InputEvent::Other => {}
        }
        self.state
    }

    /// Apply queued inputs in order, stopping at the first quit
    pub fn drain<I>(&mut self, events: I) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_input(event) == LoopState::Stopped {
                break;
            }
        }
        self.state
    }

    /// Take the newest ticker value if there is one; otherwise keep the
    /// current offset. Returns whether the offset was updated.
    pub fn adopt_offset(&mut self) -> bool {
        match self.offsets.try_latest() {
            Some(offset) => {
                self.button.set_gradient_offset(offset);
                true
            }
            None => false,
        }
    }

    /// Record the frame: clear, then the button
    pub fn compose(&self, list: &mut RenderList) {
        list.clear(self.clear_color);
        self.button.draw(list);
    }

    /// Offset update followed by [`FrameLoop::compose`]
    pub fn advance(&mut self, list: &mut RenderList) {
        self.adopt_offset();
        self.compose(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;
    use crate::runtime::{offset_channel, OffsetSender};
    use std::time::{Duration, Instant};

    fn frame_loop() -> (OffsetSender, FrameLoop) {
        let (sender, receiver) = offset_channel(0);
        (sender, FrameLoop::new(Button::default(), Color::WHITE, receiver))
    }

    #[test]
    fn test_pointer_motion_updates_hover() {
        let (_tx, mut frame) = frame_loop();
        frame.handle_input(InputEvent::PointerMotion { x: 350, y: 250 });
        assert!(frame.button().is_hovered());
        frame.handle_input(InputEvent::PointerMotion { x: 10, y: 10 });
        assert!(!frame.button().is_hovered());
        frame.handle_input(InputEvent::Other);
        assert!(!frame.button().is_hovered());
        assert!(frame.is_running());
    }

    #[test]
    fn test_quit_stops_draining() {
        let (_tx, mut frame) = frame_loop();
        let state = frame.drain([
            InputEvent::PointerMotion { x: 400, y: 275 },
            InputEvent::Quit,
            InputEvent::PointerMotion { x: 0, y: 0 },
        ]);

        assert_eq!(state, LoopState::Stopped);
        // the motion after the quit was never applied
        assert!(frame.button().is_hovered());
    }

    #[test]
    fn test_stopped_is_terminal() {
        let (_tx, mut frame) = frame_loop();
        frame.handle_input(InputEvent::Quit);
        assert_eq!(frame.handle_input(InputEvent::PointerMotion { x: 400, y: 275 }), LoopState::Stopped);
        assert!(!frame.button().is_hovered());
        assert!(!frame.is_running());
    }

    #[test]
    fn test_adopts_latest_offset_or_keeps_previous() {
        let (tx, mut frame) = frame_loop();
        assert!(!frame.adopt_offset());
        assert_eq!(frame.button().gradient_offset(), 0);

        tx.publish(7);
        tx.publish(8);
        assert!(frame.adopt_offset());
        assert_eq!(frame.button().gradient_offset(), 8);

        assert!(!frame.adopt_offset());
        assert_eq!(frame.button().gradient_offset(), 8);
    }

    #[test]
    fn test_advance_is_bounded_without_ticker_value() {
        let (_tx, mut frame) = frame_loop();
        let mut list = RenderList::new();
        let start = Instant::now();
        frame.advance(&mut list);
        assert!(start.elapsed() < Duration::from_millis(100));
        assert_eq!(frame.button().gradient_offset(), 0);
    }

    #[test]
    fn test_compose_clears_to_white_then_draws_button() {
        let (_tx, mut frame) = frame_loop();
        let mut list = RenderList::new();
        list.line(0, 0, 1, 1, Color::TRANSPARENT);

        frame.compose(&mut list);
        assert_eq!(list.clear_color, Color::WHITE);
        assert!(matches!(list.primitives[0], Primitive::FillRect { .. }));
        assert_eq!(list.len(), 21);

        frame.handle_input(InputEvent::PointerMotion { x: 400, y: 275 });
        frame.compose(&mut list);
        assert_eq!(list.len(), 26);
    }
}
