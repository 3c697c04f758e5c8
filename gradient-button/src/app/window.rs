//! Window management and event loop

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowAttributes, WindowId},
};
use crate::app::{AppConfig, AppContext, FrameLoop, LoopState};
use crate::core::InputEvent;
use crate::error::{AppError, Result};
use crate::render::{FrameOutcome, GpuRenderer, RenderList};
use crate::runtime::OffsetReceiver;

/// Map a platform event onto the inputs the frame loop understands.
/// Cursor positions are converted to logical pixels.
pub fn map_event(event: &WindowEvent, scale_factor: f64) -> InputEvent {
    match event {
        WindowEvent::CloseRequested => InputEvent::Quit,
        WindowEvent::CursorMoved { position, .. } => pointer_motion(*position, scale_factor),
        _ => InputEvent::Other,
    }
}

/// Physical cursor position to a pointer event in floored logical pixels
pub fn pointer_motion(position: PhysicalPosition<f64>, scale_factor: f64) -> InputEvent {
    let logical = position.to_logical::<f64>(scale_factor);
    InputEvent::pointer(logical.x, logical.y)
}

/// Main application handler
pub struct ButtonApp {
    config: AppConfig,
    frame: FrameLoop,
    context: Option<AppContext<Arc<Window>, GpuRenderer>>,
    render_list: RenderList,
    next_frame: Instant,
    redraw_pending: bool,
    failure: Option<AppError>,
}

impl ButtonApp {
    pub fn new(config: AppConfig, offsets: OffsetReceiver) -> Self {
        let frame = FrameLoop::new(config.initial_button(), config.clear_color, offsets);
        Self {
            config,
            frame,
            context: None,
            render_list: RenderList::new(),
            next_frame: Instant::now(),
            redraw_pending: false,
            failure: None,
        }
    }

    /// Release window and renderer, then report any startup failure
    pub fn finish(mut self) -> Result<()> {
        self.release();
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_context(&self, event_loop: &ActiveEventLoop) -> Result<AppContext<Arc<Window>, GpuRenderer>> {
        let window_attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(LogicalSize::new(self.config.window.width, self.config.window.height))
            .with_resizable(self.config.window.resizable)
            .with_visible(true);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        log::info!("window created ({}x{} @ {:.2}x)", self.config.window.width, self.config.window.height, window.scale_factor());

        let renderer = pollster::block_on(GpuRenderer::new(window.clone()))?;
        log::info!("renderer created");

        Ok(AppContext::new(window, renderer))
    }

    fn release(&mut self) {
        if let Some(mut context) = self.context.take() {
            context.teardown();
        }
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        self.release();
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.redraw_pending = false;
        let Some(renderer) = self.context.as_mut().and_then(|c| c.renderer_mut()) else {
            return;
        };

        self.frame.advance(&mut self.render_list);
        let outcome = renderer.render(&self.render_list);
        self.next_frame = Instant::now() + self.config.frame_interval;

        if outcome == FrameOutcome::Fatal {
            self.stop(event_loop);
        }
    }
}

impl ApplicationHandler for ButtonApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() || !self.frame.is_running() {
            return;
        }

        match self.create_context(event_loop) {
            Ok(context) => {
                self.context = Some(context);
                self.next_frame = Instant::now();
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
            Err(err) => {
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(scale_factor) = self.context.as_ref().and_then(|c| c.window()).map(|w| w.scale_factor()) else {
            return;
        };

        if self.frame.handle_input(map_event(&event, scale_factor)) == LoopState::Stopped {
            self.stop(event_loop);
            return;
        }

        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.context.as_mut().and_then(|c| c.renderer_mut()) {
                    renderer.resize((physical_size.width, physical_size.height));
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = self.context.as_mut().and_then(|c| c.renderer_mut()) {
                    renderer.set_scale_factor(scale_factor);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame.is_running() {
            return;
        }
        let Some(window) = self.context.as_ref().and_then(|c| c.window()) else {
            return;
        };

        if !self.redraw_pending && Instant::now() >= self.next_frame {
            window.request_redraw();
            self.redraw_pending = true;
        }

        if self.redraw_pending {
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release();
    }
}
