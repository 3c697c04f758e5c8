//! Application entry point

mod config;
mod context;
mod frame;
mod window;

pub use config::*;
pub use context::*;
pub use frame::*;
pub use window::*;

use winit::event_loop::EventLoop;
use crate::error::{AppError, Result};
use crate::runtime::GradientTicker;

/// Open the window and run until it is closed.
///
/// Startup order is event loop, ticker, window, renderer; shutdown runs
/// the other way round.
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    log::info!("event loop initialized");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("gradient-ticker")
        .enable_time()
        .build()
        .map_err(AppError::Runtime)?;
    let offsets = GradientTicker::spawn(runtime.handle(), config.tick_interval);

    let mut app = ButtonApp::new(config, offsets);
    let loop_result = event_loop.run_app(&mut app);
    let app_result = app.finish();
    log::debug!("event loop shut down");

    runtime.shutdown_background();

    app_result?;
    loop_result?;
    Ok(())
}
