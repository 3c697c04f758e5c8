//! Startup errors

use thiserror::Error;

/// Everything that can stop the demo before its first frame
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not start background runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("could not initialize event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("could not create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("could not create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("could not create renderer: no compatible GPU adapter")]
    NoAdapter,

    #[error("could not create renderer: surface supports no texture format on this adapter")]
    UnsupportedSurface,

    #[error("could not create renderer: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, AppError>;
