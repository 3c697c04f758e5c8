//! Gradient Button - a single-window demo
//!
//! One button with a green-to-red gradient border and a hover outline,
//! drawn with wgpu inside a winit event loop. A background ticker feeds a
//! counter into the button through a single-slot handoff.

pub mod core;
pub mod widgets;
pub mod render;
pub mod runtime;
pub mod app;
pub mod error;
pub mod logging;

pub use app::{run, AppConfig, WindowConfig};
pub use error::AppError;
pub use widgets::{Button, GradientMode};
