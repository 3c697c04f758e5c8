//! Core types shared by widgets, rendering and the frame loop

mod color;
mod geometry;
mod events;

pub use color::*;
pub use geometry::*;
pub use events::*;
