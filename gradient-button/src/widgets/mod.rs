//! Widgets

mod button;

pub use button::*;
