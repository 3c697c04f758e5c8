//! Background work feeding the frame loop

mod ticker;

pub use ticker::*;
