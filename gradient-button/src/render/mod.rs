//! Frame recording and GPU presentation

mod primitives;
mod tessellate;
mod gpu;

pub use primitives::*;
pub use tessellate::*;
pub use gpu::*;
