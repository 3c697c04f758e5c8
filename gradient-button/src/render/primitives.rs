//! Render primitives

use crate::core::{Color, PixelRect};

/// A drawable primitive, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Solid rectangle
    FillRect {
        rect: PixelRect,
        color: Color,
    },
    /// One-pixel line; both endpoints are painted
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    /// One-pixel outline along the inside of `rect`
    StrokeRect {
        rect: PixelRect,
        color: Color,
    },
}

/// Render command list for a single frame
#[derive(Debug, Clone, Default)]
pub struct RenderList {
    pub clear_color: Color,
    pub primitives: Vec<Primitive>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded primitives and start a frame cleared to `color`
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.primitives.clear();
    }

    pub fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.primitives.push(Primitive::FillRect { rect, color });
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.primitives.push(Primitive::Line { x1, y1, x2, y2, color });
    }

    pub fn stroke_rect(&mut self, rect: PixelRect, color: Color) {
        self.primitives.push(Primitive::StrokeRect { rect, color });
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
