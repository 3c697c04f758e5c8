//! Primitive tessellation into coloured quads

use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexStepMode};
use crate::core::{Color, PixelRect};
use crate::render::{Primitive, RenderList};

/// Vertex for 2D rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,  // position
        1 => Float32x4,  // color
    ];

    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Turns a [`RenderList`] into indexed triangle geometry in normalised
/// device coordinates.
///
/// Coordinates are logical pixels: pixel `(x, y)` covers the square from
/// `(x, y)` to `(x + 1, y + 1)` of a `viewport`-sized canvas whose origin is
/// the top-left corner.
pub struct Tessellator {
    viewport: (f32, f32),
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Tessellator {
    pub fn new(viewport: (f32, f32)) -> Self {
        Self {
            viewport,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: (f32, f32)) {
        self.viewport = viewport;
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Rebuild geometry for `list`, replacing whatever was there
    pub fn build(&mut self, list: &RenderList) {
        self.clear();
        for primitive in &list.primitives {
            match *primitive {
                Primitive::FillRect { rect, color } => self.push_rect(rect, color),
                Primitive::Line { x1, y1, x2, y2, color } => self.push_line(x1, y1, x2, y2, color),
                Primitive::StrokeRect { rect, color } => self.push_outline(rect, color),
            }
        }
    }

    fn push_rect(&mut self, rect: PixelRect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let x1 = rect.x as f32;
        let y1 = rect.y as f32;
        let x2 = (rect.x + rect.width) as f32;
        let y2 = (rect.y + rect.height) as f32;
        self.push_quad([[x1, y1], [x2, y1], [x2, y2], [x1, y2]], color);
    }

    fn push_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        if x1 == x2 || y1 == y2 {
            let left = x1.min(x2);
            let top = y1.min(y2);
            let rect = PixelRect::new(left, top, (x1 - x2).abs() + 1, (y1 - y2).abs() + 1);
            self.push_rect(rect, color);
            return;
        }

        // Diagonal: a one-pixel-wide quad between pixel centres, extended
        // half a pixel past each endpoint.
        let (ax, ay) = (x1 as f32 + 0.5, y1 as f32 + 0.5);
        let (bx, by) = (x2 as f32 + 0.5, y2 as f32 + 0.5);
        let (dx, dy) = (bx - ax, by - ay);
        let len = (dx * dx + dy * dy).sqrt();
        let (ux, uy) = (dx / len * 0.5, dy / len * 0.5);
        let (nx, ny) = (-uy, ux);
        self.push_quad(
            [
                [ax - ux + nx, ay - uy + ny],
                [bx + ux + nx, by + uy + ny],
                [bx + ux - nx, by + uy - ny],
                [ax - ux - nx, ay - uy - ny],
            ],
            color,
        );
    }

    fn push_outline(&mut self, rect: PixelRect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let PixelRect { x, y, width, height } = rect;
        self.push_rect(PixelRect::new(x, y, width, 1), color);
        if height > 1 {
            self.push_rect(PixelRect::new(x, y + height - 1, width, 1), color);
        }
        if height > 2 {
            self.push_rect(PixelRect::new(x, y + 1, 1, height - 2), color);
            if width > 1 {
                self.push_rect(PixelRect::new(x + width - 1, y + 1, 1, height - 2), color);
            }
        }
    }

    fn push_quad(&mut self, corners: [[f32; 2]; 4], color: Color) {
        let base = self.vertices.len() as u32;
        let (w, h) = self.viewport;
        let c = color.to_array();

        for [px, py] in corners {
            // Convert to NDC (-1 to 1)
            self.vertices.push(Vertex {
                position: [(px / w) * 2.0 - 1.0, 1.0 - (py / h) * 2.0],
                color: c,
            });
        }

        self.indices.extend_from_slice(&[
            base, base + 1, base + 2,
            base, base + 2, base + 3,
        ]);
    }
}
