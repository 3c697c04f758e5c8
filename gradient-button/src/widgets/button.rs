//! Button widget with a gradient border and a hover outline

use crate::core::{Color, PixelRect};
use crate::render::RenderList;

/// How the gradient counter feeds into the border colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMode {
    /// Colour depends on stroke index only; the counter is tracked but unused
    #[default]
    Static,
    /// Stroke ratios are phase-shifted by the counter, cycling the border
    Animated,
}

/// The demo's single button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub bounds: PixelRect,
    pub fill_color: Color,
    /// Stored with the button but never painted
    pub border_color: Color,
    pub hover_color: Color,
    /// Number of one-pixel strokes in each border
    pub border_width: u32,
    pub gradient_mode: GradientMode,
    hovered: bool,
    gradient_offset: i32,
}

impl Button {
    pub fn new(bounds: PixelRect) -> Self {
        Self {
            bounds,
            fill_color: Color::rgb(0, 0, 255),
            border_color: Color::TRANSPARENT,
            hover_color: Color::rgb(255, 255, 0),
            border_width: 5,
            gradient_mode: GradientMode::Static,
            hovered: false,
            gradient_offset: 0,
        }
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    pub fn with_border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    pub fn with_gradient_mode(mut self, mode: GradientMode) -> Self {
        self.gradient_mode = mode;
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Recompute hover state from a pointer position. Returns `true` when
    /// the state flipped.
    pub fn update_hover(&mut self, x: i32, y: i32) -> bool {
        let hovered = self.bounds.contains_point(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    pub fn gradient_offset(&self) -> i32 {
        self.gradient_offset
    }

    pub fn set_gradient_offset(&mut self, offset: i32) {
        self.gradient_offset = offset;
    }

    /// Colour of gradient stroke `index`: green at the outer edge fading to
    /// red towards the centre.
    pub fn gradient_color(&self, index: u32) -> Color {
        let width = self.border_width;
        if width == 0 {
            return Color::rgb(0, 255, 0);
        }
        let step = match self.gradient_mode {
            GradientMode::Static => index as i64,
            GradientMode::Animated => {
                (index as i64 + self.gradient_offset as i64).rem_euclid(width as i64)
            }
        };
        let ratio = step as f32 / width as f32;
        Color::rgba(
            (255.0 * ratio).round() as u8,
            (255.0 * (1.0 - ratio)).round() as u8,
            0,
            255,
        )
    }

    /// Fill, then gradient border, then (when hovered) the hover outline
    pub fn draw(&self, list: &mut RenderList) {
        list.fill_rect(self.bounds, self.fill_color);
        self.draw_gradient_border(list);
        if self.hovered {
            self.draw_hover_border(list);
        }
    }

    /// Four lines per stroke, each stroke inset one pixel further than the
    /// last.
    pub fn draw_gradient_border(&self, list: &mut RenderList) {
        let PixelRect { x, y, width, height } = self.bounds;
        for index in 0..self.border_width {
            let color = self.gradient_color(index);
            let i = index as i32;
            let left = x + i;
            let top = y + i;
            let right = x + width - i - 1;
            let bottom = y + height - i - 1;

            list.line(left, top, right, top, color);
            list.line(left, bottom, right, bottom, color);
            list.line(left, top, left, bottom, color);
            list.line(right, top, right, bottom, color);
        }
    }

    /// Nested outlines in `hover_color`. Strokes that would collapse to an
    /// empty rectangle are skipped.
    pub fn draw_hover_border(&self, list: &mut RenderList) {
        for index in 0..self.border_width {
            let rect = self.bounds.inset(index as i32);
            if rect.is_empty() {
                break;
            }
            list.stroke_rect(rect, self.hover_color);
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new(PixelRect::new(350, 250, 100, 50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;

    fn stroke_colors(list: &RenderList) -> Vec<Color> {
        list.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_gradient_colors_for_width_five() {
        let button = Button::default();
        assert_eq!(button.gradient_color(0), Color::rgba(0, 255, 0, 255));
        assert_eq!(button.gradient_color(4), Color::rgba(204, 51, 0, 255));
    }

    #[test]
    fn test_static_gradient_ignores_offset() {
        let mut button = Button::default();
        let before: Vec<Color> = (0..5).map(|i| button.gradient_color(i)).collect();
        button.set_gradient_offset(3);
        let after: Vec<Color> = (0..5).map(|i| button.gradient_color(i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_animated_gradient_shifts_phase() {
        let mut button = Button::default().with_gradient_mode(GradientMode::Animated);
        button.set_gradient_offset(1);
        assert_eq!(button.gradient_color(0), Color::rgba(51, 204, 0, 255));
        assert_eq!(button.gradient_color(4), Color::rgba(0, 255, 0, 255));

        button.set_gradient_offset(-1);
        assert_eq!(button.gradient_color(0), Color::rgba(204, 51, 0, 255));
    }

    #[test]
    fn test_gradient_border_line_geometry() {
        let button = Button::default();
        let mut list = RenderList::new();
        button.draw_gradient_border(&mut list);

        assert_eq!(list.len(), 20);
        let green = Color::rgb(0, 255, 0);
        assert_eq!(list.primitives[0], Primitive::Line { x1: 350, y1: 250, x2: 449, y2: 250, color: green });
        assert_eq!(list.primitives[1], Primitive::Line { x1: 350, y1: 299, x2: 449, y2: 299, color: green });
        assert_eq!(list.primitives[2], Primitive::Line { x1: 350, y1: 250, x2: 350, y2: 299, color: green });
        assert_eq!(list.primitives[3], Primitive::Line { x1: 449, y1: 250, x2: 449, y2: 299, color: green });

        // innermost stroke is inset by four
        assert_eq!(
            list.primitives[16],
            Primitive::Line { x1: 354, y1: 254, x2: 445, y2: 254, color: Color::rgb(204, 51, 0) }
        );
    }

    #[test]
    fn test_zero_border_width_draws_only_fill() {
        let mut button = Button::default().with_border_width(0);
        button.set_hovered(true);
        let mut list = RenderList::new();
        button.draw(&mut list);

        assert_eq!(list.primitives, vec![Primitive::FillRect {
            rect: button.bounds,
            color: button.fill_color,
        }]);
    }

    #[test]
    fn test_draw_order_fill_gradient_hover() {
        let mut button = Button::default();
        button.set_hovered(true);
        let mut list = RenderList::new();
        button.draw(&mut list);

        assert_eq!(list.len(), 1 + 20 + 5);
        assert!(matches!(list.primitives[0], Primitive::FillRect { .. }));
        assert!(list.primitives[1..21].iter().all(|p| matches!(p, Primitive::Line { .. })));
        assert_eq!(
            list.primitives[21],
            Primitive::StrokeRect { rect: button.bounds, color: Color::rgb(255, 255, 0) }
        );
        assert_eq!(
            list.primitives[25],
            Primitive::StrokeRect { rect: PixelRect::new(354, 254, 92, 42), color: Color::rgb(255, 255, 0) }
        );
    }

    #[test]
    fn test_unhover_removes_outline_only() {
        let mut button = Button::default();
        button.set_hovered(true);
        let mut hovered = RenderList::new();
        button.draw(&mut hovered);

        button.set_hovered(false);
        let mut plain = RenderList::new();
        button.draw(&mut plain);

        assert!(!plain.primitives.iter().any(|p| matches!(p, Primitive::StrokeRect { .. })));
        assert_eq!(stroke_colors(&hovered), stroke_colors(&plain));
        assert_eq!(hovered.primitives[..21], plain.primitives[..]);
    }

    #[test]
    fn test_hover_strokes_stop_at_collapse() {
        let mut button = Button::new(PixelRect::new(0, 0, 10, 6)).with_border_width(5);
        button.set_hovered(true);
        let mut list = RenderList::new();
        button.draw_hover_border(&mut list);

        // insets 0, 1, 2 leave height 6, 4, 2; inset 3 collapses
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_update_hover_reports_changes() {
        let mut button = Button::default();
        assert!(button.update_hover(400, 275));
        assert!(button.is_hovered());
        assert!(!button.update_hover(450, 300));
        assert!(button.update_hover(451, 300));
        assert!(!button.is_hovered());
    }
}
