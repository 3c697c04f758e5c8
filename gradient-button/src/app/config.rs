//! Compiled-in application configuration

use std::time::Duration;
use crate::core::{Color, PixelRect};
use crate::widgets::{Button, GradientMode};

/// Roughly 60 frames per second
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gradient Button".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

/// Everything the demo needs to start
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub button: Button,
    pub clear_color: Color,
    /// Pause between presenting a frame and starting the next
    pub frame_interval: Duration,
    /// Period of the background gradient counter
    pub tick_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            button: Button::new(PixelRect::new(350, 250, 100, 50))
                .with_fill_color(Color::rgb(0, 0, 255))
                .with_hover_color(Color::rgb(255, 255, 0))
                .with_border_color(Color::TRANSPARENT)
                .with_border_width(5),
            clear_color: Color::WHITE,
            frame_interval: FRAME_INTERVAL,
            tick_interval: FRAME_INTERVAL,
        }
    }
}

impl AppConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn button(mut self, button: Button) -> Self {
        self.button = button;
        self
    }

    /// Sets the mode on the configured button
    pub fn gradient_mode(mut self, mode: GradientMode) -> Self {
        self.button.gradient_mode = mode;
        self
    }

    /// The button as it should appear on the first frame
    pub fn initial_button(&self) -> Button {
        self.button.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert!(!config.window.resizable);
        assert_eq!(config.clear_color, Color::WHITE);
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.tick_interval, Duration::from_millis(16));

        let button = config.initial_button();
        assert_eq!(button.bounds, PixelRect::new(350, 250, 100, 50));
        assert_eq!(button.fill_color, Color::rgb(0, 0, 255));
        assert_eq!(button.hover_color, Color::rgb(255, 255, 0));
        assert_eq!(button.border_width, 5);
        assert_eq!(button.gradient_mode, GradientMode::Static);
        assert!(!button.is_hovered());
        assert_eq!(button.gradient_offset(), 0);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::default()
            .title("Demo")
            .size(640, 480)
            .gradient_mode(GradientMode::Animated);
        assert_eq!(config.window.title, "Demo");
        assert_eq!((config.window.width, config.window.height), (640, 480));
        assert_eq!(config.initial_button().gradient_mode, GradientMode::Animated);
    }

    #[test]
    fn test_button_keeps_its_own_mode() {
        let config = AppConfig::default()
            .button(Button::default().with_gradient_mode(GradientMode::Animated));
        assert_eq!(config.initial_button().gradient_mode, GradientMode::Animated);

        let config = config.gradient_mode(GradientMode::Static);
        assert_eq!(config.initial_button().gradient_mode, GradientMode::Static);
    }
}
