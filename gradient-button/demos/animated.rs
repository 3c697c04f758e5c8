//! Animated example - the ticker's counter cycles the border colours

use std::process::ExitCode;
use gradient_button::core::{Color, PixelRect};
use gradient_button::{AppConfig, Button, GradientMode};

fn main() -> ExitCode {
    gradient_button::logging::init();

    let config = AppConfig::default()
        .title("Gradient Button - Animated")
        .button(
            Button::new(PixelRect::new(300, 225, 200, 150))
                .with_fill_color(Color::rgb(20, 20, 60))
                .with_hover_color(Color::rgb(255, 255, 255))
                .with_border_width(24),
        )
        .gradient_mode(GradientMode::Animated);

    match gradient_button::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
