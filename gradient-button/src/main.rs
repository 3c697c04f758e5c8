use std::process::ExitCode;
use gradient_button::AppConfig;

fn main() -> ExitCode {
    gradient_button::logging::init();

    match gradient_button::run(AppConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
