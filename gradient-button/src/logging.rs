//! Logger setup

use log::LevelFilter;

/// Install the global logger. Filters are compiled in; the environment
/// is not consulted.
pub fn init() {
    // A second init (e.g. from tests) keeps the first logger
    let _ = builder().try_init();
}

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);
    // Graphics stack is very chatty at info
    builder.filter_module("wgpu_core", LevelFilter::Warn);
    builder.filter_module("wgpu_hal", LevelFilter::Warn);
    builder.filter_module("naga", LevelFilter::Warn);
    builder.filter_module("winit", LevelFilter::Warn);
    builder.format_timestamp_millis();
    builder
}
