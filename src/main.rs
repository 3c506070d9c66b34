//! rotconv - rotation representation converter
//!
//! Loads the input rotation from config, converts it, and prints every
//! representation.

use rotconv::config::AppConfig;
use rotconv::report;
use rotconv_core::{convert_all, OutputState};

fn main() {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Initialize logging (RUST_LOG still overrides the configured level)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting rotconv");

    let unit = config.display.angle_unit();
    let input = config.input.to_input_state(unit);
    log::info!("Active input representation: {}", input.active);

    let mut output = OutputState::default();
    convert_all(&input, &mut output, config.input.normalize);

    print!("{}", report::render(&output, unit));
}
