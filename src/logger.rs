use log::LevelFilter;
use std::env;

/// Sets up `env_logger` at Info, or Debug when `debug_enabled`. An explicit
/// `RUST_LOG` takes precedence.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter(None, level).format_timestamp_secs();

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_err() {
        log::warn!("Logger was already initialized");
        return;
    }
    log::info!("Logger initialized at {level:?} level");
}
