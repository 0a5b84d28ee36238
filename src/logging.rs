//! Logger setup.
//!
//! Wasm builds log to the browser console through `console_log`, so each
//! record lands at its matching console level. Native builds (tests) use
//! `simplelog`.

use log::{Level, LevelFilter, SetLoggerError};

/// Install the global logger at `level`.
///
/// `Off` installs nothing and silences the facade. Installing twice fails.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    match level.to_level() {
        Some(level) => install(level),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn install(level: Level) -> Result<(), SetLoggerError> {
    console_log::init_with_level(level)
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: Level) -> Result<(), SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    simplelog::SimpleLogger::init(level.to_level_filter(), config)
}
