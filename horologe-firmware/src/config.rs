//! Embedded configuration
//!
//! `clock.toml` is compiled into the image (validated by build.rs) and
//! parsed once at boot.

use defmt::*;

use horologe_core::config::{parse_config, ClockConfig};

/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../clock.toml");

/// Parse the embedded configuration
///
/// Falls back to built-in defaults if parsing fails, which should only
/// happen if build.rs and the runtime parser disagree.
pub fn load_config() -> ClockConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            ClockConfig::default()
        }
    }
}
