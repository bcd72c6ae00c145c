//! Clock configuration
//!
//! Typed settings plus the minimal TOML reader used to load them from the
//! `clock.toml` embedded in the firmware image.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
