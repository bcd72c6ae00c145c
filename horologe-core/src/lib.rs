//! Board-agnostic core logic for the clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Time model (wraparound arithmetic, 1 Hz tick with carries)
//! - Snapshot persistence over any `FlashStorage`
//! - Button debouncing and the button → adjustment mapping
//! - Render scheduler (full clear / text-only / colon erase policy)
//! - Controller tying the above together
//! - Configuration types and the embedded TOML parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod persist;
pub mod render;
pub mod time;

pub use controller::Controller;
pub use time::ClockState;
