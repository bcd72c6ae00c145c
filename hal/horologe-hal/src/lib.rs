//! Horologe Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the clock core consumes.
//! Chip-specific crates (currently only RP2040) implement them, and host
//! tests implement them with in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  horologe-core / horologe-firmware      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  horologe-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ horologe-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::OutputPin`] - Digital I/O (buttons, LED channels)
//! - [`led::RgbLed`] - Write-only status LED
//! - [`flash::FlashStorage`] - Persistent key-value storage
//! - [`pwm::PwmChannel`] - Duty-cycle output (display backlight)
//!
//! With the `sequential-storage` feature, [`map_storage::MapStorage`]
//! implements `FlashStorage` for any multiwrite NOR flash.

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod gpio;
pub mod led;
#[cfg(feature = "sequential-storage")]
pub mod map_storage;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use gpio::{InputPin, OutputPin};
pub use led::RgbLed;
pub use pwm::PwmChannel;
