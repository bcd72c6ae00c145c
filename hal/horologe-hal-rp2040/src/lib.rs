//! RP2040-specific HAL for the clock firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `horologe-hal` traits:
//!
//! - Button inputs and digital outputs for the LED (`gpio`)
//! - PWM backlight (`pwm`)
//! - Flash storage driver (implements `horologe_hal::FlashStorage`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod pwm;

// Re-export shared traits from horologe-hal for convenience
pub use flash::FlashStorage;
pub use gpio::{ButtonPin, DigitalOutput};
pub use pwm::PwmBacklight;
pub use horologe_hal::{FlashStorage as FlashStorageTrait, StorageKey};
