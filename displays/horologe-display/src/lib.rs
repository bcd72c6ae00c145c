//! Display capability and shared rendering components for Horologe
//!
//! This crate provides:
//! - `PixelDisplay` trait: the only way the clock core touches the screen
//! - `Color` for the small fixed palette the clock uses
//! - `FramebufferDisplay`, an embedded-graphics implementation that keeps
//!   the frame in RAM and pushes it to any `DrawTarget<Color = Rgb565>` on
//!   `present()`
//!
//! # Architecture
//!
//! The core never owns pixels. It sets a pen colour, clears, draws text
//! and commits the frame. Which panel sits underneath (ST7789 over SPI on
//! the Pico Display, a simulator, a test recorder) is decided by the
//! firmware.

#![no_std]

pub mod backend;
pub mod graphics;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key types
pub use backend::{Color, DisplayError, PixelDisplay};
pub use graphics::FramebufferDisplay;
