//! Flash storage driver for RP2040
//!
//! Clock records live in the last 16KB of the Pico's QSPI flash, managed
//! by [`MapStorage`]. `memory.x` keeps the program out of this region.

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use horologe_hal::map_storage::MapStorage;

// Re-export shared types from horologe-hal
pub use horologe_hal::flash::{FlashError, StorageKey};

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB flash on the Pico
pub const STATE_PARTITION_SIZE: usize = 4 * ERASE_SIZE; // 16KB for clock state
pub const STATE_PARTITION_START: usize = FLASH_SIZE - STATE_PARTITION_SIZE;

/// Flash range for the state partition
pub const STATE_RANGE: core::ops::Range<u32> =
    (STATE_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Clock state partition on the RP2040's QSPI flash
pub struct Rp2040FlashStorage<'d> {
    map: MapStorage<Flash<'d, FLASH, Async, FLASH_SIZE>>,
}

impl<'d> Rp2040FlashStorage<'d> {
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            map: MapStorage::new(Flash::new(flash, dma), STATE_RANGE),
        }
    }
}

impl<'d> horologe_hal::FlashStorage for Rp2040FlashStorage<'d> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        self.map.read(key, buffer).await
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        self.map.write(key, data).await
    }
}

/// Type alias used by the firmware
pub type FlashStorage<'d> = Rp2040FlashStorage<'d>;
