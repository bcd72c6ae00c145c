//! In-memory flash for host tests

use heapless::Vec;
use horologe_hal::{FlashError, FlashStorage, StorageKey};

use super::MAX_SNAPSHOT_SIZE;

/// Single-slot flash that can be told to fail
#[derive(Debug, Default)]
pub struct MemoryFlash {
    pub slot: Option<Vec<u8, MAX_SNAPSHOT_SIZE>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemoryFlash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            slot: Vec::from_slice(bytes).ok(),
            ..Self::default()
        }
    }
}

impl FlashStorage for MemoryFlash {
    async fn read(&mut self, _key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        if self.fail_reads {
            return Err(FlashError::Flash);
        }
        let data = self.slot.as_ref().ok_or(FlashError::NotFound)?;
        if buffer.len() < data.len() {
            return Err(FlashError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    async fn write(&mut self, _key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        if self.fail_writes {
            return Err(FlashError::Flash);
        }
        let value = Vec::from_slice(data).map_err(|_| FlashError::Full)?;
        self.slot = Some(value);
        self.writes += 1;
        Ok(())
    }
}
