//! On-flash snapshot format

use serde::{Deserialize, Serialize};

use crate::time::{ClockError, ClockState};

/// Magic number to identify a clock snapshot
pub const SNAPSHOT_MAGIC: u32 = 0x484F_524F; // "HORO"

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u8 = 1;

/// Upper bound for an encoded snapshot
pub const MAX_SNAPSHOT_SIZE: usize = 32;

/// Persisted clock record
///
/// Serialized to flash with postcard. The CRC covers every field before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistedSnapshot {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    pub hours: u8,
    pub minutes: u8,
    /// CRC32 over magic..minutes
    pub crc: u32,
}

impl PersistedSnapshot {
    /// Capture the hours and minutes of a clock
    pub fn from_clock(clock: &ClockState) -> Self {
        let mut snapshot = Self {
            magic: SNAPSHOT_MAGIC,
            version: SNAPSHOT_VERSION,
            hours: clock.hours(),
            minutes: clock.minutes(),
            crc: 0,
        };
        snapshot.update_crc();
        snapshot
    }

    /// Magic and version match this build
    pub fn is_valid(&self) -> bool {
        self.magic == SNAPSHOT_MAGIC && self.version == SNAPSHOT_VERSION
    }

    pub fn calculate_crc(&self) -> u32 {
        let mut crc: u32 = 0xFFFF_FFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version, self.hours, self.minutes]);
        !crc
    }

    pub fn update_crc(&mut self) {
        self.crc = self.calculate_crc();
    }

    pub fn verify_crc(&self) -> bool {
        self.crc == self.calculate_crc()
    }

    /// Rebuild the clock at second zero of the stored minute
    pub fn to_clock(&self) -> Result<ClockState, ClockError> {
        ClockState::at(self.hours, self.minutes)
    }

    /// Encode into `buffer`, returning the used prefix
    pub fn encode<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buffer)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

/// CRC32 (IEEE 802.3, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}
