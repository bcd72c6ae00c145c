//! Persistent record storage
//!
//! The clock keeps a single small record in flash. Chip HALs provide the
//! backend; the core only sees [`FlashStorage`].

/// Identifies a record in the state partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Last committed hours and minutes
    ClockSnapshot = 0x01,
}

impl StorageKey {
    /// On-flash tag byte
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(StorageKey::ClockSnapshot),
            _ => None,
        }
    }
}

/// Errors from flash storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Low-level flash read/program/erase failed
    Flash,
    /// The record layer rejected the operation
    Storage,
    /// No record stored under this key
    NotFound,
    /// Caller buffer shorter than the stored record
    BufferTooSmall,
    /// Stored bytes are not a well-formed record
    Corrupted,
    /// No room left even after reclaiming old records
    Full,
}

/// Key-value record storage
///
/// `write` must be power-fail safe: after a reset, `read` returns either
/// the complete previous value or the complete new one.
pub trait FlashStorage {
    /// Copy the record for `key` into `buffer`, returning its length
    fn read(
        &mut self,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, FlashError>>;

    /// Replace the record for `key`
    fn write(
        &mut self,
        key: StorageKey,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), FlashError>>;
}

#[cfg(feature = "sequential-storage")]
mod map_key {
    use super::StorageKey;
    use sequential_storage::map::{Key, SerializationError};

    impl Key for StorageKey {
        fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
            let slot = buffer
                .first_mut()
                .ok_or(SerializationError::BufferTooSmall)?;
            *slot = self.tag();
            Ok(1)
        }

        fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), SerializationError> {
            let tag = buffer.first().ok_or(SerializationError::BufferTooSmall)?;
            let key = StorageKey::from_tag(*tag).ok_or(SerializationError::InvalidFormat)?;
            Ok((key, 1))
        }
    }

}
