//! Snapshot load/save over a `FlashStorage`

use horologe_hal::{FlashError, FlashStorage, StorageKey};

use super::snapshot::{PersistedSnapshot, MAX_SNAPSHOT_SIZE};
use crate::time::{ClockError, ClockState};

/// Snapshot persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Flash operation failed
    Flash(FlashError),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Invalid magic or version
    InvalidFormat,
    /// CRC check failed
    CrcMismatch,
    /// Stored fields are not a valid time of day
    OutOfRange(ClockError),
}

impl From<FlashError> for PersistError {
    fn from(e: FlashError) -> Self {
        PersistError::Flash(e)
    }
}

impl From<ClockError> for PersistError {
    fn from(e: ClockError) -> Self {
        PersistError::OutOfRange(e)
    }
}

/// Owns the flash backend and moves clock snapshots in and out of it
pub struct SnapshotStore<S> {
    storage: S,
}

impl<S: FlashStorage> SnapshotStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load the last committed time
    ///
    /// Never fails: a missing, unreadable or malformed snapshot yields
    /// 00:00:00. Seconds are always zero.
    pub async fn load(&mut self) -> ClockState {
        match self.try_load().await {
            Ok(clock) => {
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Restored {:02}:{:02} from flash",
                    clock.hours(),
                    clock.minutes()
                );
                clock
            }
            Err(PersistError::Flash(FlashError::NotFound)) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("No clock snapshot in flash, starting at midnight");
                ClockState::midnight()
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Failed to load clock snapshot: {:?}, starting at midnight", _e);
                ClockState::midnight()
            }
        }
    }

    /// Load the last committed time, reporting why it could not be used
    pub async fn try_load(&mut self) -> Result<ClockState, PersistError> {
        let mut buffer = [0u8; MAX_SNAPSHOT_SIZE];
        let len = self
            .storage
            .read(StorageKey::ClockSnapshot, &mut buffer)
            .await?;

        let snapshot =
            PersistedSnapshot::decode(&buffer[..len]).map_err(|_| PersistError::Deserialize)?;

        if !snapshot.is_valid() {
            return Err(PersistError::InvalidFormat);
        }
        if !snapshot.verify_crc() {
            return Err(PersistError::CrcMismatch);
        }

        Ok(snapshot.to_clock()?)
    }

    /// Commit hours and minutes
    ///
    /// The backend replaces the previous record as a whole, so a reader
    /// sees either the old or the new time, never a mix.
    pub async fn save(&mut self, clock: &ClockState) -> Result<(), PersistError> {
        let snapshot = PersistedSnapshot::from_clock(clock);

        let mut buffer = [0u8; MAX_SNAPSHOT_SIZE];
        let bytes = snapshot
            .encode(&mut buffer)
            .map_err(|_| PersistError::Serialize)?;

        self.storage
            .write(StorageKey::ClockSnapshot, bytes)
            .await
            .map_err(PersistError::Flash)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Saved {:02}:{:02} to flash", clock.hours(), clock.minutes());

        Ok(())
    }
}
