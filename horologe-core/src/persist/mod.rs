//! Clock persistence
//!
//! Only hours and minutes survive a power cycle. Seconds always restart
//! from zero, so a restored clock begins at the top of the saved minute.

pub mod snapshot;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;

pub use snapshot::{PersistedSnapshot, MAX_SNAPSHOT_SIZE, SNAPSHOT_MAGIC, SNAPSHOT_VERSION};
pub use store::{PersistError, SnapshotStore};
