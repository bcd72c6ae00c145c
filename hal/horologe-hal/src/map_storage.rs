//! [`FlashStorage`] on top of a sequential-storage map
//!
//! Any multiwrite NOR flash region can hold the clock's records. The map
//! appends a new item before the old one is invalidated, so a power cut
//! mid-write leaves the previous value readable.
//!
//! A region sequential-storage cannot parse (a torn page, or whatever an
//! earlier firmware left there) is erased on the next write and the write
//! retried once. Reads report it as [`FlashError::Corrupted`].

use core::ops::Range;

use embedded_storage_async::nor_flash::MultiwriteNorFlash;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use crate::flash::{FlashError, FlashStorage, StorageKey};

/// Largest record sequential-storage has to stage (key + value + header)
pub const ITEM_BUFFER_SIZE: usize = 128;

/// Map-backed record storage over `range` of `flash`
pub struct MapStorage<F> {
    flash: F,
    range: Range<u32>,
    scratch: [u8; ITEM_BUFFER_SIZE],
}

impl<F: MultiwriteNorFlash> MapStorage<F> {
    /// `range` must be aligned to the flash erase size and span at least
    /// two erase blocks
    pub fn new(flash: F, range: Range<u32>) -> Self {
        Self {
            flash,
            range,
            scratch: [0; ITEM_BUFFER_SIZE],
        }
    }

    pub fn flash_mut(&mut self) -> &mut F {
        &mut self.flash
    }

    /// Erase every record in the region
    pub async fn erase_all(&mut self) -> Result<(), FlashError> {
        self.flash
            .erase(self.range.start, self.range.end)
            .await
            .map_err(|_| FlashError::Flash)
    }

    async fn store(
        &mut self,
        key: StorageKey,
        data: &[u8],
    ) -> Result<(), sequential_storage::Error<F::Error>> {
        map::store_item(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut self.scratch,
            &key,
            &data,
        )
        .await
    }
}

impl<F: MultiwriteNorFlash> FlashStorage for MapStorage<F> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let item = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut self.scratch,
            &key,
        )
        .await
        .map_err(storage_error)?
        .ok_or(FlashError::NotFound)?;

        let out = buffer
            .get_mut(..item.len())
            .ok_or(FlashError::BufferTooSmall)?;
        out.copy_from_slice(item);
        Ok(item.len())
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        if data.len() >= ITEM_BUFFER_SIZE {
            return Err(FlashError::BufferTooSmall);
        }

        match self.store(key, data).await {
            Err(sequential_storage::Error::Corrupted { .. }) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Storage region corrupted, erasing");

                self.erase_all().await?;
                self.store(key, data).await.map_err(storage_error)
            }
            result => result.map_err(storage_error),
        }
    }
}

fn storage_error<E>(error: sequential_storage::Error<E>) -> FlashError {
    match error {
        sequential_storage::Error::Storage { .. } => FlashError::Flash,
        sequential_storage::Error::Corrupted { .. } => FlashError::Corrupted,
        sequential_storage::Error::FullStorage => FlashError::Full,
        _ => FlashError::Storage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_storage_async::nor_flash::{
        ErrorType, NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash,
    };

    const PAGE: usize = 1024;
    const PAGES: usize = 4;
    const SIZE: usize = PAGE * PAGES;

    /// NOR flash in RAM: erase sets 0xFF, programming only clears bits
    struct RamFlash {
        data: [u8; SIZE],
        erases: usize,
    }

    impl RamFlash {
        fn new() -> Self {
            Self {
                data: [0xFF; SIZE],
                erases: 0,
            }
        }
    }

    #[derive(Debug)]
    struct OutOfBounds;

    impl NorFlashError for OutOfBounds {
        fn kind(&self) -> NorFlashErrorKind {
            NorFlashErrorKind::OutOfBounds
        }
    }

    impl ErrorType for RamFlash {
        type Error = OutOfBounds;
    }

    impl ReadNorFlash for RamFlash {
        const READ_SIZE: usize = 1;

        async fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
            let start = offset as usize;
            let src = self
                .data
                .get(start..start + bytes.len())
                .ok_or(OutOfBounds)?;
            bytes.copy_from_slice(src);
            Ok(())
        }

        fn capacity(&self) -> usize {
            SIZE
        }
    }

    impl NorFlash for RamFlash {
        const WRITE_SIZE: usize = 4;
        const ERASE_SIZE: usize = PAGE;

        async fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
            let area = self
                .data
                .get_mut(from as usize..to as usize)
                .ok_or(OutOfBounds)?;
            area.fill(0xFF);
            self.erases += 1;
            Ok(())
        }

        async fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
            let start = offset as usize;
            let dst = self
                .data
                .get_mut(start..start + bytes.len())
                .ok_or(OutOfBounds)?;
            for (d, s) in dst.iter_mut().zip(bytes) {
                *d &= *s;
            }
            Ok(())
        }
    }

    impl MultiwriteNorFlash for RamFlash {}

    fn storage() -> MapStorage<RamFlash> {
        MapStorage::new(RamFlash::new(), 0..SIZE as u32)
    }

    fn read_back(storage: &mut MapStorage<RamFlash>) -> Result<heapless::Vec<u8, 32>, FlashError> {
        let mut buffer = [0u8; 32];
        let len = block_on(storage.read(StorageKey::ClockSnapshot, &mut buffer))?;
        Ok(heapless::Vec::from_slice(&buffer[..len]).unwrap())
    }

    #[test]
    fn test_empty_region_has_no_record() {
        let mut s = storage();
        assert_eq!(read_back(&mut s), Err(FlashError::NotFound));
    }

    #[test]
    fn test_write_then_read() {
        let mut s = storage();
        block_on(s.write(StorageKey::ClockSnapshot, &[7, 42])).unwrap();
        assert_eq!(read_back(&mut s).unwrap(), [7, 42]);
    }

    #[test]
    fn test_latest_write_wins() {
        let mut s = storage();
        for minute in 0..200u8 {
            block_on(s.write(StorageKey::ClockSnapshot, &[12, minute % 60, minute])).unwrap();
        }
        assert_eq!(read_back(&mut s).unwrap(), [12, 199 % 60, 199]);
    }

    #[test]
    fn test_oversized_record_rejected() {
        let mut s = storage();
        let data = [0u8; ITEM_BUFFER_SIZE];
        assert_eq!(
            block_on(s.write(StorageKey::ClockSnapshot, &data)),
            Err(FlashError::BufferTooSmall)
        );
    }

    #[test]
    fn test_small_buffer_rejected() {
        let mut s = storage();
        block_on(s.write(StorageKey::ClockSnapshot, &[1, 2, 3, 4])).unwrap();

        let mut buffer = [0u8; 2];
        assert_eq!(
            block_on(s.read(StorageKey::ClockSnapshot, &mut buffer)),
            Err(FlashError::BufferTooSmall)
        );
    }

    #[test]
    fn test_corrupted_region_recovers_on_write() {
        let mut s = storage();
        // Erased page start with a programmed page end is never produced
        // by the map itself
        s.flash_mut().data[PAGE - 32..PAGE].fill(0x00);

        assert!(read_back(&mut s).is_err());

        block_on(s.write(StorageKey::ClockSnapshot, &[9, 30])).unwrap();
        assert_eq!(s.flash_mut().erases, 1);
        assert_eq!(read_back(&mut s).unwrap(), [9, 30]);
    }

    #[test]
    fn test_erase_all_forgets_records() {
        let mut s = storage();
        block_on(s.write(StorageKey::ClockSnapshot, &[1])).unwrap();
        block_on(s.erase_all()).unwrap();
        assert_eq!(read_back(&mut s), Err(FlashError::NotFound));
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            storage_error::<OutOfBounds>(sequential_storage::Error::FullStorage),
            FlashError::Full
        );
        assert_eq!(
            storage_error::<OutOfBounds>(sequential_storage::Error::ItemTooBig),
            FlashError::Storage
        );
    }
}
