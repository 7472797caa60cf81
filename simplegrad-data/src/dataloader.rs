//! # DataLoader
//!
//! Groups dataset items into batches, visiting indices in the order chosen by
//! a [`Sampler`]. One loader serves many epochs: each call to
//! [`DataLoader::epoch`] asks the sampler for a fresh index order.
//!
//! ```rust
//! use simplegrad_data::{DataLoader, RandomSampler, VecDataset};
//!
//! let dataset: VecDataset<u32> = (0..10).collect();
//! let mut loader = DataLoader::new(&dataset, 4, RandomSampler::seeded(1), true).unwrap();
//! assert_eq!(loader.num_batches(), 2);
//! for batch in loader.epoch() {
//!     assert_eq!(batch.unwrap().len(), 4);
//! }
//! ```

use crate::datasets::Dataset;
use crate::error::DataError;
use crate::samplers::Sampler;

/// Batching loader over a dataset.
///
/// - `batch_size`: number of items per batch, at least 1.
/// - `drop_last`: if true, an incomplete final batch is skipped.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
    ) -> Result<Self, DataError> {
        if batch_size == 0 {
            return Err(DataError::InvalidBatchSize(batch_size));
        }
        Ok(DataLoader {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }

    /// Starts a new epoch.
    pub fn epoch(&mut self) -> Batches<'_, D> {
        let indices = self.sampler.iter(self.dataset.len());
        log::trace!("DataLoader: new epoch of {} batches", self.num_batches());
        Batches {
            dataset: &self.dataset,
            indices,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

/// Iterator over the batches of one epoch.
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize>>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, DataError>;

    /// - `Some(Ok(batch))`: the next batch.
    /// - `Some(Err(e))`: an item could not be fetched.
    /// - `None`: the epoch is over.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
