use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
///
/// `iter` is called once per epoch and may advance internal state (a random
/// sampler draws a new permutation each time).
pub trait Sampler: Debug {
    /// Returns the indices of one epoch.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Returns the number of indices one epoch yields.
    fn len(&self, dataset_len: usize) -> usize;
}
