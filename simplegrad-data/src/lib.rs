//! Data collaborators for simplegrad training loops: datasets, index
//! samplers and a batching loader.
//!
//! ```rust
//! use simplegrad_data::{DataLoader, SequentialSampler, VecDataset};
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let mut loader = DataLoader::new(&dataset, 2, SequentialSampler::new(), false).unwrap();
//! let batches: Vec<Vec<i32>> = loader.epoch().collect::<Result<_, _>>().unwrap();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{make_classification, ClassificationConfig, Dataset, Sample, VecDataset};
pub use error::DataError;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
