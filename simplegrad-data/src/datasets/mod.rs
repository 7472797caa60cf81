pub mod classification;
pub mod traits;
pub mod vec_dataset;

pub use classification::{make_classification, ClassificationConfig, Sample};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
