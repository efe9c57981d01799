//! Training data sources.
//!
//! A [`Dataset`] yields `(X, y)` pairs where `X` has shape `(n_samples, n_features)`
//! and `y` has shape `(n_samples,)`. Fitting is full-batch, so a dataset only has
//! to hand over all of its samples at once.
//!
//! # Example
//!
//! ```rust
//! use elasticnet_rs::dataset::{Dataset, InMemoryDataset};
//! use elasticnet_rs::backend::CpuBackend;
//!
//! let dataset = InMemoryDataset::new(vec![vec![1.0], vec![2.0]], vec![0.0, 1.0]).unwrap();
//! let (x, y) = dataset.full_batch::<CpuBackend>().unwrap();
//! assert_eq!(x.shape(), (2, 1));
//! assert_eq!(y.to_vec(), vec![0.0, 1.0]);
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::Result;

pub mod memory;
pub use self::memory::InMemoryDataset;

/// Source of a feature matrix and a target vector.
pub trait Dataset {
    /// Number of samples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of feature columns.
    fn n_features(&self) -> usize;

    /// Loads every sample as a `(len, n_features)` matrix and a length-`len` vector.
    fn full_batch<B: Backend>(&self) -> Result<(Tensor2D<B>, Tensor1D<B>)>;
}
