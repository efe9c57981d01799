//! # elasticnet-rs
//!
//! Linear regression with a combined L1/L2 (elastic net) penalty, fitted by
//! full-batch gradient descent with a soft-thresholding step after every update.
//!
//! Every epoch is recorded, so the fitted model can either use the final iterate
//! or, with `optimization` enabled, the one with the lowest regularized cost.
//!
//! ## Quick start
//!
//! ```rust
//! use elasticnet_rs::{CpuBackend, ElasticNet, ElasticNetParams, Tensor2D};
//!
//! let x = Tensor2D::<CpuBackend>::from_rows(&[
//!     vec![1.0, 0.5],
//!     vec![2.0, -0.3],
//!     vec![3.0, 0.2],
//!     vec![4.0, -0.4],
//! ])?;
//! let y = Tensor2D::<CpuBackend>::from_rows(&[vec![3.0], vec![5.0], vec![7.0], vec![9.0]])?;
//!
//! let params = ElasticNetParams {
//!     alpha: 0.0,
//!     epochs: 2000,
//!     ..Default::default()
//! };
//! let fitted = ElasticNet::<CpuBackend>::new(params)?.fit(&x, &y)?;
//!
//! assert_eq!(fitted.weights().len(), 2);
//! let preds = fitted.predict(&x)?;
//! assert_eq!(preds.len(), 4);
//! # Ok::<(), elasticnet_rs::ElasticNetError>(())
//! ```
//!
//! ## Layout
//!
//! - [`backend`]: tensor kernels behind the [`Backend`] trait.
//! - [`model`], [`loss`], [`optimizer`], [`regularizers`]: the pieces a [`trainer::Trainer`]
//!   composes into a training loop.
//! - [`ElasticNet`] / [`FittedElasticNet`]: the estimator and its result.

pub mod backend;
pub mod dataset;
pub mod elastic_net;
pub mod error;
pub mod fitted;
pub mod history;
pub mod loss;
pub mod model;
pub mod optimizer;
pub mod params;
pub mod regularizers;
pub mod serialization;
pub mod trainer;

pub use backend::{Backend, Scalar, ScalarOps, Tensor1D, Tensor2D};
#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
#[cfg(feature = "ndarray")]
pub use backend::NdarrayBackend;
pub use dataset::{Dataset, InMemoryDataset};
pub use elastic_net::{ElasticNet, ElasticNetBuilder, IntoTargets};
pub use error::{ElasticNetError, Result};
pub use fitted::FittedElasticNet;
pub use history::{History, HistoryMode, Iterate};
pub use params::{ElasticNetParams, ElasticNetParamsBuilder};
