//! The result of a fit: one selected iterate, ready for prediction.

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::{ElasticNetError, Result};
use crate::history::{History, Iterate};
use crate::model::linear::{LinearModel, LinearParams};
use crate::model::{Fitted, InferenceModel};
use log::debug;

#[cfg(feature = "serde")]
use crate::serialization::SerializableParams;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

/// A fitted elastic net.
///
/// Exactly one iterate is active. Without optimization it is the final epoch;
/// with optimization it is the lowest-cost epoch, the earliest one on ties.
pub struct FittedElasticNet<B: Backend> {
    model: LinearModel<B, Fitted>,
    selected: Iterate,
    history: History,
    optimized: bool,
}

impl<B: Backend> Clone for FittedElasticNet<B> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            selected: self.selected.clone(),
            history: self.history.clone(),
            optimized: self.optimized,
        }
    }
}

impl<B: Backend> std::fmt::Debug for FittedElasticNet<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FittedElasticNet")
            .field("selected", &self.selected)
            .field("optimized", &self.optimized)
            .field("recorded_iterates", &self.history.len())
            .finish()
    }
}

impl<B: Backend> FittedElasticNet<B> {
    /// Picks the active iterate from a finished training run.
    ///
    /// `trained` is the model after the final epoch; it is reused as-is unless
    /// `optimization` selects an earlier iterate.
    pub(crate) fn from_training(
        trained: LinearModel<B, Fitted>,
        history: History,
        optimization: bool,
    ) -> Result<Self> {
        let (selected, model) = if optimization {
            let best = history.best().cloned().ok_or_else(no_iterates)?;
            debug!(
                "selected lowest-cost iterate: epoch {} with cost {}",
                best.epoch, best.cost
            );
            let model = model_from(&best);
            (best, model)
        } else {
            let last = history.last().cloned().ok_or_else(no_iterates)?;
            debug!("selected final iterate: epoch {} with cost {}", last.epoch, last.cost);
            (last, trained)
        };

        Ok(Self {
            model,
            selected,
            history,
            optimized: optimization,
        })
    }

    /// Predicts `X·w + b` with the active iterate, one value per row.
    ///
    /// # Errors
    /// [`ElasticNetError::ShapeMismatch`] if `x` has a different number of columns
    /// than the model has weights.
    pub fn predict(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        if x.cols() != self.n_features() {
            return Err(ElasticNetError::shape(
                format!("{} feature columns", self.n_features()),
                format!("{} feature columns", x.cols()),
            ));
        }
        Ok(self.model.predict_batch(x))
    }

    /// Predicts a single sample.
    pub fn predict_one(&self, x: &Tensor1D<B>) -> Result<f64> {
        if x.len() != self.n_features() {
            return Err(ElasticNetError::shape(
                format!("{} features", self.n_features()),
                format!("{} features", x.len()),
            ));
        }
        Ok(self.model.predict(x).to_f64())
    }

    pub fn weights(&self) -> &[f64] {
        &self.selected.weights
    }

    pub fn bias(&self) -> f64 {
        self.selected.bias
    }

    /// 1-based epoch of the active iterate.
    pub fn epoch(&self) -> usize {
        self.selected.epoch
    }

    /// Cost recorded for the active iterate.
    pub fn cost(&self) -> f64 {
        self.selected.cost
    }

    pub fn n_features(&self) -> usize {
        self.selected.weights.len()
    }

    /// Whether the lowest-cost iterate was selected instead of the final one.
    pub fn is_optimized(&self) -> bool {
        self.optimized
    }

    pub fn selected(&self) -> &Iterate {
        &self.selected
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn params(&self) -> &LinearParams<B> {
        self.model.params()
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct FittedRepr {
    selected: Iterate,
    history: History,
    optimized: bool,
}

#[cfg(feature = "serde")]
impl<B: Backend> FittedElasticNet<B> {
    /// Writes the active iterate, the history and the selection flag with `bincode`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let repr = FittedRepr {
            selected: self.selected.clone(),
            history: self.history.clone(),
            optimized: self.optimized,
        };
        repr.save_to_file(path)
    }

    /// Reads a model written by [`save_to_file`](Self::save_to_file), into any backend.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repr = FittedRepr::load_from_file(path)?;
        Ok(Self {
            model: model_from(&repr.selected),
            selected: repr.selected,
            history: repr.history,
            optimized: repr.optimized,
        })
    }
}

fn model_from<B: Backend>(it: &Iterate) -> LinearModel<B, Fitted> {
    LinearModel::<B, Fitted>::new(LinearParams::from_host(it.weights.clone(), it.bias))
}

fn no_iterates() -> ElasticNetError {
    ElasticNetError::EmptyHistory
}
