//! Full-batch training loop.
//!
//! A [`Trainer`] composes a [`Loss`], an [`Optimizer`] and a [`Regularizer`] and runs
//! a fixed number of epochs over a [`LinearRegression`] model. Each epoch:
//!
//! 1. forward pass `ŷ = X·w + b`;
//! 2. data gradient via the loss and the model's `backward()`;
//! 3. penalty (sub)gradient added to the data gradient;
//! 4. optimizer step;
//! 5. regularizer proximal step;
//! 6. cost = data loss at `ŷ` + penalty at the new parameters, recorded in a [`History`].
//!
//! There is no early stopping: the loop always runs `max_epochs` times.
use crate::{
    backend::{Backend, Tensor1D, Tensor2D},
    error::{ElasticNetError, Result},
    history::{History, HistoryMode, Iterate},
    loss::Loss,
    model::linear::{LinearModel, LinearParams, LinearRegression},
    model::{Fitted, ParamOps, TrainableModel},
    optimizer::Optimizer,
    regularizers::Regularizer,
};
use log::{debug, info, trace};
use std::marker::PhantomData;

/// Orchestrates the training loop.
///
/// Immutable once built; the same trainer can fit any number of models.
pub struct Trainer<B, L, O, R>
where
    B: Backend,
    L: Loss<B>,
    O: Optimizer<B, LinearParams<B>>,
    R: Regularizer<B>,
{
    pub(crate) max_epochs: usize,
    pub(crate) verbose: bool,
    pub(crate) history_mode: HistoryMode,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    pub(crate) regularizer: R,
    _phantom_backend: PhantomData<B>,
}

/// Fluent builder for [`Trainer`].
///
/// Defaults:
/// - `max_epochs`: 1000
/// - `verbose`: false
/// - `history_mode`: [`HistoryMode::Full`]
pub struct TrainerBuilder<B, L, O, R>
where
    B: Backend,
    L: Loss<B>,
    O: Optimizer<B, LinearParams<B>>,
    R: Regularizer<B>,
{
    max_epochs: usize,
    verbose: bool,
    history_mode: HistoryMode,
    loss_fn: L,
    optimizer: O,
    regularizer: R,
    _phantom_backend: PhantomData<B>,
}

impl<B, L, O, R> TrainerBuilder<B, L, O, R>
where
    B: Backend,
    L: Loss<B>,
    O: Optimizer<B, LinearParams<B>>,
    R: Regularizer<B>,
{
    pub fn new(loss_fn: L, optimizer: O, regularizer: R) -> Self {
        Self {
            max_epochs: 1000,
            verbose: false,
            history_mode: HistoryMode::Full,
            loss_fn,
            optimizer,
            regularizer,
            _phantom_backend: PhantomData,
        }
    }

    pub fn max_epochs(mut self, epochs: usize) -> Self {
        self.max_epochs = epochs;
        self
    }

    /// Logs every epoch at `info` level instead of `trace`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    pub fn build(self) -> Trainer<B, L, O, R> {
        Trainer {
            max_epochs: self.max_epochs,
            verbose: self.verbose,
            history_mode: self.history_mode,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            regularizer: self.regularizer,
            _phantom_backend: PhantomData,
        }
    }
}

impl<B, L, O, R> Trainer<B, L, O, R>
where
    B: Backend,
    L: Loss<B>,
    O: Optimizer<B, LinearParams<B>>,
    R: Regularizer<B>,
{
    pub fn builder(loss_fn: L, optimizer: O, regularizer: R) -> TrainerBuilder<B, L, O, R> {
        TrainerBuilder::new(loss_fn, optimizer, regularizer)
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }
}

impl<B, L, O, R> Trainer<B, L, O, R>
where
    B: Backend,
    L: Loss<B, Target = Tensor1D<B>, Prediction = Tensor1D<B>>,
    O: Optimizer<B, LinearParams<B>>,
    R: Regularizer<B>,
{
    /// Trains `model` on `(x, y)` for exactly `max_epochs` epochs.
    ///
    /// # Errors
    /// - [`ElasticNetError::ShapeMismatch`] if `x` and `y` disagree on the number of
    ///   samples or `x` has a different number of columns than the model has weights.
    /// - [`ElasticNetError::EmptyDataset`] if both are consistent but hold no samples.
    pub fn fit_tensors(
        &self,
        mut model: LinearRegression<B>,
        x: &Tensor2D<B>,
        y: &Tensor1D<B>,
    ) -> Result<(LinearModel<B, Fitted>, History)> {
        let (n_samples, n_features) = x.shape();
        if y.len() != n_samples {
            return Err(ElasticNetError::shape(
                format!("{n_samples} targets"),
                format!("{} targets", y.len()),
            ));
        }
        if n_samples == 0 {
            return Err(ElasticNetError::EmptyDataset);
        }
        if model.params().n_features() != n_features {
            return Err(ElasticNetError::shape(
                format!("{} feature columns", model.params().n_features()),
                format!("{n_features} feature columns"),
            ));
        }

        info!(
            "training on {n_samples} samples x {n_features} features for {} epochs",
            self.max_epochs
        );

        let mut history = History::with_capacity(self.history_mode, self.max_epochs);
        for epoch in 1..=self.max_epochs {
            let preds = model.forward(x);
            let data_loss = self.loss_fn.loss(&preds, y);
            let grad_preds = self.loss_fn.grad_wrt_prediction(&preds, y);

            let grads = model
                .backward(x, &grad_preds)
                .add(&self.regularizer.gradient(model.params()));
            let stepped = self.optimizer.step(model.params(), &grads);
            let new_params = self.regularizer.proximal(stepped);

            let cost = (data_loss + self.regularizer.penalty(&new_params)).to_f64();
            model.update_params(&new_params);

            if self.verbose {
                info!("epoch {epoch}: cost = {cost}");
            } else {
                trace!("epoch {epoch}: cost = {cost}");
            }

            history.record(Iterate {
                epoch,
                weights: new_params.weights.to_vec(),
                bias: new_params.bias.to_f64(),
                cost,
            });
        }

        if let Some(last) = history.last() {
            debug!(
                "training finished after {} epochs, final cost = {}",
                last.epoch, last.cost
            );
        }

        Ok((model.into_fitted(), history))
    }
}
