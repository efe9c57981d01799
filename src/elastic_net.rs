//! The elastic net estimator.

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{ElasticNetError, Result};
use crate::fitted::FittedElasticNet;
use crate::history::HistoryMode;
use crate::loss::MSELoss;
use crate::model::linear::LinearRegression;
use crate::optimizer::SGD;
use crate::params::ElasticNetParams;
use crate::regularizers::ElasticNetPenalty;
use crate::trainer::Trainer;
use log::info;
use std::marker::PhantomData;

/// Targets accepted by [`ElasticNet::fit`]: a flat vector or a one-column matrix.
pub trait IntoTargets<B: Backend> {
    fn into_targets(self) -> Result<Tensor1D<B>>;
}

impl<B: Backend> IntoTargets<B> for Tensor1D<B> {
    fn into_targets(self) -> Result<Tensor1D<B>> {
        Ok(self)
    }
}

impl<B: Backend> IntoTargets<B> for &Tensor1D<B> {
    fn into_targets(self) -> Result<Tensor1D<B>> {
        Ok(self.clone())
    }
}

/// A `(n, 1)` column is flattened to length `n`.
impl<B: Backend> IntoTargets<B> for &Tensor2D<B> {
    fn into_targets(self) -> Result<Tensor1D<B>> {
        let (rows, cols) = self.shape();
        if cols != 1 {
            return Err(ElasticNetError::shape(
                format!("a ({rows}, 1) target column"),
                format!("({rows}, {cols})"),
            ));
        }
        Ok(self.ravel())
    }
}

impl<B: Backend> IntoTargets<B> for Tensor2D<B> {
    fn into_targets(self) -> Result<Tensor1D<B>> {
        (&self).into_targets()
    }
}

/// Linear regression with combined L1/L2 penalty, fitted by full-batch gradient
/// descent followed by a soft-threshold step each epoch.
///
/// ```
/// use elasticnet_rs::{CpuBackend, ElasticNet, Tensor1D, Tensor2D};
///
/// let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 4, 1);
/// let y = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0, 6.0, 8.0]);
///
/// let fitted = ElasticNet::<CpuBackend>::builder()
///     .learning_rate(0.01)
///     .epochs(1000)
///     .alpha(0.0)
///     .build()
///     .unwrap()
///     .fit(&x, &y)
///     .unwrap();
///
/// let pred = fitted.predict(&Tensor2D::new(vec![5.0], 1, 1)).unwrap();
/// assert!((pred.to_vec()[0] - 10.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct ElasticNet<B: Backend> {
    params: ElasticNetParams,
    _backend: PhantomData<B>,
}

impl<B: Backend> ElasticNet<B> {
    /// # Errors
    /// [`ElasticNetError::InvalidHyperparameter`] if any parameter is out of range.
    pub fn new(params: ElasticNetParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            _backend: PhantomData,
        })
    }

    pub fn builder() -> ElasticNetBuilder<B> {
        ElasticNetBuilder {
            params: ElasticNetParams::default(),
            _backend: PhantomData,
        }
    }

    pub fn params(&self) -> &ElasticNetParams {
        &self.params
    }

    /// Runs exactly `epochs` epochs from zero weights and bias.
    ///
    /// # Errors
    /// - [`ElasticNetError::EmptyDataset`] if `x` has no rows.
    /// - [`ElasticNetError::ShapeMismatch`] if `y` is not a single column or its length
    ///   differs from the number of rows of `x`.
    pub fn fit<Y: IntoTargets<B>>(&self, x: &Tensor2D<B>, y: Y) -> Result<FittedElasticNet<B>> {
        let y = y.into_targets()?;
        let n_features = x.cols();
        info!(
            "fitting elastic net: alpha = {}, rho = {}, learning_rate = {}, epochs = {}",
            self.params.alpha, self.params.rho, self.params.learning_rate, self.params.epochs
        );

        let (trained, history) =
            self.trainer()
                .fit_tensors(LinearRegression::new(n_features), x, &y)?;

        FittedElasticNet::from_training(trained, history, self.params.optimization)
    }

    /// Fits on every sample of `dataset`.
    pub fn fit_dataset<D: Dataset>(&self, dataset: &D) -> Result<FittedElasticNet<B>> {
        if dataset.is_empty() {
            return Err(ElasticNetError::EmptyDataset);
        }
        let (x, y) = dataset.full_batch::<B>()?;
        self.fit(&x, y)
    }

    fn trainer(&self) -> Trainer<B, MSELoss, SGD<B>, ElasticNetPenalty<B>> {
        Trainer::builder(
            MSELoss,
            SGD::new(self.params.learning_rate),
            ElasticNetPenalty::new(self.params.alpha, self.params.rho),
        )
        .max_epochs(self.params.epochs)
        .verbose(self.params.verbose)
        .history_mode(self.params.history)
        .build()
    }
}

/// Fluent builder for [`ElasticNet`], starting from [`ElasticNetParams::default`].
#[derive(Debug, Clone)]
pub struct ElasticNetBuilder<B: Backend> {
    params: ElasticNetParams,
    _backend: PhantomData<B>,
}

impl<B: Backend> ElasticNetBuilder<B> {
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.params.learning_rate = lr;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.params.epochs = epochs;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.params.alpha = alpha;
        self
    }

    pub fn rho(mut self, rho: f64) -> Self {
        self.params.rho = rho;
        self
    }

    pub fn optimization(mut self, optimization: bool) -> Self {
        self.params.optimization = optimization;
        self
    }

    pub fn history(mut self, mode: HistoryMode) -> Self {
        self.params.history = mode;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.params.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<ElasticNet<B>> {
        ElasticNet::new(self.params)
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    type Net = ElasticNet<CpuBackend>;

    fn line() -> (Tensor2D<CpuBackend>, Tensor1D<CpuBackend>) {
        (
            Tensor2D::new(vec![1.0, 2.0, 3.0, 4.0], 4, 1),
            Tensor1D::new(vec![2.0, 4.0, 6.0, 8.0]),
        )
    }

    #[test]
    fn test_new_validates() {
        let bad = ElasticNetParams {
            rho: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            Net::new(bad),
            Err(ElasticNetError::InvalidHyperparameter { name: "rho", .. })
        ));
        assert!(Net::builder().epochs(0).build().is_err());
        assert!(Net::builder().learning_rate(-1.0).build().is_err());
        assert!(Net::builder().alpha(-0.5).build().is_err());
    }

    #[test]
    fn test_builder_defaults_match_params() {
        let net = Net::builder().build().unwrap();
        assert_eq!(net.params(), &ElasticNetParams::default());
    }

    #[test]
    fn test_fit_unregularized_line() {
        let (x, y) = line();
        let fitted = Net::builder().alpha(0.0).build().unwrap().fit(&x, &y).unwrap();

        assert_eq!(fitted.weights().len(), 1);
        assert!((fitted.weights()[0] - 1.95364).abs() < 1e-3);
        assert!((fitted.bias() - 0.13631).abs() < 1e-3);
        assert_eq!(fitted.epoch(), 1000);
        assert_eq!(fitted.history().len(), 1000);
    }

    #[test]
    fn test_fit_accepts_column_targets() {
        let (x, y) = line();
        let column = Tensor2D::<CpuBackend>::new(y.to_vec(), 4, 1);
        let net = Net::builder().alpha(0.0).epochs(50).build().unwrap();

        let flat = net.fit(&x, &y).unwrap();
        let col = net.fit(&x, &column).unwrap();
        assert_eq!(flat.weights(), col.weights());
        assert_eq!(flat.bias(), col.bias());
    }

    #[test]
    fn test_fit_rejects_wide_targets() {
        let (x, _) = line();
        let wide = Tensor2D::<CpuBackend>::new(vec![0.0; 8], 4, 2);
        let res = Net::builder().build().unwrap().fit(&x, wide);
        assert!(matches!(res, Err(ElasticNetError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_fit_rejects_row_mismatch() {
        let (x, _) = line();
        let y = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
        let res = Net::builder().build().unwrap().fit(&x, y);
        assert!(matches!(res, Err(ElasticNetError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_fit_rejects_empty() {
        let x = Tensor2D::<CpuBackend>::new(vec![], 0, 1);
        let y = Tensor1D::<CpuBackend>::new(vec![]);
        let res = Net::builder().build().unwrap().fit(&x, y);
        assert_eq!(res.unwrap_err(), ElasticNetError::EmptyDataset);
    }

    #[test]
    fn test_best_only_history_keeps_selection() {
        let (x, y) = line();
        let full = Net::builder()
            .alpha(0.1)
            .optimization(true)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();
        let bounded = Net::builder()
            .alpha(0.1)
            .optimization(true)
            .history(HistoryMode::BestOnly)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();

        assert_eq!(bounded.history().len(), 1);
        assert_eq!(full.selected(), bounded.selected());
    }
}
