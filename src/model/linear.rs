//! Linear model with compile-time state tracking.
//!
//! - [`LinearRegression`] = `LinearModel<B, Unfitted>`: mutable state owned by the
//!   training loop.
//! - `LinearModel<B, Fitted>`: immutable snapshot used for prediction.
//!
//! The fitted form carries no training hyperparameters; the elastic net penalty
//! lives in [`crate::regularizers`] and the update rule in [`crate::optimizer`].
pub use crate::backend::{Backend, Scalar, Tensor1D, Tensor2D};
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use std::marker::PhantomData;

/// Trainable parameters of a linear model: weights and bias.
#[derive(Clone)]
pub struct LinearParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: Scalar<B>,
}

impl<B: Backend> LinearParams<B> {
    /// All-zero parameters for `n_features` inputs.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Tensor1D::zeros(n_features),
            bias: Scalar::new(0.0),
        }
    }

    /// Rebuilds parameters from host values.
    pub fn from_host(weights: Vec<f64>, bias: f64) -> Self {
        Self {
            weights: Tensor1D::new(weights),
            bias: Scalar::new(bias),
        }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

impl<B: Backend> ParamOps<B> for LinearParams<B> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: self.weights.add(&other.weights),
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, scalar: Scalar<B>) -> Self {
        Self {
            weights: self.weights.scale(&scalar),
            bias: self.bias * scalar,
        }
    }
}

/// A linear model `y = X·w + b` with its training state encoded at the type level.
///
/// - `S = Unfitted`: implements [`TrainableModel`].
/// - `S = Fitted`: implements [`InferenceModel`].
///
/// Calling `predict` on an untrained model does not compile.
pub struct LinearModel<B: Backend, S> {
    params: LinearParams<B>,
    _state: PhantomData<S>,
}

impl<B: Backend, S> Clone for LinearModel<B, S> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            _state: PhantomData,
        }
    }
}

impl<B: Backend> LinearModel<B, Fitted> {
    /// Creates a fitted model from trained parameters.
    pub fn new(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> &LinearParams<B> {
        &self.params
    }
}

/// Inference `y = wᵀx + b`.
///
/// Shapes are not checked here; [`FittedElasticNet`](crate::FittedElasticNet)
/// validates feature counts before delegating.
impl<B: Backend> InferenceModel<B> for LinearModel<B, Fitted> {
    type InputSingle = Tensor1D<B>;
    type InputBatch = Tensor2D<B>;
    type OutputSingle = Scalar<B>;
    type OutputBatch = Tensor1D<B>;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle {
        self.params.weights.dot(input) + self.params.bias
    }

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch {
        input
            .dot(&self.params.weights)
            .add_scalar(&self.params.bias)
    }
}

/// Forward pass: `X @ w + b`.
/// Backward pass: `∇w = Xᵀ · grad`, `∇b = sum(grad)`.
impl<B: Backend> TrainableModel<B> for LinearModel<B, Unfitted> {
    type Params = LinearParams<B>;
    type Gradients = LinearParams<B>;
    type Prediction = Tensor1D<B>;
    type Input = Tensor2D<B>;
    type Output = LinearModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.params.weights).add_scalar(&self.params.bias)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LinearParams {
            weights: x.tdot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn into_fitted(self) -> LinearModel<B, Fitted> {
        LinearModel::<B, Fitted>::new(self.params)
    }
}

/// An **unfitted** linear regression model.
pub type LinearRegression<B> = LinearModel<B, Unfitted>;

impl<B: Backend> LinearRegression<B> {
    /// Zero-initialized weights and bias.
    pub fn new(n_features: usize) -> Self {
        Self::from_params(LinearParams::zeros(n_features))
    }

    /// Constructs a model from explicit parameters (warm start, tests).
    pub fn from_params(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    fn params(w: Vec<f64>, b: f64) -> LinearParams<CpuBackend> {
        LinearParams::from_host(w, b)
    }

    #[test]
    fn test_param_ops_add() {
        let sum = params(vec![1.0, 2.0], 0.5).add(&params(vec![0.5, -1.0], 0.25));
        assert_eq!(sum.weights.to_vec(), vec![1.5, 1.0]);
        assert_eq!(sum.bias.to_f64(), 0.75);
    }

    #[test]
    fn test_param_ops_scale() {
        let scaled = params(vec![1.0, -2.0], 3.0).scale(Scalar::new(-0.5));
        assert_eq!(scaled.weights.to_vec(), vec![-0.5, 1.0]);
        assert_eq!(scaled.bias.to_f64(), -1.5);
    }

    #[test]
    fn test_linear_regression_new_zero_initialized() {
        let model = LinearRegression::<CpuBackend>::new(3);
        assert_eq!(model.params().weights.to_vec(), vec![0.0; 3]);
        assert_eq!(model.params().bias.to_f64(), 0.0);
        assert_eq!(model.params().n_features(), 3);
    }

    #[test]
    fn test_linear_regression_forward_batch() {
        let model = LinearRegression::<CpuBackend>::from_params(params(vec![1.0, 2.0], 3.0));
        // [[1, 1], [2, 2]] → [1 + 2 + 3, 2 + 4 + 3]
        let x = Tensor2D::<CpuBackend>::new(vec![1.0, 1.0, 2.0, 2.0], 2, 2);
        assert_eq!(model.forward(&x).to_vec(), vec![6.0, 9.0]);
    }

    #[test]
    fn test_linear_regression_backward_batch() {
        let model = LinearRegression::<CpuBackend>::new(2);
        let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let grad_output = Tensor1D::<CpuBackend>::new(vec![0.5, 0.25]);

        let grads = model.backward(&x, &grad_output);

        // ∇w = [[1, 3], [2, 4]] @ [0.5, 0.25] = [1.25, 2.0]; ∇b = 0.75
        assert!((grads.weights.to_vec()[0] - 1.25).abs() < 1e-12);
        assert!((grads.weights.to_vec()[1] - 2.0).abs() < 1e-12);
        assert!((grads.bias.to_f64() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_update_params_replaces_state() {
        let mut model = LinearRegression::<CpuBackend>::new(1);
        model.update_params(&params(vec![4.0], -1.0));
        assert_eq!(model.params().weights.to_vec(), vec![4.0]);
        assert_eq!(model.params().bias.to_f64(), -1.0);
    }

    #[test]
    fn test_into_fitted_predicts() {
        let model = LinearRegression::<CpuBackend>::from_params(params(vec![2.0, -1.0], 0.5));
        let fitted = model.into_fitted();

        let single = fitted.predict(&Tensor1D::new(vec![1.0, 1.0]));
        assert_eq!(single.to_f64(), 1.5);

        let x = Tensor2D::<CpuBackend>::new(vec![1.0, 0.0, 0.0, 1.0], 2, 2);
        assert_eq!(fitted.predict_batch(&x).to_vec(), vec![2.5, -0.5]);
    }

    #[test]
    fn test_predict_does_not_mutate_input() {
        let fitted = LinearModel::<CpuBackend, Fitted>::new(params(vec![1.0, 1.0], 0.0));
        let input = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]);
        let original = input.to_vec();
        let _ = fitted.predict(&input);
        assert_eq!(input.to_vec(), original);
    }
}
