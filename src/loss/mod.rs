pub use crate::backend::{Backend, Scalar, Tensor1D};

/// A differentiable data-fit loss.
///
/// Implementors define the scalar loss (recorded as part of the cost) and the
/// gradient of the loss w.r.t. the prediction, which is handed to the model's
/// `backward()`.
pub trait Loss<B: Backend> {
    type Prediction;
    type Target;

    /// Scalar loss value.
    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> Scalar<B>;

    /// `∂L/∂pred`.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Halved mean squared error: `L = (1/2n) * Σ(pred_i - target_i)²`.
///
/// Gradient w.r.t. prediction: `∂L/∂pred = (pred - target) / n`.
///
/// With this loss, `Xᵀ · ∂L/∂pred` equals `-(Xᵀ r) / n` for residuals `r = y - pred`,
/// the data term of the elastic net weight gradient.
#[derive(Debug, Clone, Copy, Default)]
pub struct MSELoss;

impl<B: Backend> Loss<B> for MSELoss {
    type Prediction = Tensor1D<B>;
    type Target = Tensor1D<B>;

    fn loss(&self, pred: &Self::Prediction, target: &Self::Target) -> Scalar<B> {
        let diff = pred.sub(target);
        let n = Scalar::<B>::new(2.0 * pred.len() as f64);
        diff.squared_norm() / n
    }

    fn grad_wrt_prediction(&self, pred: &Self::Prediction, target: &Self::Target) -> Tensor1D<B> {
        let inv_n = Scalar::<B>::new(1.0 / pred.len() as f64);
        pred.sub(target).scale(&inv_n)
    }
}
