use crate::backend::{Backend, Scalar};
use crate::model::ParamOps;

/// Gradient-based parameter update rule.
///
/// Decoupled from the training loop: the [`Trainer`](crate::trainer::Trainer)
/// computes gradients and an optimizer turns them into new parameters.
///
/// # Example
/// ```rust
/// use elasticnet_rs::backend::CpuBackend;
/// use elasticnet_rs::model::linear::LinearParams;
/// use elasticnet_rs::optimizer::{Optimizer, SGD};
///
/// let params = LinearParams::<CpuBackend>::from_host(vec![1.0, 2.0], 0.5);
/// let grads = LinearParams::<CpuBackend>::from_host(vec![10.0, -10.0], 1.0);
///
/// let sgd = SGD::<CpuBackend>::new(0.1);
/// let updated = sgd.step(&params, &grads);
/// assert_eq!(updated.weights.to_vec(), vec![0.0, 3.0]);
/// assert_eq!(updated.bias.to_f64(), 0.4);
/// ```
pub trait Optimizer<B: Backend, P> {
    /// Returns the updated parameters; inputs are left untouched.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Plain gradient descent: `θ ← θ - η · ∇L(θ)`.
///
/// Stateless. Applied to the full batch every epoch, so it is batch gradient
/// descent rather than stochastic in this crate.
#[derive(Clone, Debug)]
pub struct SGD<B: Backend> {
    lr: Scalar<B>,
}

impl<B: Backend> SGD<B> {
    /// Creates an optimizer with learning rate `lr`.
    ///
    /// The value is not validated here;
    /// [`ElasticNetParams::validate`](crate::params::ElasticNetParams::validate) rejects
    /// non-positive rates before an optimizer is built.
    pub fn new(lr: f64) -> Self {
        Self {
            lr: Scalar::<B>::new(lr),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }
}

impl<B: Backend, P: ParamOps<B>> Optimizer<B, P> for SGD<B> {
    fn step(&self, params: &P, grads: &P) -> P {
        params.add(&grads.scale(-self.lr))
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;
    use crate::model::linear::LinearParams;

    #[test]
    fn test_sgd_learning_rate() {
        assert_eq!(SGD::<CpuBackend>::new(0.01).learning_rate(), 0.01);
    }

    #[test]
    fn test_sgd_step_zero_gradient_is_noop() {
        let params = LinearParams::<CpuBackend>::from_host(vec![1.0, -3.0], 2.0);
        let grads = LinearParams::<CpuBackend>::zeros(2);
        let updated = SGD::<CpuBackend>::new(0.5).step(&params, &grads);
        assert_eq!(updated.weights.to_vec(), vec![1.0, -3.0]);
        assert_eq!(updated.bias.to_f64(), 2.0);
    }

    #[test]
    fn test_sgd_step_moves_against_gradient() {
        let params = LinearParams::<CpuBackend>::zeros(1);
        let grads = LinearParams::<CpuBackend>::from_host(vec![-2.0], 4.0);
        let updated = SGD::<CpuBackend>::new(0.25).step(&params, &grads);
        assert_eq!(updated.weights.to_vec(), vec![0.5]);
        assert_eq!(updated.bias.to_f64(), -1.0);
    }
}
