use crate::backend::{Backend, Scalar};
use crate::model::linear::LinearParams;

/// A penalty on model parameters.
///
/// The training loop queries three things, each at a different point of an epoch:
/// - [`gradient`](Regularizer::gradient) at the pre-step parameters, added to the
///   data gradient;
/// - [`proximal`](Regularizer::proximal) on the post-step parameters;
/// - [`penalty`](Regularizer::penalty) at the post-proximal parameters, added to
///   the recorded cost.
pub trait Regularizer<B: Backend> {
    fn penalty(&self, params: &LinearParams<B>) -> Scalar<B>;

    /// (Sub)gradient of the penalty. The bias is never penalized.
    fn gradient(&self, params: &LinearParams<B>) -> LinearParams<B>;

    /// Proximal step applied after the gradient update. Identity by default.
    fn proximal(&self, params: LinearParams<B>) -> LinearParams<B> {
        params
    }
}

/// Combined L1/L2 penalty.
///
/// `penalty(w) = l1 · ‖w‖₁ + 0.5 · l2 · ‖w‖²`
///
/// The gradient uses the L1 subgradient `l1 · sign(w)` with `sign(0) = 0`, and the
/// proximal step soft-thresholds the weights by `l1` (not scaled by the learning
/// rate).
#[derive(Clone, Debug)]
pub struct ElasticNetPenalty<B: Backend> {
    l1: Scalar<B>,
    l2: Scalar<B>,
}

impl<B: Backend> ElasticNetPenalty<B> {
    /// Splits the overall strength `alpha` by the L1 ratio `rho`:
    /// `l1 = alpha · rho`, `l2 = alpha · (1 - rho)`.
    ///
    /// ```
    /// use elasticnet_rs::backend::CpuBackend;
    /// use elasticnet_rs::regularizers::ElasticNetPenalty;
    ///
    /// let p = ElasticNetPenalty::<CpuBackend>::new(2.0, 0.25);
    /// assert_eq!(p.l1_lambda(), 0.5);
    /// assert_eq!(p.l2_lambda(), 1.5);
    /// ```
    pub fn new(alpha: f64, rho: f64) -> Self {
        Self::from_lambdas(alpha * rho, alpha * (1.0 - rho))
    }

    pub fn from_lambdas(l1: f64, l2: f64) -> Self {
        Self {
            l1: Scalar::new(l1),
            l2: Scalar::new(l2),
        }
    }

    pub fn l1_lambda(&self) -> f64 {
        self.l1.to_f64()
    }

    pub fn l2_lambda(&self) -> f64 {
        self.l2.to_f64()
    }
}

impl<B: Backend> Regularizer<B> for ElasticNetPenalty<B> {
    fn penalty(&self, params: &LinearParams<B>) -> Scalar<B> {
        let w = &params.weights;
        self.l1 * w.l1_norm() + self.l2 * Scalar::new(0.5) * w.squared_norm()
    }

    fn gradient(&self, params: &LinearParams<B>) -> LinearParams<B> {
        let w = &params.weights;
        LinearParams {
            weights: w.sign().scale(&self.l1).add(&w.scale(&self.l2)),
            bias: Scalar::new(0.0),
        }
    }

    fn proximal(&self, params: LinearParams<B>) -> LinearParams<B> {
        LinearParams {
            weights: params.weights.soft_threshold(&self.l1),
            bias: params.bias,
        }
    }
}
