use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native 1D tensor (`B::Tensor1D`) and carries the backend as a
/// phantom type, so tensors from different backends cannot be mixed.
///
/// Used for weight vectors, targets and predictions.
///
/// # Example
/// ```
/// use elasticnet_rs::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// let y = x.scale(&Scalar::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a new 1D tensor from owned `f64` values.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: B::from_vec_1d(data),
            backend: PhantomData,
        }
    }

    /// Creates a 1D tensor by widening any numeric element type to `f64`.
    ///
    /// ```
    /// use elasticnet_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let t = Tensor1D::<CpuBackend>::from_values(&[1i32, -2, 3]);
    /// assert_eq!(t.to_vec(), vec![1.0, -2.0, 3.0]);
    /// ```
    pub fn from_values<T: Copy + Into<f64>>(values: &[T]) -> Self {
        Self::new(values.iter().map(|&v| v.into()).collect())
    }

    /// Creates a 1D tensor filled with zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: B::zeros_1d(len),
            backend: PhantomData,
        }
    }

    fn wrap(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Element-wise `self + other`.
    ///
    /// # Panics
    /// If lengths differ.
    pub fn add(&self, other: &Self) -> Self {
        Self::wrap(B::add_1d(&self.data, &other.data))
    }

    /// Element-wise `self - other`.
    ///
    /// # Panics
    /// If lengths differ.
    pub fn sub(&self, other: &Self) -> Self {
        Self::wrap(B::sub_1d(&self.data, &other.data))
    }

    /// Element-wise `self * other`.
    ///
    /// # Panics
    /// If lengths differ.
    pub fn mul(&self, other: &Self) -> Self {
        Self::wrap(B::mul_1d(&self.data, &other.data))
    }

    /// Multiplies every element by `a`.
    pub fn scale(&self, a: &Scalar<B>) -> Self {
        Self::wrap(B::mul_scalar_1d(&self.data, &a.data))
    }

    /// Adds `a` to every element.
    pub fn add_scalar(&self, a: &Scalar<B>) -> Self {
        Self::wrap(B::add_scalar_1d(&self.data, &a.data))
    }

    pub fn abs(&self) -> Self {
        Self::wrap(B::abs_1d(&self.data))
    }

    /// Element-wise sign. Returns `0.0` for zero entries.
    ///
    /// ```
    /// use elasticnet_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let t = Tensor1D::<CpuBackend>::new(vec![-2.0, 0.0, 3.0]);
    /// assert_eq!(t.sign().to_vec(), vec![-1.0, 0.0, 1.0]);
    /// ```
    pub fn sign(&self) -> Self {
        Self::wrap(B::sign_1d(&self.data))
    }

    /// Element-wise `max(self[i], other[i])`.
    pub fn maximum(&self, other: &Self) -> Self {
        Self::wrap(B::maximum_1d(&self.data, &other.data))
    }

    /// Soft-thresholding operator: `sign(x) * max(|x| - threshold, 0)`.
    ///
    /// Entries with magnitude at most `threshold` become exactly zero; the rest
    /// move toward zero by `threshold`.
    ///
    /// ```
    /// use elasticnet_rs::backend::{CpuBackend, Scalar, Tensor1D};
    ///
    /// let w = Tensor1D::<CpuBackend>::new(vec![2.0, -1.5, 0.5]);
    /// let shrunk = w.soft_threshold(&Scalar::new(1.0));
    /// assert_eq!(shrunk.to_vec(), vec![1.0, -0.5, 0.0]);
    /// ```
    pub fn soft_threshold(&self, threshold: &Scalar<B>) -> Self {
        let shifted = self.abs().add_scalar(&-*threshold);
        let magnitude = shifted.maximum(&Self::zeros(self.len()));
        self.sign().mul(&magnitude)
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Inner product `Σᵢ aᵢ * bᵢ`.
    ///
    /// # Panics
    /// If lengths differ.
    pub fn dot(&self, other: &Self) -> Scalar<B> {
        self.mul(other).sum()
    }

    /// L1 norm `Σᵢ |aᵢ|`.
    pub fn l1_norm(&self) -> Scalar<B> {
        self.abs().sum()
    }

    /// Squared L2 norm `Σᵢ aᵢ²`.
    pub fn squared_norm(&self) -> Scalar<B> {
        self.dot(self)
    }

    /// Copies the tensor out to a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor1D")
            .field("len", &self.len())
            .field("data", &self.to_vec())
            .finish()
    }
}
