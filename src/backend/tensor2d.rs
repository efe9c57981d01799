use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use crate::error::{ElasticNetError, Result};
use std::marker::PhantomData;

/// Backend-typed row-major 2D tensor, used for feature matrices.
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Builds a `rows × cols` matrix from row-major data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`. Use [`Tensor2D::try_new`] for a checked variant.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Checked constructor: returns [`ElasticNetError::ShapeMismatch`] instead of panicking.
    pub fn try_new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(ElasticNetError::ShapeMismatch {
                expected: format!("{} values for a ({}, {}) matrix", rows * cols, rows, cols),
                got: format!("{} values", data.len()),
            });
        }
        Ok(Self::new(data, rows, cols))
    }

    /// Builds a matrix from rows of any numeric type, widening to `f64`.
    ///
    /// Every row must have the same length. An empty slice yields a `(0, 0)` matrix.
    ///
    /// ```
    /// use elasticnet_rs::backend::{CpuBackend, Tensor2D};
    ///
    /// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1i32, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(x.shape(), (2, 2));
    /// ```
    pub fn from_rows<T: Copy + Into<f64>>(rows: &[Vec<T>]) -> Result<Self> {
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(ElasticNetError::ShapeMismatch {
                expected: format!("{} columns in every row", n_cols),
                got: format!("{} columns in row {}", row.len(), i),
            });
        }
        let data = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v.into()))
            .collect();
        Ok(Self::new(data, rows.len(), n_cols))
    }

    /// `self @ w`: one output per row.
    ///
    /// # Panics
    /// If `self.cols() != w.len()`.
    pub fn dot(&self, w: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec(&self.data, &w.data),
            backend: PhantomData,
        }
    }

    /// `selfᵀ @ v`: one output per column.
    ///
    /// # Panics
    /// If `self.rows() != v.len()`.
    pub fn tdot(&self, v: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec_transposed(&self.data, &v.data),
            backend: PhantomData,
        }
    }

    /// Flattens in row-major order. A `(n, 1)` column becomes a length-`n` vector.
    pub fn ravel(&self) -> Tensor1D<B> {
        Tensor1D {
            data: B::ravel_2d(&self.data),
            backend: PhantomData,
        }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    pub fn rows(&self) -> usize {
        self.shape().0
    }

    pub fn cols(&self) -> usize {
        self.shape().1
    }
}

impl<B: Backend> std::fmt::Debug for Tensor2D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor2D")
            .field("shape", &self.shape())
            .field("data", &self.ravel().to_vec())
            .finish()
    }
}
