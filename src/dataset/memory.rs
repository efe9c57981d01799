use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{ElasticNetError, Result};

#[cfg(feature = "ndarray")]
use ndarray::ArrayViewD;

/// Dataset held in host memory as row-major `f64`.
///
/// Every constructor widens its input to `f64` and rejects inconsistent shapes
/// up front, so [`Dataset::full_batch`] cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset {
    x: Vec<f64>,
    y: Vec<f64>,
    n_features: usize,
}

impl InMemoryDataset {
    /// Builds a dataset from rows of features and one target per row.
    ///
    /// Any element type that widens losslessly to `f64` is accepted.
    ///
    /// ```
    /// use elasticnet_rs::dataset::{Dataset, InMemoryDataset};
    ///
    /// let ds = InMemoryDataset::new(vec![vec![1i32, 2], vec![3, 4]], vec![5, 6]).unwrap();
    /// assert_eq!(ds.len(), 2);
    /// assert_eq!(ds.n_features(), 2);
    /// ```
    ///
    /// # Errors
    /// - [`ElasticNetError::EmptyDataset`] if there are no rows.
    /// - [`ElasticNetError::ShapeMismatch`] if row and target counts differ or rows
    ///   have different lengths.
    pub fn new<T: Copy + Into<f64>>(x: Vec<Vec<T>>, y: Vec<T>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ElasticNetError::shape(
                format!("{} targets", x.len()),
                format!("{} targets", y.len()),
            ));
        }
        if x.is_empty() {
            return Err(ElasticNetError::EmptyDataset);
        }
        let n_features = x[0].len();
        if let Some((i, row)) = x.iter().enumerate().find(|(_, r)| r.len() != n_features) {
            return Err(ElasticNetError::shape(
                format!("{n_features} features in every row"),
                format!("{} features in row {i}", row.len()),
            ));
        }

        Ok(Self {
            x: x.iter().flatten().map(|&v| v.into()).collect(),
            y: y.into_iter().map(Into::into).collect(),
            n_features,
        })
    }

    /// Builds a dataset from flat row-major buffers with explicit shapes.
    ///
    /// `shape` must be rank 2 (`[n_samples, n_features]`). `target_shape` may be
    /// `[n_samples]` or the column form `[n_samples, 1]`, which is flattened.
    ///
    /// ```
    /// use elasticnet_rs::dataset::{Dataset, InMemoryDataset};
    ///
    /// let ds = InMemoryDataset::from_shape(
    ///     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2],
    ///     vec![1.0, 0.0, 1.0], &[3, 1],
    /// ).unwrap();
    /// assert_eq!(ds.len(), 3);
    ///
    /// let flat = InMemoryDataset::from_shape(vec![1.0, 2.0, 3.0], &[3], vec![1.0; 3], &[3]);
    /// assert!(flat.is_err());
    /// ```
    pub fn from_shape<T: Copy + Into<f64>>(
        data: Vec<T>,
        shape: &[usize],
        targets: Vec<T>,
        target_shape: &[usize],
    ) -> Result<Self> {
        let (n_samples, n_features) = match *shape {
            [rows, cols] => (rows, cols),
            _ => {
                return Err(ElasticNetError::shape(
                    "rank-2 feature matrix",
                    format!("rank-{} array {:?}", shape.len(), shape),
                ))
            }
        };
        if data.len() != n_samples * n_features {
            return Err(ElasticNetError::shape(
                format!("{} feature values for shape {:?}", n_samples * n_features, shape),
                format!("{} values", data.len()),
            ));
        }

        let n_targets = match *target_shape {
            [n] | [n, 1] => n,
            _ => {
                return Err(ElasticNetError::shape(
                    "targets of shape (n,) or (n, 1)",
                    format!("{:?}", target_shape),
                ))
            }
        };
        if n_targets != n_samples || targets.len() != n_targets {
            return Err(ElasticNetError::shape(
                format!("{n_samples} targets"),
                format!("{} targets", targets.len()),
            ));
        }
        if n_samples == 0 {
            return Err(ElasticNetError::EmptyDataset);
        }

        Ok(Self {
            x: data.into_iter().map(Into::into).collect(),
            y: targets.into_iter().map(Into::into).collect(),
            n_features,
        })
    }

    /// Builds a dataset from dynamic-rank `ndarray` views, checking ranks at runtime.
    ///
    /// ```
    /// use elasticnet_rs::dataset::{Dataset, InMemoryDataset};
    /// use ndarray::{array, Array1};
    ///
    /// let x = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
    /// let y = Array1::from(vec![1.0, 2.0]).into_dyn();
    /// let ds = InMemoryDataset::from_ndarray(x.view(), y.view()).unwrap();
    /// assert_eq!(ds.n_features(), 2);
    /// ```
    #[cfg(feature = "ndarray")]
    pub fn from_ndarray(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>) -> Result<Self> {
        Self::from_shape(
            x.iter().copied().collect(),
            x.shape(),
            y.iter().copied().collect(),
            y.shape(),
        )
    }

    pub fn targets(&self) -> &[f64] {
        &self.y
    }
}

impl Dataset for InMemoryDataset {
    fn len(&self) -> usize {
        self.y.len()
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn full_batch<B: Backend>(&self) -> Result<(Tensor2D<B>, Tensor1D<B>)> {
        Ok((
            Tensor2D::<B>::new(self.x.clone(), self.len(), self.n_features),
            Tensor1D::<B>::new(self.y.clone()),
        ))
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let res = InMemoryDataset::new(vec![vec![1.0], vec![2.0]], vec![1.0]);
        assert!(matches!(res, Err(ElasticNetError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = InMemoryDataset::new(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0])
            .unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let res = InMemoryDataset::new(Vec::<Vec<f64>>::new(), vec![]);
        assert_eq!(res.unwrap_err(), ElasticNetError::EmptyDataset);
    }

    #[test]
    fn test_new_widens_f32() {
        let ds = InMemoryDataset::new(vec![vec![0.5f32, 1.5]], vec![2.0f32]).unwrap();
        let (x, y) = ds.full_batch::<CpuBackend>().unwrap();
        assert_eq!(x.ravel().to_vec(), vec![0.5, 1.5]);
        assert_eq!(y.to_vec(), vec![2.0]);
    }

    #[test]
    fn test_full_batch_keeps_row_order() {
        let ds = InMemoryDataset::new(
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
            vec![10.0, 20.0, 30.0],
        )
        .unwrap();
        let (x, y) = ds.full_batch::<CpuBackend>().unwrap();
        assert_eq!(x.shape(), (3, 2));
        assert_eq!(x.ravel().to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(y.to_vec(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_from_shape_rank_checks() {
        let rank3 = InMemoryDataset::from_shape(vec![0.0; 8], &[2, 2, 2], vec![0.0; 2], &[2]);
        assert!(matches!(rank3, Err(ElasticNetError::ShapeMismatch { .. })));

        let bad_targets =
            InMemoryDataset::from_shape(vec![0.0; 4], &[2, 2], vec![0.0; 4], &[2, 2]);
        assert!(matches!(bad_targets, Err(ElasticNetError::ShapeMismatch { .. })));

        let row_mismatch =
            InMemoryDataset::from_shape(vec![0.0; 4], &[2, 2], vec![0.0; 3], &[3]);
        assert!(matches!(row_mismatch, Err(ElasticNetError::ShapeMismatch { .. })));

        let wrong_len = InMemoryDataset::from_shape(vec![0.0; 5], &[2, 2], vec![0.0; 2], &[2]);
        assert!(matches!(wrong_len, Err(ElasticNetError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_from_shape_column_targets() {
        let ds = InMemoryDataset::from_shape(vec![1, 2], &[2, 1], vec![3, 4], &[2, 1]).unwrap();
        assert_eq!(ds.targets(), &[3.0, 4.0]);
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_from_ndarray_rejects_rank_one_features() {
        use ndarray::Array1;
        let x = Array1::from(vec![1.0, 2.0]).into_dyn();
        let y = Array1::from(vec![1.0, 2.0]).into_dyn();
        let res = InMemoryDataset::from_ndarray(x.view(), y.view());
        assert!(matches!(res, Err(ElasticNetError::ShapeMismatch { .. })));
    }
}
