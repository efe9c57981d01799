//! Elastic net hyperparameters.

use crate::error::{ElasticNetError, Result};
use crate::history::HistoryMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hyperparameters of an [`ElasticNet`](crate::ElasticNet) fit.
///
/// | field | valid range | default |
/// |---|---|---|
/// | `learning_rate` | `> 0` | `0.01` |
/// | `epochs` | `> 0` | `1000` |
/// | `alpha` | `>= 0` | `1.0` |
/// | `rho` | `[0, 1]` | `0.5` |
/// | `optimization` | | `false` |
/// | `history` | | [`HistoryMode::Full`] |
/// | `verbose` | | `false` |
///
/// `alpha` is the overall penalty strength and `rho` the share of it given to L1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElasticNetParams {
    pub learning_rate: f64,
    pub epochs: usize,
    pub alpha: f64,
    pub rho: f64,
    /// Predict with the lowest-cost iterate instead of the last one.
    pub optimization: bool,
    pub history: HistoryMode,
    /// Log every epoch at `info` level.
    pub verbose: bool,
}

impl Default for ElasticNetParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 1000,
            alpha: 1.0,
            rho: 0.5,
            optimization: false,
            history: HistoryMode::Full,
            verbose: false,
        }
    }
}

impl ElasticNetParams {
    pub fn builder() -> ElasticNetParamsBuilder {
        ElasticNetParamsBuilder::default()
    }

    /// `alpha · rho`
    pub fn l1_lambda(&self) -> f64 {
        self.alpha * self.rho
    }

    /// `alpha · (1 - rho)`
    pub fn l2_lambda(&self) -> f64 {
        self.alpha * (1.0 - self.rho)
    }

    /// Checks every field against its valid range. NaN fails every check.
    ///
    /// ```
    /// use elasticnet_rs::ElasticNetParams;
    ///
    /// let mut p = ElasticNetParams::default();
    /// assert!(p.validate().is_ok());
    /// p.rho = 1.5;
    /// assert!(p.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ElasticNetError::invalid(
                "learning_rate",
                format!("must be a finite value > 0, got {}", self.learning_rate),
            ));
        }
        if self.epochs == 0 {
            return Err(ElasticNetError::invalid("epochs", "must be > 0"));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(ElasticNetError::invalid(
                "alpha",
                format!("must be a finite value >= 0, got {}", self.alpha),
            ));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(ElasticNetError::invalid(
                "rho",
                format!("must lie in [0, 1], got {}", self.rho),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`ElasticNetParams`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ElasticNetParamsBuilder {
    params: ElasticNetParams,
}

impl ElasticNetParamsBuilder {
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

    pub fn build(self) -> Result<ElasticNetParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}
