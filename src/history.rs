//! Optimization trace.
//!
//! Every epoch produces one [`Iterate`]. A [`History`] stores them according to its
//! [`HistoryMode`] and answers the two questions a fitted model asks: which iterate
//! was last, and which had the lowest cost.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of the parameters after one epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Iterate {
    /// 1-based epoch index.
    pub epoch: usize,
    pub weights: Vec<f64>,
    pub bias: f64,
    /// Regularized cost recorded for this epoch.
    pub cost: f64,
}

/// How much of the trace to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HistoryMode {
    /// Every iterate, in epoch order.
    #[default]
    Full,
    /// Only the running minimum and the most recent iterate.
    BestOnly,
}

/// Recorded iterates plus the index of the lowest-cost one.
///
/// Best-iterate tracking replaces the current best only on a strictly smaller
/// cost, so ties resolve to the earliest epoch. A NaN best is never replaced and a
/// NaN candidate never wins.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct History {
    mode: HistoryMode,
    iterates: Vec<Iterate>,
    best: Option<Iterate>,
}

impl History {
    pub fn new(mode: HistoryMode) -> Self {
        Self {
            mode,
            iterates: Vec::new(),
            best: None,
        }
    }

    /// Preallocates room for `epochs` iterates in `Full` mode.
    pub fn with_capacity(mode: HistoryMode, epochs: usize) -> Self {
        let cap = match mode {
            HistoryMode::Full => epochs,
            HistoryMode::BestOnly => 1,
        };
        Self {
            mode,
            iterates: Vec::with_capacity(cap),
            best: None,
        }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    pub fn record(&mut self, iterate: Iterate) {
        let improves = match &self.best {
            None => true,
            Some(best) => iterate.cost < best.cost,
        };
        if improves {
            self.best = Some(iterate.clone());
        }

        match self.mode {
            HistoryMode::Full => self.iterates.push(iterate),
            HistoryMode::BestOnly => {
                self.iterates.clear();
                self.iterates.push(iterate);
            }
        }
    }

    /// Lowest-cost iterate seen so far.
    pub fn best(&self) -> Option<&Iterate> {
        self.best.as_ref()
    }

    /// Most recently recorded iterate.
    pub fn last(&self) -> Option<&Iterate> {
        self.iterates.last()
    }

    /// Retained iterates in epoch order. Holds at most one entry in `BestOnly` mode.
    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    /// Costs of the retained iterates.
    pub fn costs(&self) -> Vec<f64> {
        self.iterates.iter().map(|it| it.cost).collect()
    }

    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }
}
