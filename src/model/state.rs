/// Marker for a model that is **not yet trained**.
///
/// Only `LinearModel<B, Unfitted>` implements
/// [`TrainableModel`](crate::model::TrainableModel); prediction is unavailable
/// until the model is converted to [`Fitted`].
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// Marker for a model that has been **fully trained**.
///
/// A `Fitted` model holds inference parameters only: no optimizer state, loss
/// function or training hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
