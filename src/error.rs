use thiserror::Error;

/// Unified error for the crate's serialization entry points.
///
/// The evaluation layer is total and never returns errors; this type only
/// surfaces from the JSON convenience methods on
/// [`LogicMap`](crate::LogicMap).
#[derive(Debug, Error)]
pub enum ChoicegateError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
