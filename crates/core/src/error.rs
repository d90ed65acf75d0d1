use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Each variant maps deterministically to an HTTP status at the API
/// boundary: NotFound -> 404, Validation -> 400, Conflict -> 409,
/// Internal -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
