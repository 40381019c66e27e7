//! Board operation errors.

use thiserror::Error;

use rawda_core::ValidationError;
use rawda_shared::{BackendError, Period};

/// Errors surfaced by board operations.
///
/// Local guards (`AlreadyPaid`, `DuplicateRecords`, `Validation`) fire
/// before any backend call; nothing is sent when they do.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Matrix requested before roster and records finished loading.
    #[error("Data not loaded yet")]
    NotLoaded,

    /// No roster entity with this id.
    #[error("Unknown entity: {0}")]
    UnknownEntity(i64),

    /// Pay refused: the entity is already paid for this period.
    #[error("Entity {entity_id} is already paid for {period}")]
    AlreadyPaid {
        /// The entity the payment targeted.
        entity_id: i64,
        /// The requested period.
        period: Period,
    },

    /// Edit refused: duplicate records exist and must be deleted first.
    #[error("Multiple records exist for entity {entity_id} in {period}; delete duplicates first")]
    DuplicateRecords {
        /// The entity whose row is ambiguous.
        entity_id: i64,
        /// The requested period.
        period: Period,
        /// Every record in the group, for the resolution flow.
        record_ids: Vec<i64>,
    },

    /// Edit refused: no record exists yet for this entity/period.
    #[error("No record to edit for entity {entity_id} in {period}")]
    NothingToEdit {
        /// The entity the edit targeted.
        entity_id: i64,
        /// The requested period.
        period: Period,
    },

    /// Local validation failed; nothing was sent to the backend.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend reported the data changed (400/409). The board has
    /// already reloaded and the pending change was discarded.
    #[error("Data changed on the backend; view reloaded")]
    ConflictReloaded,

    /// Backend call failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
