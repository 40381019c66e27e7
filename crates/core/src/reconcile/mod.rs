//! Monthly payment reconciliation.
//!
//! The backend permits multiple payment records for the same entity and
//! period (no unique constraint), so the client derives a deterministic
//! single source of truth for display while preserving enough information
//! to let an operator detect and repair duplicated data.

mod engine;
mod filter;
mod summary;
mod types;

#[cfg(test)]
mod engine_props;
#[cfg(test)]
pub(crate) mod testkit;

pub use engine::reconcile;
pub use filter::{RowFilter, StatusFilter};
pub use summary::MatrixSummary;
pub use types::{PaymentLike, PaymentStatus, ReconciledRow, RosterEntity};
