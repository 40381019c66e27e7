//! Core business logic for Rawda.
//!
//! Pure, synchronous, IO-free: the payment reconciliation engine, the
//! filter/search layer over reconciled rows, matrix summaries, and input
//! validation. Everything here is safe to re-run on every recompute.

pub mod reconcile;
pub mod validation;

pub use reconcile::{
    MatrixSummary, PaymentLike, PaymentStatus, ReconciledRow, RosterEntity, RowFilter,
    StatusFilter, reconcile,
};
pub use validation::{ValidationError, validate_amount, validate_name};
