//! Load/reconcile/mutate orchestration for Rawda.
//!
//! A [`Board`] owns one payment kind's loaded state (roster + records),
//! derives reconciled matrices from it, and runs the duplicate-guarded
//! mutation operations. Every successful or conflicted mutation ends in
//! a full reload; derived rows are never patched in place.

pub mod adapters;
pub mod backend;
pub mod board;
pub mod error;

pub use adapters::{FeeBackend, SalaryBackend};
pub use backend::{PaymentBackend, RecordPatch};
pub use board::Board;
pub use error::BoardError;
