//! Domain traits and the reconciled row view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rawda_shared::Period;

/// Payment state carried on a backend record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Money received / salary handed out.
    Paid,
    /// Recorded but not yet paid.
    NotPaid,
}

impl PaymentStatus {
    /// Returns true for [`PaymentStatus::Paid`].
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// An entity that appears on a payment roster (student or employee).
pub trait RosterEntity {
    /// Stable backend id.
    fn entity_id(&self) -> i64;

    /// Name shown in the matrix and matched by the search filter.
    fn display_name(&self) -> &str;

    /// Amount shown when no payment record exists for the period.
    ///
    /// Zero for fee rows (the amount is meaningless until paid); the
    /// monthly salary for salary rows (the amount still owed).
    fn fallback_amount(&self) -> Decimal;

    /// Categorical label for the filter layer (e.g. student type).
    fn category(&self) -> Option<&str> {
        None
    }
}

/// A raw payment record as loaded from the backend.
///
/// The keying fields are optional because backend payloads are not
/// trusted: a record that cannot be keyed is excluded from grouping
/// instead of failing the whole load.
pub trait PaymentLike {
    /// Record id; the highest id is interpreted as most recently created.
    fn record_id(&self) -> i64;

    /// Owning entity id, if the payload carried a usable one.
    fn entity_id(&self) -> Option<i64>;

    /// Billing month, if usable (range-checked at grouping time).
    fn month(&self) -> Option<u32>;

    /// Billing year, if usable.
    fn year(&self) -> Option<i32>;

    /// Paid / not paid.
    fn status(&self) -> PaymentStatus;

    /// Recorded amount.
    fn amount(&self) -> Decimal;
}

/// One reconciled row: the single authoritative payment state for one
/// roster entity in one period.
///
/// A derived view, never persisted and never patched in place; any
/// mutation triggers a full reload and a fresh reconciliation pass.
#[derive(Debug)]
pub struct ReconciledRow<'a, E, R> {
    /// The roster entity this row belongs to.
    pub entity: &'a E,
    /// The requested period.
    pub period: Period,
    /// The primary record selected by the tie-break policy, if any.
    pub primary: Option<&'a R>,
    /// Whether the primary record is marked Paid.
    pub is_paid: bool,
    /// Primary amount, or the entity fallback when no record exists.
    pub amount: Decimal,
    /// True when more than one record exists for this entity/period.
    ///
    /// Surfaced, never silently resolved: editing is refused until the
    /// operator deletes the extras.
    pub has_duplicates: bool,
    /// Every record in the group, for the duplicate-resolution flow.
    pub all_records: Vec<&'a R>,
}

// Manual impl: the row only holds references, so it is clonable
// regardless of whether E and R are.
impl<E, R> Clone for ReconciledRow<'_, E, R> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity,
            period: self.period,
            primary: self.primary,
            is_paid: self.is_paid,
            amount: self.amount,
            has_duplicates: self.has_duplicates,
            all_records: self.all_records.clone(),
        }
    }
}
