//! Aggregate counts over a reconciled matrix.

use rust_decimal::Decimal;

use super::types::ReconciledRow;

/// The stat line rendered above every matrix: counts plus collected total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatrixSummary {
    /// Roster size (one row per entity).
    pub total: usize,
    /// Rows whose primary record is Paid.
    pub paid: usize,
    /// Rows with no Paid primary.
    pub unpaid: usize,
    /// Sum of amounts over paid rows only.
    pub paid_amount: Decimal,
    /// Rows flagged with duplicate records.
    pub duplicates: usize,
}

impl MatrixSummary {
    /// Computes the summary for a reconciled matrix.
    #[must_use]
    pub fn of<E, R>(rows: &[ReconciledRow<'_, E, R>]) -> Self {
        let mut paid = 0;
        let mut paid_amount = Decimal::ZERO;
        let mut duplicates = 0;

        for row in rows {
            if row.is_paid {
                paid += 1;
                paid_amount += row.amount;
            }
            if row.has_duplicates {
                duplicates += 1;
            }
        }

        Self {
            total: rows.len(),
            paid,
            unpaid: rows.len() - paid,
            paid_amount,
            duplicates,
        }
    }
}
