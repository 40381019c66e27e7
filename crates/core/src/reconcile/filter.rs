//! Pure filter/search layer over reconciled rows.

use super::types::{ReconciledRow, RosterEntity};

/// Payment-status selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every row.
    #[default]
    All,
    /// Keep rows whose primary record is Paid.
    Paid,
    /// Keep rows with no Paid primary.
    Unpaid,
}

/// Criteria applied over a reconciled matrix.
///
/// Stateless: the same criteria over the same rows always select the same
/// subset, so re-running on every keystroke is safe. Input is never
/// mutated.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    /// Case-insensitive name substring.
    pub search: String,
    /// Paid/unpaid selection.
    pub status: StatusFilter,
    /// Exact categorical match (e.g. student type), when set.
    pub category: Option<String>,
}

impl RowFilter {
    /// Returns true when the row passes every criterion.
    #[must_use]
    pub fn matches<E: RosterEntity, R>(&self, row: &ReconciledRow<'_, E, R>) -> bool {
        let name_ok = self.search.is_empty()
            || row
                .entity
                .display_name()
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Paid => row.is_paid,
            StatusFilter::Unpaid => !row.is_paid,
        };

        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|wanted| row.entity.category() == Some(wanted));

        name_ok && status_ok && category_ok
    }

    /// Applies the filter, keeping matching rows in order.
    #[must_use]
    pub fn apply<'a, E: RosterEntity, R>(
        &self,
        rows: &[ReconciledRow<'a, E, R>],
    ) -> Vec<ReconciledRow<'a, E, R>> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}
