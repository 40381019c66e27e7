//! Abstraction over one payment kind's backend surface.

use rust_decimal::Decimal;

use rawda_core::{PaymentLike, PaymentStatus, RosterEntity};
use rawda_shared::{BackendResult, Period};

/// User-editable fields merged into a freshly fetched record before an
/// update is submitted. Everything else on the record is preserved as
/// the backend last stored it.
#[derive(Debug, Clone)]
pub struct RecordPatch {
    /// New amount.
    pub amount: Decimal,
    /// New payment status.
    pub status: PaymentStatus,
    /// New notes (replaces the old value, `None` clears it).
    pub notes: Option<String>,
}

/// One payment kind's backend surface (fees or salaries).
///
/// Calls are awaited from a single logical writer, so no `Send` bound is
/// required on the returned futures.
#[allow(async_fn_in_trait)]
pub trait PaymentBackend {
    /// Roster entity kind (student or employee).
    type Entity: RosterEntity;
    /// Payment record kind (fee or salary payment).
    type Record: PaymentLike;

    /// Fetches the roster, already filtered to active entities.
    async fn list_roster(&self) -> BackendResult<Vec<Self::Entity>>;

    /// Fetches every payment record, all entities and periods.
    async fn list_records(&self) -> BackendResult<Vec<Self::Record>>;

    /// Records a new payment for one entity/period.
    async fn create_payment(
        &self,
        entity_id: i64,
        period: Period,
        amount: Decimal,
        notes: Option<String>,
    ) -> BackendResult<Self::Record>;

    /// Refreshes the record by id, merges the patch, and submits the
    /// update. Refreshing first avoids clobbering concurrent external
    /// changes to fields the user never touched.
    async fn update_record(&self, record_id: i64, patch: RecordPatch)
    -> BackendResult<Self::Record>;

    /// Deletes one specific record (not a reconciled row).
    async fn delete_record(&self, record_id: i64) -> BackendResult<()>;
}
