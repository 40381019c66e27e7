//! The board session: load, reconcile, and mutate one payment kind.

use rust_decimal::Decimal;
use tracing::{debug, info};

use rawda_core::{
    MatrixSummary, PaymentLike, ReconciledRow, RosterEntity, RowFilter, reconcile,
    validate_amount,
};
use rawda_shared::{BackendError, Period};

use crate::backend::{PaymentBackend, RecordPatch};
use crate::error::BoardError;

struct LoadedData<B: PaymentBackend> {
    roster: Vec<B::Entity>,
    records: Vec<B::Record>,
}

/// One payment kind's session state.
///
/// The matrix is only available once roster and records have both
/// loaded. Changing the requested period never refetches: records for
/// all periods are loaded at once and reconciliation slices locally.
pub struct Board<B: PaymentBackend> {
    backend: B,
    generation: u64,
    data: Option<LoadedData<B>>,
}

impl<B: PaymentBackend> Board<B> {
    /// Creates an empty board; call [`Board::reload`] before reading.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            generation: 0,
            data: None,
        }
    }

    /// Marks the start of a new load and returns its generation token.
    ///
    /// Any load begun earlier is superseded: applying its result later
    /// becomes a no-op instead of a late stale overwrite.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Fetches roster and records concurrently.
    pub async fn fetch(&self) -> Result<(Vec<B::Entity>, Vec<B::Record>), BoardError> {
        let (roster, records) =
            tokio::try_join!(self.backend.list_roster(), self.backend.list_records())?;
        Ok((roster, records))
    }

    /// Applies a completed load unless a newer one has begun since.
    /// Returns false when the load was discarded as stale.
    pub fn apply_load(
        &mut self,
        generation: u64,
        roster: Vec<B::Entity>,
        records: Vec<B::Record>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding stale load"
            );
            return false;
        }
        info!(
            roster = roster.len(),
            records = records.len(),
            "board loaded"
        );
        self.data = Some(LoadedData { roster, records });
        true
    }

    /// Full reload: roster + records + fresh reconciliation on next read.
    pub async fn reload(&mut self) -> Result<(), BoardError> {
        let generation = self.begin_load();
        let (roster, records) = self.fetch().await?;
        self.apply_load(generation, roster, records);
        Ok(())
    }

    /// The reconciled matrix for one period: exactly one row per active
    /// roster entity.
    pub fn matrix(
        &self,
        period: Period,
    ) -> Result<Vec<ReconciledRow<'_, B::Entity, B::Record>>, BoardError> {
        let data = self.data.as_ref().ok_or(BoardError::NotLoaded)?;
        Ok(reconcile(&data.roster, &data.records, period))
    }

    /// The matrix with a filter applied.
    pub fn filtered(
        &self,
        period: Period,
        filter: &RowFilter,
    ) -> Result<Vec<ReconciledRow<'_, B::Entity, B::Record>>, BoardError> {
        Ok(filter.apply(&self.matrix(period)?))
    }

    /// The stat line for one period.
    pub fn summary(&self, period: Period) -> Result<MatrixSummary, BoardError> {
        Ok(MatrixSummary::of(&self.matrix(period)?))
    }

    /// Records a payment for one entity/period.
    ///
    /// Rejected locally, before any backend call, when the amount fails
    /// validation or the just-computed row is already paid.
    pub async fn pay(
        &mut self,
        entity_id: i64,
        period: Period,
        amount: Decimal,
        notes: Option<String>,
    ) -> Result<(), BoardError> {
        validate_amount(amount)?;

        let already_paid = {
            let rows = self.matrix(period)?;
            rows.iter()
                .find(|row| row.entity.entity_id() == entity_id)
                .map(|row| row.is_paid)
                .ok_or(BoardError::UnknownEntity(entity_id))?
        };
        if already_paid {
            return Err(BoardError::AlreadyPaid { entity_id, period });
        }

        match self
            .backend
            .create_payment(entity_id, period, amount, notes)
            .await
        {
            Ok(_) => {
                info!(entity_id, %period, "payment recorded");
                self.reload().await
            }
            Err(BackendError::Conflict(_)) => {
                self.reload().await?;
                Err(BoardError::ConflictReloaded)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Edits the primary record for one entity/period.
    ///
    /// Hard precondition: refused while duplicates exist — editing "the"
    /// record would be ambiguous. The operator must delete the extras
    /// (see [`Board::delete_record`]) first.
    pub async fn edit(
        &mut self,
        entity_id: i64,
        period: Period,
        patch: RecordPatch,
    ) -> Result<(), BoardError> {
        validate_amount(patch.amount)?;

        let record_id = {
            let rows = self.matrix(period)?;
            let row = rows
                .iter()
                .find(|row| row.entity.entity_id() == entity_id)
                .ok_or(BoardError::UnknownEntity(entity_id))?;

            if row.has_duplicates {
                return Err(BoardError::DuplicateRecords {
                    entity_id,
                    period,
                    record_ids: row.all_records.iter().map(|r| r.record_id()).collect(),
                });
            }
            row.primary
                .ok_or(BoardError::NothingToEdit { entity_id, period })?
                .record_id()
        };

        match self.backend.update_record(record_id, patch).await {
            Ok(_) => {
                info!(entity_id, record_id, %period, "record updated");
                self.reload().await
            }
            Err(BackendError::Conflict(_)) => {
                self.reload().await?;
                Err(BoardError::ConflictReloaded)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes one specific record, then reloads.
    ///
    /// Works while the row is still ambiguous; this is the
    /// duplicate-resolution path.
    pub async fn delete_record(&mut self, record_id: i64) -> Result<(), BoardError> {
        self.backend.delete_record(record_id).await?;
        info!(record_id, "record deleted");
        self.reload().await
    }
}
