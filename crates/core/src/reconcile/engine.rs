//! The reconciliation engine: grouping, primary selection, row emission.

use std::collections::HashMap;

use rawda_shared::Period;

use super::types::{PaymentLike, ReconciledRow, RosterEntity};

/// Grouping key: normalized entity id plus period.
///
/// Normalization happens at deserialization time (ids and period fields
/// are coerced from whatever JSON type the backend used); here a record
/// that still lacks a usable key fails closed and joins no group.
type GroupKey = (i64, u32, i32);

fn group_key<R: PaymentLike>(record: &R) -> Option<GroupKey> {
    let entity = record.entity_id()?;
    let month = record.month().filter(|m| (1..=12).contains(m))?;
    let year = record.year()?;
    Some((entity, month, year))
}

/// Tie-break policy: the first Paid record in input order wins; otherwise
/// the record with the highest id, read as "most recently created".
///
/// Once money is recorded as received, that fact must not be hidden by a
/// stray unpaid duplicate.
fn select_primary<'a, R: PaymentLike>(group: &[&'a R]) -> Option<&'a R> {
    group
        .iter()
        .copied()
        .find(|r| r.status().is_paid())
        .or_else(|| group.iter().copied().max_by_key(|r| r.record_id()))
}

fn build_row<'a, E, R>(entity: &'a E, group: &[&'a R], period: Period) -> ReconciledRow<'a, E, R>
where
    E: RosterEntity,
    R: PaymentLike,
{
    let primary = select_primary(group);
    let is_paid = primary.is_some_and(|r| r.status().is_paid());
    let amount = primary.map_or_else(|| entity.fallback_amount(), |r| r.amount());

    ReconciledRow {
        entity,
        period,
        primary,
        is_paid,
        amount,
        has_duplicates: group.len() > 1,
        all_records: group.to_vec(),
    }
}

/// Reconciles a roster against the full record set for one period.
///
/// Emits exactly one row per roster entity, in roster order, regardless
/// of how many records exist for it (0, 1, or N). Only the requested
/// period's group is consulted per entity; records for other periods stay
/// loaded but untouched.
#[must_use]
pub fn reconcile<'a, E, R>(
    roster: &'a [E],
    records: &'a [R],
    period: Period,
) -> Vec<ReconciledRow<'a, E, R>>
where
    E: RosterEntity,
    R: PaymentLike,
{
    let mut groups: HashMap<GroupKey, Vec<&'a R>> = HashMap::new();
    for record in records {
        if let Some(key) = group_key(record) {
            groups.entry(key).or_default().push(record);
        }
    }

    roster
        .iter()
        .map(|entity| {
            let key = (entity.entity_id(), period.month, period.year);
            let group = groups.get(&key).map_or(&[][..], Vec::as_slice);
            build_row(entity, group, period)
        })
        .collect()
}
