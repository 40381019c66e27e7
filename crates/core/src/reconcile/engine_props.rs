//! Property-based tests for the reconciliation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use rawda_shared::Period;

use super::engine::reconcile;
use super::filter::{RowFilter, StatusFilter};
use super::testkit::{Person, Rec};
use super::types::{PaymentStatus, RosterEntity};

/// Strategy for a roster of up to 20 entities with distinct ids.
fn roster_strategy() -> impl Strategy<Value = Vec<Person>> {
    prop::collection::hash_set(1i64..50, 0..20).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Person {
                id,
                name: format!("person-{id}"),
                fallback: Decimal::new(id * 100, 0),
                category: None,
            })
            .collect()
    })
}

/// Strategy for raw records, including unkeyable ones.
fn records_strategy() -> impl Strategy<Value = Vec<Rec>> {
    prop::collection::vec(
        (
            1i64..1000,
            prop::option::of(1i64..50),
            prop::option::of(0u32..15),
            prop::option::of(2023i32..2027),
            prop::bool::ANY,
            0i64..100_000,
        )
            .prop_map(|(id, entity, month, year, is_paid, cents)| Rec {
                id,
                entity,
                month,
                year,
                status: if is_paid {
                    PaymentStatus::Paid
                } else {
                    PaymentStatus::NotPaid
                },
                amount: Decimal::new(cents, 2),
            }),
        0..40,
    )
}

fn period_strategy() -> impl Strategy<Value = Period> {
    (1u32..=12, 2023i32..2027).prop_map(|(month, year)| Period { month, year })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No entity loss: one output row per roster entity, always, in order.
    #[test]
    fn prop_one_row_per_roster_entity(
        roster in roster_strategy(),
        records in records_strategy(),
        period in period_strategy(),
    ) {
        let rows = reconcile(&roster, &records, period);
        prop_assert_eq!(rows.len(), roster.len());
        for (row, entity) in rows.iter().zip(roster.iter()) {
            prop_assert_eq!(row.entity.entity_id(), entity.id);
        }
    }

    /// Paid precedence: if any record in the group is Paid, the primary
    /// is Paid, regardless of insertion order or id magnitude.
    #[test]
    fn prop_paid_precedence(
        roster in roster_strategy(),
        records in records_strategy(),
        period in period_strategy(),
    ) {
        let rows = reconcile(&roster, &records, period);
        for row in &rows {
            let group_has_paid = row
                .all_records
                .iter()
                .any(|r| r.status.is_paid());
            prop_assert_eq!(row.is_paid, group_has_paid);
            if group_has_paid {
                prop_assert!(row.primary.is_some_and(|r| r.status.is_paid()));
            }
        }
    }

    /// Tie-break determinism: reconciling the same input twice picks the
    /// same primary both times.
    #[test]
    fn prop_deterministic(
        roster in roster_strategy(),
        records in records_strategy(),
        period in period_strategy(),
    ) {
        let first = reconcile(&roster, &records, period);
        let second = reconcile(&roster, &records, period);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.primary.map(|r| r.id), b.primary.map(|r| r.id));
            prop_assert_eq!(a.is_paid, b.is_paid);
            prop_assert_eq!(a.amount, b.amount);
            prop_assert_eq!(a.has_duplicates, b.has_duplicates);
        }
    }

    /// Duplicate flag iff the group holds more than one record,
    /// independent of paid/unpaid statuses.
    #[test]
    fn prop_duplicate_flag(
        roster in roster_strategy(),
        records in records_strategy(),
        period in period_strategy(),
    ) {
        let rows = reconcile(&roster, &records, period);
        for row in &rows {
            prop_assert_eq!(row.has_duplicates, row.all_records.len() > 1);
        }
    }

    /// Period isolation: a row's group only contains records keyed to the
    /// requested period, whatever else is resident in the record set.
    #[test]
    fn prop_period_isolation(
        roster in roster_strategy(),
        records in records_strategy(),
        period in period_strategy(),
    ) {
        let rows = reconcile(&roster, &records, period);
        for row in &rows {
            for record in &row.all_records {
                prop_assert_eq!(record.entity, Some(row.entity.id));
                prop_assert_eq!(record.month, Some(period.month));
                prop_assert_eq!(record.year, Some(period.year));
            }
        }
    }

    /// Filter idempotence: applying the same criteria twice equals once.
    #[test]
    fn prop_filter_idempotent(
        roster in roster_strategy(),
        records in records_strategy(),
        period in period_strategy(),
        search in "[a-z0-9-]{0,8}",
        status_pick in 0u8..3,
    ) {
        let status = match status_pick {
            0 => StatusFilter::All,
            1 => StatusFilter::Paid,
            _ => StatusFilter::Unpaid,
        };
        let filter = RowFilter { search, status, category: None };

        let rows = reconcile(&roster, &records, period);
        let once = filter.apply(&rows);
        let twice = filter.apply(&once);
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert_eq!(a.entity.id, b.entity.id);
        }
    }
}
