//! Minimal roster/record fixtures shared by the reconciliation tests.

use rust_decimal::Decimal;

use super::types::{PaymentLike, PaymentStatus, RosterEntity};

/// Test roster entity.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub fallback: Decimal,
    pub category: Option<String>,
}

impl RosterEntity for Person {
    fn entity_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn fallback_amount(&self) -> Decimal {
        self.fallback
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Test payment record.
#[derive(Debug, Clone)]
pub struct Rec {
    pub id: i64,
    pub entity: Option<i64>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub status: PaymentStatus,
    pub amount: Decimal,
}

impl PaymentLike for Rec {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn entity_id(&self) -> Option<i64> {
        self.entity
    }

    fn month(&self) -> Option<u32> {
        self.month
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// A fee-side entity: fallback amount is zero.
pub fn student(id: i64, name: &str) -> Person {
    Person {
        id,
        name: name.to_string(),
        fallback: Decimal::ZERO,
        category: Some("Nursery".to_string()),
    }
}

/// A salary-side entity: fallback amount is the monthly salary.
pub fn staff(id: i64, name: &str, monthly_salary: Decimal) -> Person {
    Person {
        id,
        name: name.to_string(),
        fallback: monthly_salary,
        category: None,
    }
}

pub fn paid(id: i64, entity: i64, month: u32, year: i32, amount: Decimal) -> Rec {
    Rec {
        id,
        entity: Some(entity),
        month: Some(month),
        year: Some(year),
        status: PaymentStatus::Paid,
        amount,
    }
}

pub fn not_paid(id: i64, entity: i64, month: u32, year: i32, amount: Decimal) -> Rec {
    Rec {
        id,
        entity: Some(entity),
        month: Some(month),
        year: Some(year),
        status: PaymentStatus::NotPaid,
        amount,
    }
}
