//! Wire models for backend payloads.
//!
//! Field names follow the backend DTOs verbatim. Ids, period fields, and
//! amounts are deserialized leniently (see [`rawda_shared::json`]): the
//! backend mixes numbers and strings, and a record that cannot be keyed
//! must degrade gracefully rather than fail the whole load.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rawda_core::{PaymentLike, PaymentStatus, RosterEntity};
use rawda_shared::json;

fn default_status() -> PaymentStatus {
    PaymentStatus::NotPaid
}

/// A student as returned by `GET /children`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Backend id.
    #[serde(rename = "childID", default, deserialize_with = "json::i64_or_zero")]
    pub child_id: i64,
    /// Display name.
    #[serde(default)]
    pub child_name: String,
    /// "Nursery" or "Course".
    #[serde(default)]
    pub student_type: Option<String>,
    /// Level within the type.
    #[serde(default)]
    pub student_level: Option<String>,
    /// Class assignment, if any.
    #[serde(default, deserialize_with = "json::opt_i64")]
    pub student_class: Option<i64>,
    /// Parent contact number.
    #[serde(default)]
    pub parent_phone: Option<String>,
    /// Age in years.
    #[serde(default, deserialize_with = "json::opt_i64")]
    pub age: Option<i64>,
    /// Registration date, as the backend formats it.
    #[serde(default)]
    pub registration_date: Option<String>,
    /// Inactive students never enter a roster.
    #[serde(default, deserialize_with = "json::bool_or_false")]
    pub is_active: bool,
}

impl RosterEntity for Student {
    fn entity_id(&self) -> i64 {
        self.child_id
    }

    fn display_name(&self) -> &str {
        &self.child_name
    }

    // Fee amounts are meaningless until paid; the fee schedule lives
    // outside this system.
    fn fallback_amount(&self) -> Decimal {
        Decimal::ZERO
    }

    fn category(&self) -> Option<&str> {
        self.student_type.as_deref()
    }
}

/// An employee as returned by `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Backend id.
    #[serde(rename = "employeeID", default, deserialize_with = "json::i64_or_zero")]
    pub employee_id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Expected monthly payout.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub monthly_salary: Decimal,
    /// Missing means active (the original treats it that way).
    #[serde(default = "json::default_true", deserialize_with = "json::bool_or_true")]
    pub is_active: bool,
}

impl RosterEntity for Employee {
    fn entity_id(&self) -> i64 {
        self.employee_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    // An unpaid salary row shows the amount still owed.
    fn fallback_amount(&self) -> Decimal {
        self.monthly_salary
    }
}

/// A fee record as returned by `GET /fees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    /// Record id.
    #[serde(rename = "feeID", default, deserialize_with = "json::i64_or_zero")]
    pub fee_id: i64,
    /// Owning student, if the payload carried a usable id.
    #[serde(rename = "childID", default, deserialize_with = "json::opt_i64")]
    pub child_id: Option<i64>,
    /// Billing month.
    #[serde(default, deserialize_with = "json::opt_month")]
    pub fee_month: Option<u32>,
    /// Billing year.
    #[serde(default, deserialize_with = "json::opt_year")]
    pub fee_year: Option<i32>,
    /// Recorded amount.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub amount: Decimal,
    /// Paid / not paid.
    #[serde(default = "default_status")]
    pub payment_status: PaymentStatus,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl PaymentLike for FeeRecord {
    fn record_id(&self) -> i64 {
        self.fee_id
    }

    fn entity_id(&self) -> Option<i64> {
        self.child_id
    }

    fn month(&self) -> Option<u32> {
        self.fee_month
    }

    fn year(&self) -> Option<i32> {
        self.fee_year
    }

    fn status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// A salary payment record as returned by `GET /salaries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPayment {
    /// Record id.
    #[serde(rename = "paymentID", default, deserialize_with = "json::i64_or_zero")]
    pub payment_id: i64,
    /// Owning employee, if the payload carried a usable id.
    #[serde(rename = "employeeID", default, deserialize_with = "json::opt_i64")]
    pub employee_id: Option<i64>,
    /// Billing month.
    #[serde(default, deserialize_with = "json::opt_month")]
    pub payment_month: Option<u32>,
    /// Billing year.
    #[serde(default, deserialize_with = "json::opt_year")]
    pub payment_year: Option<i32>,
    /// Recorded amount.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub amount: Decimal,
    /// Paid / not paid.
    #[serde(default = "default_status")]
    pub payment_status: PaymentStatus,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl PaymentLike for SalaryPayment {
    fn record_id(&self) -> i64 {
        self.payment_id
    }

    fn entity_id(&self) -> Option<i64> {
        self.employee_id
    }

    fn month(&self) -> Option<u32> {
        self.payment_month
    }

    fn year(&self) -> Option<i32> {
        self.payment_year
    }

    fn status(&self) -> PaymentStatus {
        self.payment_status
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Body for `POST /fees/pay`.
#[derive(Debug, Clone, Serialize)]
pub struct PayFeeRequest {
    /// Student to record the payment for.
    #[serde(rename = "childID")]
    pub child_id: i64,
    /// Amount received.
    pub amount: Decimal,
    /// Billing month.
    pub month: u32,
    /// Billing year.
    pub year: i32,
    /// Optional notes.
    pub notes: Option<String>,
}

/// Body for `POST /salaries/pay`.
#[derive(Debug, Clone, Serialize)]
pub struct PaySalaryRequest {
    /// Employee to record the payout for.
    #[serde(rename = "employeeID")]
    pub employee_id: i64,
    /// Amount paid out.
    pub amount: Decimal,
    /// Billing month.
    pub month: u32,
    /// Billing year.
    pub year: i32,
    /// Optional notes.
    pub notes: Option<String>,
}

/// A supplies expense as returned by `GET /supplies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    /// Record id.
    #[serde(rename = "supplyID", default, deserialize_with = "json::i64_or_zero")]
    pub supply_id: i64,
    /// What was bought.
    #[serde(default)]
    pub name: String,
    /// Purchase price.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub price: Decimal,
    /// Purchase date, as the backend formats it.
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// Month the purchase is booked under.
    #[serde(default, deserialize_with = "json::opt_month")]
    pub purchase_month: Option<u32>,
    /// Year the purchase is booked under.
    #[serde(default, deserialize_with = "json::opt_year")]
    pub purchase_year: Option<i32>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A class as returned by `GET /classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRoom {
    /// Backend id.
    #[serde(rename = "classID", default, deserialize_with = "json::i64_or_zero")]
    pub class_id: i64,
    /// Display name.
    #[serde(default)]
    pub class_name: String,
    /// "Nursery" or "Course".
    #[serde(default)]
    pub class_type: Option<String>,
    /// Level within the type.
    #[serde(default)]
    pub level: Option<String>,
}

/// One month of the backend-computed profit trend.
///
/// Display-only; the backend owns these numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfit {
    /// Month the aggregate covers.
    #[serde(default, deserialize_with = "json::opt_month")]
    pub profit_month: Option<u32>,
    /// Year the aggregate covers.
    #[serde(default, deserialize_with = "json::opt_year")]
    pub profit_year: Option<i32>,
    /// Collected fees.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub total_fees: Decimal,
    /// Paid salaries.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub total_salaries: Decimal,
    /// Supplies spending.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub total_supplies: Decimal,
    /// Fees minus salaries and supplies.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub net_profit: Decimal,
}

/// Backend-computed all-time profit summary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    /// All fees ever collected.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub total_paid_fees: Decimal,
    /// All salaries ever paid.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub total_paid_salaries: Decimal,
    /// Net after expenses.
    #[serde(default, deserialize_with = "json::decimal_or_zero")]
    pub actual_net_profit: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_fee_record_lenient_decode() {
        // Stringly-typed ids and periods, as seen in production payloads.
        let fee: FeeRecord = serde_json::from_str(
            r#"{"feeID": "10", "childID": 1, "feeMonth": "3", "feeYear": 2025,
                "amount": "500", "paymentStatus": "Paid", "notes": null}"#,
        )
        .unwrap();
        assert_eq!(fee.fee_id, 10);
        assert_eq!(fee.child_id, Some(1));
        assert_eq!(fee.fee_month, Some(3));
        assert_eq!(fee.fee_year, Some(2025));
        assert_eq!(fee.amount, dec!(500));
        assert_eq!(fee.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_fee_record_garbage_fails_closed() {
        let fee: FeeRecord =
            serde_json::from_str(r#"{"feeID": 7, "childID": "x", "feeMonth": "??"}"#).unwrap();
        assert_eq!(fee.fee_id, 7);
        assert_eq!(fee.child_id, None);
        assert_eq!(fee.fee_month, None);
        assert_eq!(fee.payment_status, PaymentStatus::NotPaid);
        assert_eq!(fee.amount, Decimal::ZERO);
    }

    #[test]
    fn test_fee_record_round_trips_backend_names() {
        let fee: FeeRecord = serde_json::from_str(
            r#"{"feeID": 10, "childID": 1, "feeMonth": 3, "feeYear": 2025,
                "amount": 500, "paymentStatus": "Paid"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&fee).unwrap();
        assert_eq!(json["feeID"], 10);
        assert_eq!(json["childID"], 1);
        assert_eq!(json["feeMonth"], 3);
        assert_eq!(json["paymentStatus"], "Paid");
    }

    #[test]
    fn test_student_roster_adapter() {
        let student: Student = serde_json::from_str(
            r#"{"childID": 4, "childName": "Ali", "studentType": "Nursery", "isActive": true}"#,
        )
        .unwrap();
        assert_eq!(student.entity_id(), 4);
        assert_eq!(student.display_name(), "Ali");
        assert_eq!(student.fallback_amount(), Decimal::ZERO);
        assert_eq!(student.category(), Some("Nursery"));
        assert!(student.is_active);
    }

    #[test]
    fn test_employee_missing_is_active_means_active() {
        let employee: Employee = serde_json::from_str(
            r#"{"employeeID": 2, "name": "Mona", "monthlySalary": 4000}"#,
        )
        .unwrap();
        assert!(employee.is_active);
        assert_eq!(employee.fallback_amount(), dec!(4000));
    }

    #[test]
    fn test_salary_payment_adapter() {
        let payment: SalaryPayment = serde_json::from_str(
            r#"{"paymentID": "8", "employeeID": "2", "paymentMonth": 6,
                "paymentYear": "2025", "amount": 4000, "paymentStatus": "NotPaid"}"#,
        )
        .unwrap();
        assert_eq!(payment.record_id(), 8);
        assert_eq!(PaymentLike::entity_id(&payment), Some(2));
        assert_eq!(payment.month(), Some(6));
        assert_eq!(payment.year(), Some(2025));
        assert!(!payment.status().is_paid());
    }
}
