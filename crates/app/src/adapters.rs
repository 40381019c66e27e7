//! Thin per-kind adapters over the REST client.

use rust_decimal::Decimal;

use rawda_client::{
    ApiClient, Employee, FeeRecord, PayFeeRequest, PaySalaryRequest, SalaryPayment, Student,
};
use rawda_shared::{BackendResult, Period};

use crate::backend::{PaymentBackend, RecordPatch};

/// Fee-side adapter: students paying nursery/course fees.
#[derive(Debug, Clone)]
pub struct FeeBackend {
    client: ApiClient,
}

impl FeeBackend {
    /// Wraps the REST client for fee operations.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl PaymentBackend for FeeBackend {
    type Entity = Student;
    type Record = FeeRecord;

    async fn list_roster(&self) -> BackendResult<Vec<Student>> {
        let mut students = self.client.children().list().await?;
        students.retain(|s| s.is_active);
        Ok(students)
    }

    async fn list_records(&self) -> BackendResult<Vec<FeeRecord>> {
        self.client.fees().list().await
    }

    async fn create_payment(
        &self,
        entity_id: i64,
        period: Period,
        amount: Decimal,
        notes: Option<String>,
    ) -> BackendResult<FeeRecord> {
        let request = PayFeeRequest {
            child_id: entity_id,
            amount,
            month: period.month,
            year: period.year,
            notes,
        };
        self.client.fees().pay(&request).await
    }

    async fn update_record(
        &self,
        record_id: i64,
        patch: RecordPatch,
    ) -> BackendResult<FeeRecord> {
        let mut fresh = self.client.fees().get(record_id).await?;
        fresh.amount = patch.amount;
        fresh.payment_status = patch.status;
        fresh.notes = patch.notes;
        self.client.fees().update(record_id, &fresh).await
    }

    async fn delete_record(&self, record_id: i64) -> BackendResult<()> {
        self.client.fees().delete(record_id).await
    }
}

/// Salary-side adapter: employees receiving monthly payouts.
#[derive(Debug, Clone)]
pub struct SalaryBackend {
    client: ApiClient,
}

impl SalaryBackend {
    /// Wraps the REST client for salary operations.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl PaymentBackend for SalaryBackend {
    type Entity = Employee;
    type Record = SalaryPayment;

    async fn list_roster(&self) -> BackendResult<Vec<Employee>> {
        let mut employees = self.client.employees().list().await?;
        employees.retain(|e| e.is_active);
        Ok(employees)
    }

    async fn list_records(&self) -> BackendResult<Vec<SalaryPayment>> {
        self.client.salaries().list().await
    }

    async fn create_payment(
        &self,
        entity_id: i64,
        period: Period,
        amount: Decimal,
        notes: Option<String>,
    ) -> BackendResult<SalaryPayment> {
        let request = PaySalaryRequest {
            employee_id: entity_id,
            amount,
            month: period.month,
            year: period.year,
            notes,
        };
        self.client.salaries().pay(&request).await
    }

    async fn update_record(
        &self,
        record_id: i64,
        patch: RecordPatch,
    ) -> BackendResult<SalaryPayment> {
        let mut fresh = self.client.salaries().get(record_id).await?;
        fresh.amount = patch.amount;
        fresh.payment_status = patch.status;
        fresh.notes = patch.notes;
        self.client.salaries().update(record_id, &fresh).await
    }

    async fn delete_record(&self, record_id: i64) -> BackendResult<()> {
        self.client.salaries().delete(record_id).await
    }
}
