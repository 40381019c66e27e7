//! Salary payment endpoints.

use rawda_shared::{BackendResult, Period};

use crate::http::ApiClient;
use crate::models::{PaySalaryRequest, SalaryPayment};

/// `/salaries` endpoints.
pub struct SalariesApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Salary payment endpoints.
    #[must_use]
    pub const fn salaries(&self) -> SalariesApi<'_> {
        SalariesApi(self)
    }
}

impl SalariesApi<'_> {
    /// `GET /salaries` - every payment record, all periods.
    pub async fn list(&self) -> BackendResult<Vec<SalaryPayment>> {
        self.0.get("/salaries").await
    }

    /// `GET /salaries/{id}` - used to refresh a record before an edit.
    pub async fn get(&self, id: i64) -> BackendResult<SalaryPayment> {
        self.0.get(&format!("/salaries/{id}")).await
    }

    /// `GET /salaries/unpaid` for one period (backend-computed view).
    pub async fn unpaid(&self, period: Period) -> BackendResult<Vec<SalaryPayment>> {
        self.0.get_period("/salaries/unpaid", period).await
    }

    /// `POST /salaries/pay` - records a payout.
    pub async fn pay(&self, request: &PaySalaryRequest) -> BackendResult<SalaryPayment> {
        self.0.post("/salaries/pay", request).await
    }

    /// `PUT /salaries/{id}` - full-record update.
    pub async fn update(&self, id: i64, record: &SalaryPayment) -> BackendResult<SalaryPayment> {
        self.0.put(&format!("/salaries/{id}"), record).await
    }

    /// `DELETE /salaries/{id}`.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        self.0.delete(&format!("/salaries/{id}")).await
    }
}
