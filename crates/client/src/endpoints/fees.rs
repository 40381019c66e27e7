//! Fee record endpoints.

use rawda_shared::{BackendResult, Period};

use crate::http::ApiClient;
use crate::models::{FeeRecord, PayFeeRequest};

/// `/fees` endpoints.
pub struct FeesApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Fee record endpoints.
    #[must_use]
    pub const fn fees(&self) -> FeesApi<'_> {
        FeesApi(self)
    }
}

impl FeesApi<'_> {
    /// `GET /fees` - every fee record, all entities, all periods.
    /// Reconciliation slices out the requested period locally.
    pub async fn list(&self) -> BackendResult<Vec<FeeRecord>> {
        self.0.get("/fees").await
    }

    /// `GET /fees/{id}` - used to refresh a record before an edit.
    pub async fn get(&self, id: i64) -> BackendResult<FeeRecord> {
        self.0.get(&format!("/fees/{id}")).await
    }

    /// `GET /fees/unpaid` for one period (backend-computed view).
    pub async fn unpaid(&self, period: Period) -> BackendResult<Vec<FeeRecord>> {
        self.0.get_period("/fees/unpaid", period).await
    }

    /// `POST /fees/pay` - records a received payment.
    pub async fn pay(&self, request: &PayFeeRequest) -> BackendResult<FeeRecord> {
        self.0.post("/fees/pay", request).await
    }

    /// `PUT /fees/{id}` - full-record update; 400/409 maps to
    /// [`rawda_shared::BackendError::Conflict`].
    pub async fn update(&self, id: i64, record: &FeeRecord) -> BackendResult<FeeRecord> {
        self.0.put(&format!("/fees/{id}"), record).await
    }

    /// `DELETE /fees/{id}` - targets one record, not a reconciled row.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        self.0.delete(&format!("/fees/{id}")).await
    }
}
