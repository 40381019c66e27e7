//! Supplies expense endpoints.

use rawda_shared::{BackendResult, Period};

use crate::http::ApiClient;
use crate::models::Supply;

/// `/supplies` endpoints.
pub struct SuppliesApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Supplies endpoints.
    #[must_use]
    pub const fn supplies(&self) -> SuppliesApi<'_> {
        SuppliesApi(self)
    }
}

impl SuppliesApi<'_> {
    /// `GET /supplies`.
    pub async fn list(&self) -> BackendResult<Vec<Supply>> {
        self.0.get("/supplies").await
    }

    /// `GET /supplies/monthly` for one period.
    pub async fn monthly(&self, period: Period) -> BackendResult<Vec<Supply>> {
        self.0.get_period("/supplies/monthly", period).await
    }

    /// `POST /supplies`.
    pub async fn create(&self, supply: &Supply) -> BackendResult<Supply> {
        self.0.post("/supplies", supply).await
    }

    /// `PUT /supplies/{id}`.
    pub async fn update(&self, id: i64, supply: &Supply) -> BackendResult<Supply> {
        self.0.put(&format!("/supplies/{id}"), supply).await
    }

    /// `DELETE /supplies/{id}`.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        self.0.delete(&format!("/supplies/{id}")).await
    }
}
