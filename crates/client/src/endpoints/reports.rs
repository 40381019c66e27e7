//! Backend-computed report endpoints.
//!
//! These aggregates are owned by the backend and displayed verbatim; the
//! client never recomputes them.

use rawda_shared::{BackendResult, Period};

use crate::http::ApiClient;
use crate::models::{MonthlyProfit, ProfitSummary};

/// `/reports` endpoints.
pub struct ReportsApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Report endpoints.
    #[must_use]
    pub const fn reports(&self) -> ReportsApi<'_> {
        ReportsApi(self)
    }
}

impl ReportsApi<'_> {
    /// `GET /reports/profit-summary` - all-time totals.
    pub async fn profit_summary(&self) -> BackendResult<ProfitSummary> {
        self.0.get("/reports/profit-summary").await
    }

    /// `GET /reports/profit-trend` - per-month aggregates.
    pub async fn profit_trend(&self) -> BackendResult<Vec<MonthlyProfit>> {
        self.0.get("/reports/profit-trend").await
    }

    /// `GET /reports/monthly-profit` for one period.
    pub async fn monthly_profit(&self, period: Period) -> BackendResult<MonthlyProfit> {
        self.0.get_period("/reports/monthly-profit", period).await
    }
}
