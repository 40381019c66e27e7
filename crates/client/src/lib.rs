//! REST backend collaborator for Rawda.
//!
//! The backend is the source of truth for entities, payments, and
//! persistence; this crate only wraps its JSON endpoints. Payloads are
//! deserialized defensively: the backend is known to mix numeric and
//! string typing on ids and period fields.

pub mod endpoints;
pub mod http;
pub mod models;

pub use http::ApiClient;
pub use models::{
    ClassRoom, Employee, FeeRecord, MonthlyProfit, PayFeeRequest, PaySalaryRequest,
    ProfitSummary, SalaryPayment, Student, Supply,
};
