//! Shared types, errors, and configuration for Rawda.
//!
//! This crate provides common pieces used across all other crates:
//! - The `Period` type selecting one billing month/year
//! - Lenient JSON deserialization helpers for sloppy backend payloads
//! - The backend error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod json;
pub mod period;

pub use config::AppConfig;
pub use error::{BackendError, BackendResult};
pub use period::{Period, PeriodError};
