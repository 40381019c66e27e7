//! Month/year pair selecting one billing period.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest year the business accepts records for.
pub const MIN_YEAR: i32 = 2020;

/// Invalid period input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Month outside 1-12.
    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    /// Year outside the accepted window.
    #[error("Year must be between {min} and {max}, got {year}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Lowest accepted year.
        min: i32,
        /// Highest accepted year.
        max: i32,
    },
}

/// A month/year pair selecting one billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl Period {
    /// Validated constructor. Years are accepted from [`MIN_YEAR`] up to
    /// five years past the current one.
    pub fn new(month: u32, year: i32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::MonthOutOfRange(month));
        }
        let max = Utc::now().year() + 5;
        if !(MIN_YEAR..=max).contains(&year) {
            return Err(PeriodError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max,
            });
        }
        Ok(Self { month, year })
    }

    /// The current calendar month/year.
    #[must_use]
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
