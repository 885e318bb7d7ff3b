use core::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Date format accepted for explicit record dates, e.g. "23.03.2024".
pub const LOCAL_DATE_FORMAT: &str = "%d.%m.%Y";

/// A single tracked entry: an amount of money spent or calories consumed.
///
/// Negative amounts are allowed and represent income or burned calories.
/// Records are immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub amount: f64,
    pub comment: String,
    pub date: NaiveDate,
}

impl Record {
    /// Creates a record dated with the current local date, evaluated now.
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, Local::now().date_naive())
    }

    /// Creates a record with an explicit calendar date.
    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Creates a record from a textual date in [`LOCAL_DATE_FORMAT`].
    pub fn parse(
        amount: f64,
        comment: impl Into<String>,
        date: &str,
    ) -> Result<Self, TrackerError> {
        let date = NaiveDate::parse_from_str(date, LOCAL_DATE_FORMAT)?;
        Ok(Self::on(amount, comment, date))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.amount, self.comment, self.date)
    }
}
