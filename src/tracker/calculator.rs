use core::fmt;

use chrono::Duration;

use crate::domain::Record;
use crate::time::{Clock, SystemClock};

/// Shared aggregation core: a daily limit plus the records charged against it.
///
/// Records are kept in insertion order and only ever grow; there is no
/// removal operation. "Today" is resolved through the injected [`Clock`] at
/// every call, never cached.
pub struct Calculator {
    limit: i64,
    records: Vec<Record>,
    clock: Box<dyn Clock>,
}

impl Calculator {
    /// Creates a calculator reading the ambient system clock.
    pub fn new(limit: i64) -> Self {
        Self::with_clock(limit, Box::new(SystemClock))
    }

    /// Creates a calculator with an explicit clock capability.
    pub fn with_clock(limit: i64, clock: Box<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    /// Saves a new spending/intake record. Always succeeds.
    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(amount = record.amount, date = %record.date, "record added");
        self.records.push(record);
    }

    /// Sums the amounts of all records dated today.
    pub fn today_stats(&self) -> f64 {
        let today = self.clock.today();
        self.records
            .iter()
            .filter(|record| record.date == today)
            .map(|record| record.amount)
            .sum()
    }

    /// Remaining allowance for today. Negative when the limit is exceeded.
    pub fn today_balance(&self) -> f64 {
        self.limit as f64 - self.today_stats()
    }

    /// Sums the amounts over the trailing 7-day window: strictly after
    /// `today - 7 days`, up to and including today.
    pub fn week_stats(&self) -> f64 {
        let today = self.clock.today();
        let week_ago = today - Duration::days(7);
        self.records
            .iter()
            .filter(|record| week_ago < record.date && record.date <= today)
            .map(|record| record.amount)
            .sum()
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
