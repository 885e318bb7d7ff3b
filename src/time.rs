use chrono::{DateTime, Local, NaiveDate};

/// Clock abstracts access to the current timestamp so aggregation over
/// "today" remains deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local calendar date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the ambient system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Clock pinned to a single calendar date.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock {
        today: NaiveDate,
    }

    impl FixedClock {
        pub fn on(today: NaiveDate) -> Self {
            Self { today }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.today
                .and_hms_opt(12, 0, 0)
                .unwrap()
                .and_local_timezone(Local)
                .single()
                .expect("unambiguous local noon")
        }

        fn today(&self) -> NaiveDate {
            self.today
        }
    }
}
