use crate::domain::Record;
use crate::time::Clock;
use crate::tracker::Calculator;

/// Calorie-intake tracker: wraps the shared [`Calculator`] and renders a
/// human-readable remaining-calories report.
#[derive(Debug)]
pub struct CaloriesCalculator {
    calculator: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: i64) -> Self {
        Self {
            calculator: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: i64, clock: Box<dyn Clock>) -> Self {
        Self {
            calculator: Calculator::with_clock(limit, clock),
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.calculator.add_record(record);
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Reports how many more calories may be consumed today. At or past the
    /// limit the message tells the user to stop, with no distinction between
    /// exactly-zero and negative balance.
    pub fn calories_remained(&self) -> String {
        let today_balance = self.calculator.today_balance();
        if today_balance > 0.0 {
            return format!(
                "Сегодня можно съесть что-нибудь ещё, \
                 но с общей калорийностью не более {today_balance} кКал"
            );
        }
        "Хватит есть!".to_string()
    }
}
