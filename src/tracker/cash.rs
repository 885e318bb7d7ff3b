use crate::currency::{round2, Currency};
use crate::domain::Record;
use crate::time::Clock;
use crate::tracker::Calculator;

/// Money tracker: wraps the shared [`Calculator`] and renders the remaining
/// daily cash in one of the supported currencies.
#[derive(Debug)]
pub struct CashCalculator {
    calculator: Calculator,
}

impl CashCalculator {
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

    /// Reports how much more money may be spent today, converted into the
    /// requested currency. Unknown codes get an explanatory message rather
    /// than an error.
    ///
    /// The exact-zero check runs on the base-currency balance before
    /// conversion, so a balance that only rounds to zero after division
    /// (usd/eur) is reported as a remaining amount of 0 instead. Kept as-is
    /// to match the long-standing behavior.
    pub fn today_cash_remained(&self, currency: &str) -> String {
        let today_cash = self.calculator.today_balance();

        if today_cash == 0.0 {
            return "Денег нет, держись".to_string();
        }

        let Some(known) = Currency::from_code(currency) else {
            return format!("Тип валюты {currency} неизвестен. Корректный расчёт невозможен.");
        };

        let currency_name = known.display_name();
        let cash_in_currency = round2(today_cash / known.rate());

        if cash_in_currency < 0.0 {
            let today_debt = cash_in_currency.abs();
            return format!("Денег нет, держись: твой долг - {today_debt} {currency_name}");
        }

        format!("На сегодня осталось {cash_in_currency} {currency_name}")
    }
}
