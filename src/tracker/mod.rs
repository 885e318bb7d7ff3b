//! Aggregation core and the two report formatters built on top of it.

pub mod calculator;
pub mod calories;
pub mod cash;

pub use calculator::Calculator;
pub use calories::CaloriesCalculator;
pub use cash::CashCalculator;
