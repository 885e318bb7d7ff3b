use chrono::{DateTime, Duration, Local, NaiveDate};
use tracker_core::{
    domain::Record,
    time::Clock,
    tracker::{Calculator, CaloriesCalculator, CashCalculator},
};

/// Clock pinned to a single calendar date so "today" is deterministic.
#[derive(Debug, Clone, Copy)]
struct FixedClock {
    today: NaiveDate,
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

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 23).unwrap()
}

fn clock() -> Box<FixedClock> {
    Box::new(FixedClock { today: today() })
}

#[test]
fn day_of_spending_against_a_limit() {
    let mut calculator = Calculator::with_clock(1000, clock());
    calculator.add_record(Record::on(145.0, "coffee and bun", today()));
    calculator.add_record(Record::on(160.0, "lunch", today()));
    calculator.add_record(
        Record::parse(691.0, "concert ticket", "22.03.2024").expect("valid explicit date"),
    );

    assert_eq!(calculator.today_stats(), 305.0);
    assert_eq!(calculator.today_balance(), 695.0);
    // Yesterday's ticket still lands in the weekly total.
    assert_eq!(calculator.week_stats(), 996.0);
}

#[test]
fn week_window_drops_old_records() {
    let mut calculator = Calculator::with_clock(1000, clock());
    calculator.add_record(Record::on(100.0, "recent", today() - Duration::days(6)));
    calculator.add_record(Record::on(200.0, "stale", today() - Duration::days(8)));

    assert_eq!(calculator.week_stats(), 100.0);
    assert_eq!(calculator.today_stats(), 0.0);
}

#[test]
fn calories_tracker_full_day() {
    let mut tracker = CaloriesCalculator::with_clock(2000, clock());
    tracker.add_record(Record::on(500.0, "breakfast", today()));

    let message = tracker.calories_remained();
    assert!(message.contains("1500"), "unexpected message: {message}");

    tracker.add_record(Record::on(1500.0, "the rest of the day", today()));
    assert_eq!(tracker.calories_remained(), "Хватит есть!");
}

#[test]
fn cash_tracker_reports_in_each_currency() {
    let tracker = CashCalculator::with_clock(1000, clock());

    assert_eq!(
        tracker.today_cash_remained("rub"),
        "На сегодня осталось 1000 руб"
    );
    assert_eq!(
        tracker.today_cash_remained("usd"),
        "На сегодня осталось 9.54 USD"
    );
    assert_eq!(
        tracker.today_cash_remained("eur"),
        "На сегодня осталось 8.63 Euro"
    );
}

#[test]
fn cash_tracker_debt_and_unknown_currency() {
    let mut tracker = CashCalculator::with_clock(1000, clock());
    tracker.add_record(Record::on(1500.0, "shopping", today()));

    assert_eq!(
        tracker.today_cash_remained("rub"),
        "Денег нет, держись: твой долг - 500 руб"
    );
    assert_eq!(
        tracker.today_cash_remained("gbp"),
        "Тип валюты gbp неизвестен. Корректный расчёт невозможен."
    );
}

#[test]
fn cash_tracker_zero_balance_message() {
    let mut tracker = CashCalculator::with_clock(1000, clock());
    tracker.add_record(Record::on(600.0, "groceries", today()));
    tracker.add_record(Record::on(400.0, "utilities", today()));

    assert_eq!(tracker.today_cash_remained("eur"), "Денег нет, держись");
}

#[test]
fn malformed_date_surfaces_a_parse_error() {
    let err = Record::parse(100.0, "typo", "03/23/2024").expect_err("format mismatch");
    assert!(format!("{err}").contains("Invalid date"));
}
