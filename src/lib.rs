#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers daily-limit tracking primitives: timestamped records,
//! windowed aggregation, and human-readable balance reports for spending and
//! calorie intake.

pub mod currency;
pub mod domain;
pub mod errors;
pub mod time;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
