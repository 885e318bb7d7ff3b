//! Data model for tracked entries.

pub mod record;

pub use record::{Record, LOCAL_DATE_FORMAT};
