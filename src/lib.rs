#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod chart;
pub mod error;
mod plot;
pub mod site;
pub mod sun;
pub mod table;
pub use app::DaylightApp;
pub use plot::format_hour;
use chrono::{DateTime, NaiveDate, NaiveTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn date_to_chart(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::default()).and_utc().timestamp() as f64
}

/// Snaps a chart x-coordinate to the nearest calendar day.
fn date_from_chart(axis: f64) -> Option<NaiveDate> {
    let days = (axis / SECONDS_PER_DAY).round();
    if !days.is_finite() {
        return None;
    }
    let seconds = (days as i64).checked_mul(86_400)?;
    DateTime::from_timestamp(seconds, 0).map(|date| date.date_naive())
}
