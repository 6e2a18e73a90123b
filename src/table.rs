use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use chrono_tz::Tz;
use log::{info, warn};

use crate::{
    date_from_chart,
    error::{ConfigError, DaylightError},
    site::Site,
    sun::{SunCalculator, SunEvents},
};

/// Sunrise and sunset for one calendar date, in the site's civil time.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
    pub sunrise_label: String,
    pub sunset_label: String,
    pub daylight_hours: f64,
}

impl DayRecord {
    pub fn new(date: NaiveDate, events: SunEvents, timezone: Tz) -> Self {
        let sunrise = events.sunrise.with_timezone(&timezone);
        let sunset = events.sunset.with_timezone(&timezone);

        Self {
            date,
            sunrise_hour: fractional_hour(&sunrise),
            sunset_hour: fractional_hour(&sunset),
            sunrise_label: clock_label(&sunrise),
            sunset_label: clock_label(&sunset),
            daylight_hours: daylight_hours(&sunrise, &sunset),
            sunrise,
            sunset,
        }
    }
}

/// Hour of the day with minutes and seconds folded in, in `[0, 24)`.
pub fn fractional_hour(time: &DateTime<Tz>) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

pub fn clock_label(time: &DateTime<Tz>) -> String {
    time.format("%I:%M %p").to_string()
}

/// Elapsed hours between two instants.
///
/// The subtraction happens on the instants themselves, so a sunset that falls
/// after local midnight still yields the full duration.
pub fn daylight_hours(sunrise: &DateTime<Tz>, sunset: &DateTime<Tz>) -> f64 {
    (*sunset - *sunrise).num_seconds() as f64 / 3600.0
}

/// Every date of `year` in ascending order, paired with its record or the
/// reason it could not be computed.
pub fn day_outcomes<'a, C: SunCalculator + ?Sized>(
    site: &'a Site,
    year: i32,
    calculator: &'a C,
) -> Result<impl Iterator<Item = (NaiveDate, Result<DayRecord, DaylightError>)> + 'a, ConfigError>
{
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ConfigError::InvalidYear(year))?;
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ConfigError::InvalidYear(year))?;

    Ok(first
        .iter_days()
        .take_while(move |date| date.year() == year)
        .map(move |date| {
            let record = calculator
                .sun_events(site, date)
                .map(|events| DayRecord::new(date, events, site.timezone));
            (date, record)
        }))
}

/// One year of sunrise/sunset records for a site.
#[derive(Debug, Clone)]
pub struct DaylightTable {
    pub site: Site,
    pub year: i32,
    pub records: Vec<DayRecord>,
    pub skipped: Vec<DaylightError>,
}

impl DaylightTable {
    pub fn generate<C: SunCalculator + ?Sized>(
        site: &Site,
        year: i32,
        calculator: &C,
    ) -> Result<Self, ConfigError> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for (date, outcome) in day_outcomes(site, year, calculator)? {
            match outcome {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!("Skipping {date}: {error}");
                    skipped.push(error);
                }
            }
        }
        info!(
            "Computed {} days of sunrise/sunset for {} in {year} ({} skipped)",
            records.len(),
            site.name,
            skipped.len()
        );

        Ok(Self {
            site: site.clone(),
            year,
            records,
            skipped,
        })
    }

    /// The record for the calendar day closest to a chart x-coordinate.
    pub fn record_at(&self, x: f64) -> Option<&DayRecord> {
        let date = date_from_chart(x)?;
        self.records
            .binary_search_by_key(&date, |record| record.date)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn longest_day(&self) -> Option<&DayRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.daylight_hours.total_cmp(&b.daylight_hours))
    }

    pub fn shortest_day(&self) -> Option<&DayRecord> {
        self.records
            .iter()
            .min_by(|a, b| a.daylight_hours.total_cmp(&b.daylight_hours))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{date_to_chart, sun::SpaCalculator};

    /// Fails on one date and delegates to SPA otherwise.
    struct FailOn(NaiveDate);

    impl SunCalculator for FailOn {
        fn sun_events(&self, site: &Site, date: NaiveDate) -> Result<SunEvents, DaylightError> {
            if date == self.0 {
                Err(DaylightError::PolarNight(date))
            } else {
                SpaCalculator::default().sun_events(site, date)
            }
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn one_record_per_day_in_ascending_order() {
        let table =
            DaylightTable::generate(&Site::islamabad(), 2025, &SpaCalculator::default()).unwrap();
        assert_eq!(table.records.len(), 365);
        assert!(table.skipped.is_empty());
        assert_eq!(table.records[0].date, date(2025, 1, 1));
        assert_eq!(table.records[364].date, date(2025, 12, 31));
        assert!(table.records.windows(2).all(|w| w[0].date < w[1].date));

        let leap =
            DaylightTable::generate(&Site::islamabad(), 2024, &SpaCalculator::default()).unwrap();
        assert_eq!(leap.records.len(), 366);
    }

    #[test]
    fn hours_stay_within_the_day() {
        let table =
            DaylightTable::generate(&Site::islamabad(), 2025, &SpaCalculator::default()).unwrap();
        for record in &table.records {
            assert!((0.0..24.0).contains(&record.sunrise_hour), "{record:?}");
            assert!((0.0..24.0).contains(&record.sunset_hour), "{record:?}");
            assert!(record.sunrise_label.ends_with("AM"), "{record:?}");
            assert!(record.sunset_label.ends_with("PM"), "{record:?}");
            let expected = (record.sunset - record.sunrise).num_seconds() as f64 / 3600.0;
            assert_eq!(record.daylight_hours, expected);
        }
    }

    #[test]
    fn failing_date_is_skipped() {
        let bad = date(2025, 3, 14);
        let table = DaylightTable::generate(&Site::islamabad(), 2025, &FailOn(bad)).unwrap();

        assert_eq!(table.records.len(), 364);
        assert!(table.records.iter().all(|record| record.date != bad));
        assert!(table.records.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(table.skipped, vec![DaylightError::PolarNight(bad)]);
        assert_eq!(table.skipped[0].date(), bad);
    }

    #[test]
    fn outcomes_keep_failures_in_place() {
        let bad = date(2025, 1, 2);
        let outcomes: Vec<_> = day_outcomes(&Site::islamabad(), 2025, &FailOn(bad))
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(outcomes[0].0, date(2025, 1, 1));
        assert!(outcomes[0].1.is_ok());
        assert_eq!(outcomes[1], (bad, Err(DaylightError::PolarNight(bad))));
        assert!(outcomes[2].1.is_ok());
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        let err = DaylightTable::generate(&Site::islamabad(), 400_000, &SpaCalculator::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYear(400_000)));
    }

    #[test]
    fn daylight_across_local_midnight() {
        let tz = chrono_tz::Asia::Karachi;
        let sunrise = tz.with_ymd_and_hms(2025, 6, 21, 5, 0, 0).unwrap();
        let sunset = tz.with_ymd_and_hms(2025, 6, 22, 0, 30, 0).unwrap();

        // Subtracting the clock fields alone would give -4.5 hours.
        assert!(fractional_hour(&sunset) - fractional_hour(&sunrise) < 0.0);
        assert_eq!(daylight_hours(&sunrise, &sunset), 19.5);
    }

    #[test]
    fn record_converts_utc_events_to_local_time() {
        let events = SunEvents {
            sunrise: Utc.with_ymd_and_hms(2025, 6, 21, 0, 1, 30).unwrap(),
            sunset: Utc.with_ymd_and_hms(2025, 6, 21, 14, 22, 0).unwrap(),
        };
        let record = DayRecord::new(date(2025, 6, 21), events, chrono_tz::Asia::Karachi);

        assert_eq!(record.sunrise_hour, 5.0 + 1.0 / 60.0 + 30.0 / 3600.0);
        assert_eq!(record.sunset_hour, 19.0 + 22.0 / 60.0);
        assert_eq!(record.sunrise_label, "05:01 AM");
        assert_eq!(record.sunset_label, "07:22 PM");
        assert_eq!(record.daylight_hours, 51_630.0 / 3600.0);
    }

    #[test]
    fn lookup_by_chart_coordinate() {
        let bad = date(2025, 7, 4);
        let table = DaylightTable::generate(&Site::islamabad(), 2025, &FailOn(bad)).unwrap();

        let noon = date_to_chart(date(2025, 2, 10)) + 12.0 * 3600.0 - 1.0;
        assert_eq!(table.record_at(noon).unwrap().date, date(2025, 2, 10));
        let evening = date_to_chart(date(2025, 2, 10)) + 13.0 * 3600.0;
        assert_eq!(table.record_at(evening).unwrap().date, date(2025, 2, 11));
        assert!(table.record_at(date_to_chart(bad)).is_none());
        assert!(table.record_at(date_to_chart(date(2026, 1, 1))).is_none());
    }

    #[test]
    fn extremes_follow_the_solstices() {
        let table =
            DaylightTable::generate(&Site::islamabad(), 2025, &SpaCalculator::default()).unwrap();
        let longest = table.longest_day().unwrap().date;
        let shortest = table.shortest_day().unwrap().date;
        assert!((date(2025, 6, 15)..=date(2025, 6, 27)).contains(&longest));
        assert!((date(2025, 12, 15)..=date(2025, 12, 27)).contains(&shortest));
    }
}
