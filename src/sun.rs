use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use solar_positioning::{spa, time::DeltaT, Horizon, SunriseResult};

use crate::{error::DaylightError, site::Site};

/// Sunrise and sunset instants for one date, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunEvents {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

pub trait SunCalculator {
    /// Sunrise and sunset falling on `date` in the site's timezone.
    fn sun_events(&self, site: &Site, date: NaiveDate) -> Result<SunEvents, DaylightError>;
}

/// NREL SPA sunrise/sunset from the `solar-positioning` crate.
#[derive(Debug, Clone, Copy)]
pub struct SpaCalculator {
    pub horizon: Horizon,
}

impl Default for SpaCalculator {
    fn default() -> Self {
        Self {
            horizon: Horizon::SunriseSunset,
        }
    }
}

impl SpaCalculator {
    /// The first instant of `date` on the site's clocks.
    ///
    /// Where a transition skips midnight, the day starts at 01:00 instead.
    fn local_midnight(site: &Site, date: NaiveDate) -> Option<DateTime<Tz>> {
        [0, 1].into_iter().find_map(|hour| {
            let start = date.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);
            site.timezone.from_local_datetime(&start).earliest()
        })
    }
}

impl SunCalculator for SpaCalculator {
    fn sun_events(&self, site: &Site, date: NaiveDate) -> Result<SunEvents, DaylightError> {
        let calculation =
            |source: solar_positioning::Error| DaylightError::Calculation { date, source };

        let midnight =
            Self::local_midnight(site, date).ok_or(DaylightError::Undefined(date))?;
        let delta_t = DeltaT::estimate_from_date_like(date).map_err(calculation)?;
        let result = spa::sunrise_sunset_for_horizon(
            midnight,
            site.latitude,
            site.longitude,
            delta_t,
            self.horizon,
        )
        .map_err(calculation)?;

        match result {
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => Ok(SunEvents {
                sunrise: sunrise.with_timezone(&Utc),
                sunset: sunset.with_timezone(&Utc),
            }),
            SunriseResult::AllDay { .. } => Err(DaylightError::PolarDay(date)),
            SunriseResult::AllNight { .. } => Err(DaylightError::PolarNight(date)),
        }
    }
}
