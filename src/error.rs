use chrono::NaiveDate;

/// Problems with the fixed site/year configuration. These abort the run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("latitude {0}° is outside [-90°, 90°]")]
    InvalidLatitude(f64),
    #[error("longitude {0}° is outside [-180°, 180°]")]
    InvalidLongitude(f64),
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    #[error("year {0} cannot be represented")]
    InvalidYear(i32),
}

/// Sunrise or sunset could not be computed for a single date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DaylightError {
    #[error("the sun never sets on {0}")]
    PolarDay(NaiveDate),
    #[error("the sun never rises on {0}")]
    PolarNight(NaiveDate),
    #[error("{0} has no start of day in the site's timezone")]
    Undefined(NaiveDate),
    #[error("solar calculation failed on {date}")]
    Calculation {
        date: NaiveDate,
        #[source]
        source: solar_positioning::Error,
    },
}

impl DaylightError {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::PolarDay(date) | Self::PolarNight(date) | Self::Undefined(date) => *date,
            Self::Calculation { date, .. } => *date,
        }
    }
}
