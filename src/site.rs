use chrono_tz::Tz;

use crate::error::ConfigError;

pub const DEFAULT_YEAR: i32 = 2025;

/// A fixed observing location and the timezone its clocks follow.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Tz,
}

impl Site {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::InvalidLongitude(longitude));
        }
        let timezone = timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(timezone.to_string()))?;

        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            timezone,
        })
    }

    pub fn islamabad() -> Self {
        Self {
            name: String::from("Islamabad"),
            latitude: 33.6844,
            longitude: 73.0479,
            timezone: chrono_tz::Asia::Karachi,
        }
    }
}
