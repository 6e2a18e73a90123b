use std::{ops::RangeInclusive, sync::Arc};

use chrono::{Datelike, NaiveDate, NaiveTime};
use egui_plot::{
    AxisHints, CoordinatesFormatter, Corner, GridInput, GridMark, Legend, Plot, PlotPoint,
};

use crate::{date_from_chart, date_to_chart, SECONDS_PER_DAY};

/// Hours between two labelled ticks of the time-of-day axis.
const HOUR_STEP: usize = 2;

/// Formats a fractional hour of the day as a 12-hour clock label.
///
/// ```
/// assert_eq!(daylight_egui::format_hour(13.0), "01:00 PM");
/// ```
pub fn format_hour(hour: f64) -> String {
    let whole = hour.trunc();
    let (hour, minute) = if whole == 24.0 {
        (23, 59)
    } else {
        (whole as u32 % 24, ((hour - whole) * 60.0) as u32)
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| time.format("%I:%M %p").to_string())
        .unwrap_or_default()
}

/// Hours of the day that get a tick on the y axis.
pub fn hour_ticks() -> impl Iterator<Item = u32> {
    (0..24).step_by(HOUR_STEP)
}

// Later times are plotted lower, so the y value is the negated hour.
pub(crate) fn hour_to_chart(hour: f64) -> f64 {
    -hour
}

fn hour_from_chart(axis: f64) -> f64 {
    -axis
}

fn x_grid(input: GridInput) -> Vec<GridMark> {
    let (start, end) = input.bounds;
    let (Some(start), Some(end)) = (date_from_chart(start), date_from_chart(end)) else {
        return Vec::new();
    };
    let visible = |date: NaiveDate| {
        let value = date_to_chart(date);
        input.bounds.0 <= value && value <= input.bounds.1
    };

    let year_step_size = SECONDS_PER_DAY * 365.0;
    let month_step_size = SECONDS_PER_DAY * 30.0;
    let day_step_size = SECONDS_PER_DAY;

    let mut marks = vec![];

    // Early exit if there is too many months to display
    if (end - start).num_days() > 365 * 3 {
        for year in start.year()..=end.year() {
            if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1).filter(|date| visible(*date)) {
                marks.push(GridMark {
                    value: date_to_chart(date),
                    step_size: year_step_size,
                });
            }
        }
        return marks;
    }

    let show_days = (end - start).num_days() <= 30 * 3;
    for date in start.iter_days().take_while(|date| *date <= end) {
        if !visible(date) {
            continue;
        }
        if date.day() == 1 {
            marks.push(GridMark {
                value: date_to_chart(date),
                step_size: month_step_size,
            });
        } else if show_days {
            marks.push(GridMark {
                value: date_to_chart(date),
                step_size: day_step_size,
            });
        }
    }

    marks
}

fn y_grid(input: GridInput) -> Vec<GridMark> {
    let (bottom, top) = input.bounds;
    hour_ticks()
        .map(|hour| hour_to_chart(hour as f64))
        .filter(|value| (bottom..=top).contains(value))
        .map(|value| GridMark {
            value,
            step_size: HOUR_STEP as f64,
        })
        .collect()
}

/// A plot with a date x axis and an inverted time-of-day y axis.
///
/// `describe` produces the hover text for a point; when it returns `None` the
/// date and time under the pointer are shown instead.
pub fn create_plot_daylight(
    name: &str,
    describe: impl Fn(&PlotPoint) -> Option<String> + 'static,
) -> Plot {
    let date_formatter = |mark: GridMark, _max_chars: usize, _range: &RangeInclusive<f64>| {
        let format = if mark.step_size >= SECONDS_PER_DAY * 365.0 {
            "%Y"
        } else {
            "%b %d"
        };
        date_from_chart(mark.value)
            .map(|date| date.format(format).to_string())
            .unwrap_or_default()
    };
    let hour_formatter = |mark: GridMark, _max_chars: usize, _range: &RangeInclusive<f64>| {
        format_hour(hour_from_chart(mark.value))
    };

    let format_plot_point = Arc::new(|point: &PlotPoint| {
        let date = date_from_chart(point.x)
            .map(|date| date.format("%b %d, %Y").to_string())
            .unwrap_or_default();
        format!("{}\n{}", date, format_hour(hour_from_chart(point.y)))
    });

    let fmt = format_plot_point.clone();

    Plot::new(name)
        .legend(Legend::default().position(Corner::LeftTop))
        .coordinates_formatter(
            Corner::LeftBottom,
            CoordinatesFormatter::new(move |point, _| fmt(point)),
        )
        .custom_x_axes(vec![AxisHints::new_x()
            .label("Date")
            .formatter(date_formatter)])
        .custom_y_axes(vec![AxisHints::new_y()
            .label("Time of Day")
            .formatter(hour_formatter)])
        .x_grid_spacer(x_grid)
        .y_grid_spacer(y_grid)
        .include_y(hour_to_chart(0.0))
        .include_y(hour_to_chart(24.0))
        .label_formatter(move |_, point| {
            describe(point).unwrap_or_else(|| format_plot_point(point))
        })
}
