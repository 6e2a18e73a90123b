use std::sync::Arc;

use egui::{Color32, Ui};
use egui_plot::{Line, VLine};

use crate::{
    date_to_chart,
    plot::{create_plot_daylight, hour_to_chart},
    table::{DayRecord, DaylightTable},
};

const SUNRISE_COLOR: Color32 = Color32::from_rgb(255, 165, 0);
const SUNSET_COLOR: Color32 = Color32::from_rgb(128, 0, 128);

/// Combined tooltip for one day: both clock times and the daylight duration.
pub fn hover_text(record: &DayRecord) -> String {
    format!(
        "{}\nSunrise: {}\nSunset: {}\nDaylight hours: {:.2} hours",
        record.date.format("%b %d, %Y"),
        record.sunrise_label,
        record.sunset_label,
        record.daylight_hours
    )
}

/// Sunrise and sunset lines over one year.
#[derive(Clone)]
pub struct DaylightChart {
    table: Arc<DaylightTable>,
}

impl DaylightChart {
    pub fn new(table: Arc<DaylightTable>) -> Self {
        Self { table }
    }

    pub fn ui(&self, ui: &mut Ui) {
        let table = self.table.clone();
        let plot = create_plot_daylight("Daylight", move |point| {
            table.record_at(point.x).map(hover_text)
        });

        plot.show(ui, |ui| {
            // gather all data
            let sunrise: Vec<_> = self
                .table
                .records
                .iter()
                .map(|day| [date_to_chart(day.date), hour_to_chart(day.sunrise_hour)])
                .collect();
            let sunset: Vec<_> = self
                .table
                .records
                .iter()
                .map(|day| [date_to_chart(day.date), hour_to_chart(day.sunset_hour)])
                .collect();

            // display all data
            ui.line(Line::new(sunrise).color(SUNRISE_COLOR).name("Sunrise"));
            ui.line(Line::new(sunset).color(SUNSET_COLOR).name("Sunset"));

            // mark the hovered day so the tooltip reads against both lines
            if let Some(record) = ui
                .pointer_coordinate()
                .and_then(|point| self.table.record_at(point.x))
            {
                ui.vline(
                    VLine::new(date_to_chart(record.date))
                        .color(Color32::GRAY)
                        .width(0.5),
                );
            }
        });
    }
}
