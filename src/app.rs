use std::sync::Arc;

use crate::{chart::DaylightChart, table::DaylightTable};

#[derive(Clone)]
pub struct DaylightApp {
    table: Arc<DaylightTable>,
    chart: DaylightChart,
}

impl DaylightApp {
    pub fn new(table: DaylightTable) -> Self {
        let table = Arc::new(table);

        DaylightApp {
            chart: DaylightChart::new(table.clone()),
            table,
        }
    }

    fn summary(&self) -> String {
        let mut summary = format!("{} days", self.table.records.len());
        if let (Some(longest), Some(shortest)) =
            (self.table.longest_day(), self.table.shortest_day())
        {
            summary.push_str(&format!(
                " · longest {} ({:.2} h) · shortest {} ({:.2} h)",
                longest.date.format("%b %d"),
                longest.daylight_hours,
                shortest.date.format("%b %d"),
                shortest.daylight_hours,
            ));
        }
        if !self.table.skipped.is_empty() {
            summary.push_str(&format!(" · {} skipped", self.table.skipped.len()));
        }
        summary
    }

    pub fn ui(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            // The top panel is often a good place for a menu bar:

            egui::menu::bar(ui, |ui| {
                // NOTE: no File->Quit on web pages!
                let is_web = cfg!(target_arch = "wasm32");
                if !is_web {
                    ui.menu_button("File", |ui| {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.add_space(16.0);
                }

                egui::widgets::global_dark_light_mode_buttons(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!(
                "Sunrise and Sunset Times in {} for {} (Local Time)",
                self.table.site.name, self.table.year
            ));
            ui.label(self.summary());
            ui.separator();
            self.chart.ui(ui);
        });
    }
}

impl eframe::App for DaylightApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.ui(ctx, frame);
    }
}
