use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::{AppState, DashboardTab};
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    sidebar_width: f32,
}

impl DashboardApp {
    pub fn new(state: AppState, config: &DashboardConfig) -> Self {
        Self {
            state,
            sidebar_width: config.sidebar_width,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: logo and filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(self.sidebar_width)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: raw data ----
        egui::TopBottomPanel::bottom("data_panel")
            .resizable(true)
            .show(ctx, |ui| {
                table::filtered_data_table(ui, &self.state);
            });

        // ---- Central panel: tabs and the active chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tab_strip(ui, &mut self.state);
            ui.separator();
            match self.state.active_tab {
                DashboardTab::Evolution => charts::evolution_chart(ui, &self.state),
                DashboardTab::Average => charts::average_chart(ui, &self.state),
                DashboardTab::YearFocus => {
                    panels::year_picker(ui, &mut self.state);
                    charts::year_focus_chart(ui, &self.state);
                }
            }
        });
    }
}
