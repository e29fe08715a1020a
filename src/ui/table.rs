use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{ENTITY_COLUMN, PERCENT_COLUMN, YEAR_COLUMN};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Collapsible raw view of the entity-filtered records, closed by default.
pub fn filtered_data_table(ui: &mut Ui, state: &AppState) {
    egui::CollapsingHeader::new("View filtered data")
        .id_salt("filtered_data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let dataset = &state.dataset;
            let rows = &state.views.entity_rows;
            let extra = &dataset.extra_columns;

            ui.label(format!("{} rows", rows.len()));

            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(260.0)
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(60.0))
                .columns(Column::auto().at_least(100.0), 1 + extra.len())
                .header(ROW_HEIGHT + 2.0, |mut header| {
                    for name in [ENTITY_COLUMN, YEAR_COLUMN, PERCENT_COLUMN] {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                    for name in extra {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let rec = &dataset.records[rows[row.index()]];
                        row.col(|ui| {
                            ui.label(&rec.entity);
                        });
                        row.col(|ui| {
                            ui.label(rec.year.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", rec.percent_access));
                        });
                        for name in extra {
                            row.col(|ui| {
                                let text = rec
                                    .extra
                                    .get(name)
                                    .map(|v| v.to_string())
                                    .unwrap_or_default();
                                ui.label(text);
                            });
                        }
                    });
                });
        });
}
