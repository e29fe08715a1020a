use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::assets::LogoAsset;
use crate::state::{AppState, DashboardTab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered), or the warning if it could not be loaded ----
    match &state.logo {
        LogoAsset::Loaded { uri, bytes } => {
            let image = egui::Image::from_bytes(uri.clone(), bytes.clone());
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add(
                    image
                        .max_width(ui.available_width() * 0.8)
                        .max_height(120.0)
                        .corner_radius(4.0),
                );
            });
        }
        LogoAsset::Missing { warning } => {
            let color = ui.visuals().warn_fg_color;
            ui.label(RichText::new(format!("⚠ {warning}")).color(color));
        }
    }
    ui.add_space(4.0);

    ui.heading("Filters");
    ui.separator();

    let n_selected = state.filters.entities.len();
    let n_total = state.dataset.entities.len();
    ui.strong(format!("Entities  ({n_selected}/{n_total})"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
        if ui.small_button("Defaults").clicked() {
            state.reset_defaults();
        }
    });

    ui.add(
        egui::TextEdit::singleline(&mut state.entity_search)
            .hint_text("Search entities…")
            .desired_width(f32::INFINITY),
    );

    // Owned copy so the checkboxes can mutate state.
    let options: Vec<String> = state
        .searchable_entities()
        .into_iter()
        .map(str::to_string)
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if options.is_empty() {
                ui.label("No matching entities.");
            }
            for entity in &options {
                let mut checked = state.filters.entities.contains(entity);
                let text = RichText::new(entity).color(state.color_map.color_for(entity));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_entity(entity);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the record summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading("Electricity Access");
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            state.views.entity_rows.len()
        ));
        if let (Some(first), Some(last)) = (state.dataset.years.first(), state.dataset.years.last()) {
            ui.separator();
            ui.label(format!("Years {first}–{last}"));
        }
    });
}

// ---------------------------------------------------------------------------
// Tab strip and year picker
// ---------------------------------------------------------------------------

/// Selectable labels switching between the three chart views.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in DashboardTab::ALL {
            ui.selectable_value(&mut state.active_tab, tab, tab.label());
        }
    });
}

/// Focus year selector over the years present in the data.
pub fn year_picker(ui: &mut Ui, state: &mut AppState) {
    let current = state
        .filters
        .focus_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "–".to_string());

    let mut picked = None;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Focus year:");
        egui::ComboBox::from_id_salt("focus_year")
            .selected_text(current)
            .show_ui(ui, |ui: &mut Ui| {
                // Latest first, like the default.
                for &year in state.dataset.years.iter().rev() {
                    let selected = state.filters.focus_year == Some(year);
                    if ui.selectable_label(selected, year.to_string()).clicked() {
                        picked = Some(year);
                    }
                }
            });
    });

    if let Some(year) = picked {
        state.set_focus_year(year);
    }
}
