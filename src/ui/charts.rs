use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text,
};

use crate::state::{format_percent, AppState};

const PERCENT_AXIS: &str = "% of population with access";

/// Axis labels for a categorical axis: integer positions map to names.
fn category_formatter(
    names: Vec<String>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark, _range| {
        let pos = mark.value;
        if pos.fract() != 0.0 || pos < 0.0 {
            return String::new();
        }
        names.get(pos as usize).cloned().unwrap_or_default()
    }
}

fn empty_hint(ui: &mut Ui, state: &AppState) {
    if state.filters.entities.is_empty() {
        ui.label(RichText::new("No entities selected.").weak());
    }
}

// ---------------------------------------------------------------------------
// Evolution: one line per entity over the years
// ---------------------------------------------------------------------------

pub fn evolution_chart(ui: &mut Ui, state: &AppState) {
    ui.heading("Evolution of electricity access");
    empty_hint(ui, state);

    let dataset = &state.dataset;

    // entity → points, in file order
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &i in &state.views.entity_rows {
        let rec = &dataset.records[i];
        series
            .entry(rec.entity.as_str())
            .or_default()
            .push([rec.year as f64, rec.percent_access]);
    }

    Plot::new("evolution_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label(PERCENT_AXIS)
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .include_y(0.0)
        .include_y(100.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (entity, mut points) in series {
                let color = state.color_map.color_for(entity);
                points.sort_by(|a, b| a[0].total_cmp(&b[0]));

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(entity)
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(entity)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Average: horizontal bars, ascending mean
// ---------------------------------------------------------------------------

pub fn average_chart(ui: &mut Ui, state: &AppState) {
    ui.heading("Average electricity access per entity");
    empty_hint(ui, state);

    let means = &state.views.means;
    let names: Vec<String> = means.iter().map(|m| m.entity.clone()).collect();

    Plot::new("average_plot")
        .legend(Legend::default())
        .x_axis_label(format!("Average {PERCENT_AXIS}"))
        .y_axis_label("Entity")
        .y_axis_formatter(category_formatter(names))
        .include_x(0.0)
        .include_x(100.0)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (pos, mean) in means.iter().enumerate() {
                let color = state.color_map.color_for(&mean.entity);
                let bar = Bar::new(pos as f64, mean.mean_access)
                    .name(format!("{} ({} years)", mean.entity, mean.samples))
                    .fill(color)
                    .width(0.6);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .horizontal()
                        .color(color)
                        .name(&mean.entity),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Year focus: one large point per entity for a single year
// ---------------------------------------------------------------------------

pub fn year_focus_chart(ui: &mut Ui, state: &AppState) {
    let title = match state.filters.focus_year {
        Some(year) => format!("Electricity access in {year}"),
        None => "Electricity access in a single year".to_string(),
    };
    ui.heading(title);
    empty_hint(ui, state);

    let dataset = &state.dataset;

    // Categories in order of first appearance.
    let mut names: Vec<String> = Vec::new();
    let mut points: Vec<(usize, &str, f64)> = Vec::new();
    for &i in &state.views.focus_rows {
        let rec = &dataset.records[i];
        let pos = match names.iter().position(|n| *n == rec.entity) {
            Some(p) => p,
            None => {
                names.push(rec.entity.clone());
                names.len() - 1
            }
        };
        points.push((pos, rec.entity.as_str(), rec.percent_access));
    }

    Plot::new("year_focus_plot")
        .legend(Legend::default())
        .x_axis_label(PERCENT_AXIS)
        .y_axis_label("Entity")
        .y_axis_formatter(category_formatter(names))
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{}", format_percent(value.x))
            }
        })
        .include_x(0.0)
        .include_x(100.0)
        .include_y(-0.5)
        .show(ui, |plot_ui| {
            for (pos, entity, pct) in points {
                let color = state.color_map.color_for(entity);
                let y = pos as f64;
                plot_ui.points(
                    Points::new(vec![[pct, y]])
                        .name(entity)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(7.5),
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(pct, y + 0.3), format_percent(pct))
                        .color(color)
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}
