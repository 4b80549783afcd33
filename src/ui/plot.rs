use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::MeasurementTable;

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render one benchmark table as a line chart.
///
/// One line per series, in table column order, labeled with the column name.
/// A table with zero series still draws axes and grid with an empty legend.
/// `chart_id` keys the plot's pan/zoom memory, so each chart starts at its
/// own default bounds.
pub fn timing_plot(ui: &mut Ui, chart_id: &str, table: &MeasurementTable, colors: &[Color32]) {
    Plot::new(chart_id.to_owned())
        .legend(Legend::default())
        .x_axis_label("Array Size")
        .y_axis_label("Time (microseconds)")
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, series) in table.series.iter().enumerate() {
                let color = colors.get(idx).copied().unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = table
                    .sizes
                    .iter()
                    .zip(series.values.iter())
                    .map(|(&xi, &yi)| [xi, yi])
                    .collect();

                let line = Line::new(points)
                    .name(&series.name)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
