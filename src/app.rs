use eframe::egui::{self, Color32, ViewportCommand};

use crate::color::generate_palette;
use crate::data::model::MeasurementTable;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Chart queue – sequential display in one native window
// ---------------------------------------------------------------------------

/// One chart awaiting display.
pub struct Chart {
    pub table: MeasurementTable,
    pub title: String,
}

/// Charts pending display, shown one at a time in load order.
///
/// winit allows one event loop per process, so sequential charts cannot each
/// get their own `run_native` call; instead the single window walks this
/// queue, and closing the window dismisses the current chart.
struct ChartQueue {
    charts: Vec<Chart>,
    current: usize,
}

impl ChartQueue {
    fn new(charts: Vec<Chart>) -> Self {
        Self { charts, current: 0 }
    }

    fn current(&self) -> &Chart {
        &self.charts[self.current]
    }

    /// Move to the next chart. Returns false once the queue is exhausted.
    fn advance(&mut self) -> bool {
        if self.current + 1 < self.charts.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

struct ChartApp {
    queue: ChartQueue,
    colors: Vec<Color32>,
}

impl ChartApp {
    fn new(charts: Vec<Chart>) -> Self {
        let queue = ChartQueue::new(charts);
        let colors = generate_palette(queue.current().table.series.len());
        Self { queue, colors }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Closing the window dismisses the current chart. While more charts
        // are queued the close is cancelled and the next chart takes over;
        // closing the last chart ends the run.
        if ctx.input(|i| i.viewport().close_requested()) && self.queue.advance() {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            let chart = self.queue.current();
            self.colors = generate_palette(chart.table.series.len());
            ctx.send_viewport_cmd(ViewportCommand::Title(chart.title.clone()));
        }

        let chart = self.queue.current();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&chart.title);
            plot::timing_plot(ui, &chart.title, &chart.table, &self.colors);
        });
    }
}

/// Display the charts sequentially in one native window, blocking until the
/// last one is dismissed. Each chart's title is drawn above the plot and set
/// as the window title.
pub fn show_charts(charts: Vec<Chart>) -> eframe::Result {
    let Some(first) = charts.first() else {
        return Ok(());
    };
    let title = first.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(charts)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;

    fn chart(title: &str) -> Chart {
        Chart {
            table: MeasurementTable {
                sizes: vec![10.0, 100.0],
                series: vec![Series {
                    name: "A".into(),
                    values: vec![1.0, 2.0],
                }],
            },
            title: title.to_string(),
        }
    }

    #[test]
    fn queue_walks_all_charts_in_order_within_one_window() {
        let mut queue = ChartQueue::new(vec![
            chart("Random Data"),
            chart("Reverse Sorted Data"),
            chart("Almost Sorted Data"),
        ]);

        assert_eq!(queue.current().title, "Random Data");
        assert!(queue.advance());
        assert_eq!(queue.current().title, "Reverse Sorted Data");
        assert!(queue.advance());
        assert_eq!(queue.current().title, "Almost Sorted Data");
    }

    #[test]
    fn dismissing_the_last_chart_ends_the_run() {
        let mut queue = ChartQueue::new(vec![chart("Random Data")]);
        // No wrap-around: a false return lets the close proceed.
        assert!(!queue.advance());
        assert_eq!(queue.current().title, "Random Data");
    }
}
