mod app;
mod color;
mod data;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};

use data::loader::load_csv;

/// The three benchmark files and their chart titles, shown in this order.
const CHARTS: [(&str, &str); 3] = [
    ("data/random_data.csv", "Random Data"),
    ("data/reverse_data.csv", "Reverse Sorted Data"),
    ("data/almost_data.csv", "Almost Sorted Data"),
];

fn main() -> Result<()> {
    env_logger::init();

    let mut charts = Vec::with_capacity(CHARTS.len());
    for (path, title) in CHARTS {
        let table = load_csv(Path::new(path))
            .with_context(|| format!("loading benchmark data from {path}"))?;

        log::info!(
            "Loaded {path}: {} sizes, series {:?}",
            table.len(),
            table.series_names()
        );

        charts.push(app::Chart {
            table,
            title: title.to_string(),
        });
    }

    // One window for the whole run; dismissing a chart reveals the next.
    app::show_charts(charts).map_err(|e| anyhow::anyhow!("displaying charts: {e}"))?;

    Ok(())
}
