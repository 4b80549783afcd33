use std::path::Path;

use anyhow::{Context, Result};

use super::model::{MeasurementTable, Series};

/// Name of the independent-variable column every benchmark file must carry.
const SIZE_COLUMN: &str = "Size";

/// Load a benchmark timing file into a [`MeasurementTable`].
///
/// CSV layout: header row with a `Size` column plus one column per
/// algorithm variant, e.g.
///   `Size,MergeSort,Hybrid5,Hybrid10,...`
/// All values are numeric; timings are microseconds.
///
/// Every column other than `Size` becomes a [`Series`], in header order.
pub fn load_csv(path: &Path) -> Result<MeasurementTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let size_idx = headers
        .iter()
        .position(|h| h == SIZE_COLUMN)
        .with_context(|| format!("CSV missing '{SIZE_COLUMN}' column"))?;

    let mut sizes = Vec::new();
    let mut series: Vec<Series> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != size_idx)
        .map(|(_, name)| Series {
            name: name.clone(),
            values: Vec::new(),
        })
        .collect();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        sizes.push(parse_cell(record.get(size_idx), row_no, SIZE_COLUMN)?);

        let mut col = 0;
        for (cell_idx, _) in headers.iter().enumerate() {
            if cell_idx == size_idx {
                continue;
            }
            let value = parse_cell(record.get(cell_idx), row_no, &headers[cell_idx])?;
            series[col].values.push(value);
            col += 1;
        }
    }

    Ok(MeasurementTable { sizes, series })
}

fn parse_cell(cell: Option<&str>, row: usize, col: &str) -> Result<f64> {
    let tok = cell.unwrap_or("");
    tok.trim()
        .parse::<f64>()
        .with_context(|| format!("Row {row}, column '{col}': '{tok}' is not a number"))
}
