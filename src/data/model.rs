// ---------------------------------------------------------------------------
// Series – one dependent column of a benchmark CSV
// ---------------------------------------------------------------------------

/// One plotted line: a named timing column across all tested sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column name from the CSV header, used as the legend label.
    pub name: String,
    /// Elapsed time in microseconds, one value per row.
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// MeasurementTable – the complete loaded file
// ---------------------------------------------------------------------------

/// One benchmark file in memory: the `Size` axis plus the timing columns
/// in CSV header order. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    /// The independent variable: array size tested, one entry per row.
    pub sizes: Vec<f64>,
    /// Dependent columns in header order (every column except `Size`).
    pub series: Vec<Series>,
}

impl MeasurementTable {
    /// Number of rows (tested sizes).
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Legend labels in plot order.
    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MeasurementTable {
        MeasurementTable {
            sizes: vec![10.0, 100.0],
            series: vec![
                Series {
                    name: "B".into(),
                    values: vec![3.0, 4.0],
                },
                Series {
                    name: "A".into(),
                    values: vec![1.0, 2.0],
                },
            ],
        }
    }

    #[test]
    fn series_names_keep_insertion_order() {
        // "B" came first in the header, so it stays first.
        assert_eq!(table().series_names(), vec!["B", "A"]);
    }

    #[test]
    fn len_counts_rows_not_columns() {
        assert_eq!(table().len(), 2);
        assert!(!table().is_empty());
    }

    #[test]
    fn empty_table() {
        let t = MeasurementTable {
            sizes: vec![],
            series: vec![],
        };
        assert!(t.is_empty());
        assert!(t.series_names().is_empty());
    }
}
