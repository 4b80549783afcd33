/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///     .csv
///       │
///       ▼
///  ┌────────┐
///  │ loader │  parse file → MeasurementTable
///  └────────┘
///       │
///       ▼
///  ┌──────────────────┐
///  │ MeasurementTable │  Size axis + Vec<Series>
///  └──────────────────┘
/// ```
pub mod loader;
pub mod model;
