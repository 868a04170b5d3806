/// Data layer: measurement types, loading, and threshold filtering.
///
/// Architecture:
/// ```text
///  <dir>/*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  list files, parse each → MeasurementTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  voltage > threshold → critical currents → mean
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  JcReport: interface_id → Jc
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
