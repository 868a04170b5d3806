use super::model::MeasurementTable;

// ---------------------------------------------------------------------------
// Threshold filter: which rows belong to the critical current subset
// ---------------------------------------------------------------------------

/// Currents of every row whose voltage is strictly above `threshold`.
///
/// A row sitting exactly on the threshold does not qualify, and a NaN
/// voltage never does.
pub fn critical_currents(table: &MeasurementTable, threshold: f64) -> Vec<f64> {
    table
        .rows
        .iter()
        .filter(|row| row.voltage > threshold)
        .map(|row| row.current)
        .collect()
}

/// Arithmetic mean, or `0.0` for an empty subset.
pub fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
