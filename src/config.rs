// ---------------------------------------------------------------------------
// Estimator configuration
// ---------------------------------------------------------------------------

/// Directory the command line tool scans when none is given.
pub const DEFAULT_DATA_DIR: &str = "../data/interfacial_measurements/";

/// Voltage (V) a row must strictly exceed to count as resistive.
pub const DEFAULT_VOLTAGE_THRESHOLD: f64 = 1e-6;

/// Tunables for a single estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    /// Rows with `voltage > voltage_threshold` join the critical current subset.
    pub voltage_threshold: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            voltage_threshold: DEFAULT_VOLTAGE_THRESHOLD,
        }
    }
}

impl EstimatorConfig {
    pub fn with_threshold(voltage_threshold: f64) -> Self {
        Self { voltage_threshold }
    }
}
