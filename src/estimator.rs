use std::path::Path;

use crate::config::EstimatorConfig;
use crate::data::filter::{critical_currents, mean_or_zero};
use crate::data::loader::{list_measurement_files, load_table, MEASUREMENT_SUFFIX};
use crate::data::model::{JcReport, MeasurementTable};
use crate::error::Result;

/// Estimate Jc for every measurement file in `dir` with the default
/// 1 µV threshold.
///
/// The directory must exist; callers check that first. Any unreadable or
/// malformed file aborts the run and no partial report is returned.
pub fn compute_interface_jc(dir: &Path) -> Result<JcReport> {
    compute_interface_jc_with(dir, &EstimatorConfig::default())
}

/// Same as [`compute_interface_jc`] with an explicit configuration.
pub fn compute_interface_jc_with(dir: &Path, config: &EstimatorConfig) -> Result<JcReport> {
    let files = list_measurement_files(dir)?;
    log::info!(
        "Estimating Jc for {} interface(s) in {}",
        files.len(),
        dir.display()
    );

    let mut report = JcReport::new();
    for path in &files {
        let table = load_table(path)?;
        let jc = estimate_jc(&table, config.voltage_threshold);
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        let id = interface_id(&file_name);
        log::debug!("{id}: Jc = {jc:e} A/m²");
        report.insert(id, jc);
    }
    Ok(report)
}

/// Mean current of the rows whose voltage exceeds `threshold`, or `0.0`.
pub fn estimate_jc(table: &MeasurementTable, threshold: f64) -> f64 {
    let subset = critical_currents(table, threshold);
    if subset.is_empty() {
        log::warn!(
            "{}: no row above {threshold:e} V out of {}, Jc set to 0",
            table.source.display(),
            table.len()
        );
    } else {
        log::debug!(
            "{}: {} of {} row(s) above threshold",
            table.source.display(),
            subset.len(),
            table.len()
        );
    }
    mean_or_zero(&subset)
}

/// Interface identifier for a measurement file name: the name with one
/// trailing `.csv` removed. Anything else is returned unchanged.
pub fn interface_id(file_name: &str) -> String {
    file_name
        .strip_suffix(MEASUREMENT_SUFFIX)
        .unwrap_or(file_name)
        .to_string()
}
