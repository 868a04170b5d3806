use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::data::model::JcReport;

pub const REPORT_HEADER: &str = "Interface Jc results:";
pub const JC_UNIT: &str = "A/m²";

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Scientific notation with `precision` mantissa decimals and a signed,
/// at least two digit exponent: `1.2345e+03`, `5.0000e-07`.
///
/// Rust's `{:e}` writes `1.2345e3`; the exponent is rewritten here.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Line printed instead of a report when the data directory is absent.
pub fn not_found_message(dir: &Path) -> String {
    format!("Data directory {} not found.", dir.display())
}

/// Header line plus one `<id>: <jc> A/m²` line per interface.
pub fn render_text(report: &JcReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_HEADER}");
    for result in report.iter() {
        let _ = writeln!(
            out,
            "{}: {} {JC_UNIT}",
            result.interface_id,
            format_scientific(result.jc, 4)
        );
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    data_dir: String,
    voltage_threshold: f64,
    interfaces: &'a JcReport,
}

/// Pretty-printed JSON document of the report, in enumeration order.
pub fn render_json(
    dir: &Path,
    voltage_threshold: f64,
    report: &JcReport,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        data_dir: dir.display().to_string(),
        voltage_threshold,
        interfaces: report,
    })
}
