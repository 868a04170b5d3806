use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// MeasurementRow – one line of an interface measurement file
// ---------------------------------------------------------------------------

/// A single sample from an I-V sweep across an interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    /// Probe position along the interface.
    pub position: f64,
    /// Transport current.
    pub current: f64,
    /// Voltage drop measured at that current.
    pub voltage: f64,
}

// ---------------------------------------------------------------------------
// MeasurementTable – one parsed file
// ---------------------------------------------------------------------------

/// All rows read from one `.csv` file, in file order.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    /// File the rows came from.
    pub source: PathBuf,
    pub rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file had a header but no data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// InterfaceResult / JcReport – the computed mapping
// ---------------------------------------------------------------------------

/// Jc estimate for one interface, borrowed from a [`JcReport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterfaceResult<'a> {
    #[serde(rename = "interface")]
    pub interface_id: &'a str,
    /// Critical current density in A/m², or `0.0` when no row qualified.
    pub jc: f64,
}

/// Ordered mapping `interface_id → Jc`, in file enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JcReport {
    results: IndexMap<String, f64>,
}

impl JcReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. A repeated identifier replaces the earlier value
    /// in place, so keys stay unique and keep their first position.
    pub fn insert(&mut self, interface_id: String, jc: f64) {
        self.results.insert(interface_id, jc);
    }

    /// Look up the Jc value of one interface.
    pub fn get(&self, interface_id: &str) -> Option<f64> {
        self.results.get(interface_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = InterfaceResult<'_>> {
        self.results.iter().map(|(id, &jc)| InterfaceResult {
            interface_id: id.as_str(),
            jc,
        })
    }

    pub fn interface_ids(&self) -> Vec<&str> {
        self.results.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Serialized as a list of `{"interface", "jc"}` objects in order.
impl Serialize for JcReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
