//! Critical current density (Jc) estimation for interfacial measurements.
//!
//! Each `.csv` file in a directory describes one interface. The estimate
//! for an interface is the mean current over rows whose voltage exceeds
//! a fixed threshold (1 µV by default), or `0.0` when none do.

pub mod config;
pub mod data;
pub mod error;
pub mod estimator;
pub mod report;

pub use config::EstimatorConfig;
pub use data::model::{InterfaceResult, JcReport};
pub use error::{JcError, Result};
pub use estimator::{compute_interface_jc, compute_interface_jc_with};
