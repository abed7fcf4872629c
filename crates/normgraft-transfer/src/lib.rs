//! # normgraft-transfer
//!
//! The end-to-end normal transfer operation: builds a centroid index
//! and source snapshot, samples the source surface once per target
//! loop, and assembles a complete per-loop normal array in the
//! target's local space.
//!
//! Only structural input problems surface as errors; an empty source
//! or per-loop degeneracies are absorbed into native-normal fallbacks
//! and recorded in the [`TransferReport`].

pub mod config;
pub mod engine;
pub mod report;

pub use config::TransferConfig;
pub use engine::{TransferEngine, TransferOutput, validate_selection};
pub use report::TransferReport;
