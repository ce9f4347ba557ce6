//! Prelude for limelight.
//!
//! Re-exports the handle, its mode types, and the table traits needed to
//! resolve or inspect the underlying table.

pub use crate::config::{CamModePolicy, LimelightConfig, LimelightConfigBuilder};
pub use crate::error::{ConfigError, ConfigResult, ModeDecodeError};
pub use crate::handle::{IMAGE_CAPTURE_LATENCY_MS, Limelight, PIPELINE_RANGE, TargetReading};
pub use crate::modes::{CamMode, LedMode};

pub use limelight_table::{MemoryTableRegistry, Table, TableProvider, TableValue};
