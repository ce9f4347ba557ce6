//! # limelight
//!
//! Typed accessors for a Limelight vision camera's telemetry table.
//!
//! The camera publishes its detection results (`tv`, `tx`, `ty`, `ta`, `ts`,
//! `tl`) into a named shared table and polls the same table for mode
//! requests (`ledMode`, `camMode`, `pipeline`). [`Limelight`] binds to that
//! table once and exposes each key as a typed getter or setter. It caches
//! nothing and adds no synchronization; it never computes anything from the
//! values it reads.
//!
//! ## Modules
//!
//! - [`handle`] - the [`Limelight`] handle and [`TargetReading`]
//! - [`modes`] - [`LedMode`] and [`CamMode`] with their integer encodings
//! - [`keys`] - wire key names
//! - [`config`] - [`LimelightConfig`] loaded from YAML
//! - [`error`] - decode and configuration errors
//!
//! The table itself comes from `limelight-table`. Handles created with
//! [`Limelight::new`] use the process-wide registry; tests and embedders
//! inject their own [`TableProvider`] through [`Limelight::from_provider`].
//!
//! ## Example
//!
//! ```rust
//! use limelight::prelude::*;
//!
//! let registry = MemoryTableRegistry::new();
//! let limelight = Limelight::from_provider(&registry, "limelight");
//!
//! // The camera publishes...
//! let table = limelight.get();
//! table.put_boolean("tv", true);
//! table.put_number("tx", 3.5);
//!
//! // ...and the robot reads.
//! assert!(limelight.has_target());
//! assert!((limelight.target_x() - 3.5).abs() < f64::EPSILON);
//!
//! limelight.set_cam_mode(CamMode::Driver);
//! assert_eq!(limelight.cam_mode(), Some(CamMode::Driver));
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod handle;
pub mod keys;
pub mod modes;

pub mod prelude;

pub use config::{CamModePolicy, LimelightConfig, LimelightConfigBuilder};
pub use error::{ConfigError, ConfigResult, ModeDecodeError};
pub use handle::{IMAGE_CAPTURE_LATENCY_MS, Limelight, PIPELINE_RANGE, TargetReading};
pub use modes::{CamMode, LedMode};

pub use limelight_table::{Table, TableProvider, TableValue};
