//! Shared test utilities for the Limelight wrapper.
//!
//! - [`fixtures`]: device-side publishers and isolated registries
//! - [`assertions`]: exact and approximate float assertions

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_approx_eq, assert_same_f64};
pub use fixtures::{TargetFixture, isolated_registry, unique_table_name};
