//! # limelight-table
//!
//! Shared, named key-value tables as consumed by the Limelight wrapper.
//!
//! A vision camera publishes its detection results into a named table and
//! polls the same table for mode requests. This crate models that table as a
//! pair of traits so the wrapper can be bound to any backing store:
//!
//! - [`Table`] - get-with-default and put operations on one named table
//! - [`TableProvider`] - resolves a table by name, creating it on first lookup
//!
//! [`MemoryTableRegistry`] is the in-process implementation. Its
//! [`MemoryTableRegistry::global`] instance plays the role of the process-wide
//! default registry; tests build their own isolated registries instead.
//!
//! ## Example
//!
//! ```rust
//! use limelight_table::prelude::*;
//!
//! let registry = MemoryTableRegistry::new();
//! let table = registry.table("limelight");
//! table.put_number("tx", 3.5);
//!
//! let same = registry.table("limelight");
//! assert!((same.get_number("tx", 0.0) - 3.5).abs() < f64::EPSILON);
//! assert!(!same.get_boolean("tv", false));
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

pub mod memory;
pub mod table;
pub mod value;

pub mod prelude;

pub use memory::{MemoryTable, MemoryTableRegistry};
pub use table::{Table, TableProvider};
pub use value::TableValue;
