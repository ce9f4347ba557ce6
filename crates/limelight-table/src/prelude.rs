//! Prelude for limelight-table.
//!
//! ```rust
//! use limelight_table::prelude::*;
//!
//! let registry = MemoryTableRegistry::new();
//! registry.table("limelight").put_boolean("tv", true);
//! ```

pub use crate::memory::{MemoryTable, MemoryTableRegistry};
pub use crate::table::{Table, TableProvider};
pub use crate::value::TableValue;
