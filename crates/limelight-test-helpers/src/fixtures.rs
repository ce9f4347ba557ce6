//! Fixtures standing in for the camera.
//!
//! The device publishes its detection results into the table and the robot
//! code only reads them back. [`TargetFixture`] performs those device-side
//! writes so tests can exercise the read path without hardware.

use std::sync::atomic::{AtomicU64, Ordering};

use limelight_table::{MemoryTableRegistry, Table};

/// Detection values as the camera would publish them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFixture {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub area: f64,
    pub skew: f64,
    pub latency_ms: f64,
}

impl TargetFixture {
    /// A locked-on target slightly right of and above the crosshair.
    pub fn acquired() -> Self {
        Self {
            visible: true,
            x: 12.5,
            y: -3.25,
            area: 0.42,
            skew: -15.0,
            latency_ms: 22.0,
        }
    }

    /// What the camera publishes with nothing in view.
    pub fn no_target() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            area: 0.0,
            skew: 0.0,
            latency_ms: 18.0,
        }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn with_skew(mut self, skew: f64) -> Self {
        self.skew = skew;
        self
    }

    /// Write every detection key into `table`.
    pub fn publish(&self, table: &dyn Table) {
        table.put_boolean("tv", self.visible);
        table.put_number("tx", self.x);
        table.put_number("ty", self.y);
        table.put_number("ta", self.area);
        table.put_number("ts", self.skew);
        table.put_number("tl", self.latency_ms);
    }
}

impl Default for TargetFixture {
    fn default() -> Self {
        Self::no_target()
    }
}

/// A registry no other test can see.
pub fn isolated_registry() -> MemoryTableRegistry {
    MemoryTableRegistry::new()
}

/// A table name that has not been used in this process, for tests that have
/// to go through the global registry.
pub fn unique_table_name(prefix: &str) -> String {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}
