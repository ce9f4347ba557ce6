//! The typed Limelight handle.

use std::ops::RangeInclusive;
use std::sync::Arc;

use limelight_table::{MemoryTableRegistry, Table, TableProvider};
use tracing::{debug, trace, warn};

use crate::config::{CamModePolicy, LimelightConfig};
use crate::keys;
use crate::modes::{CamMode, LedMode, integral_i32};

/// Fixed image capture latency added by the camera, in milliseconds.
///
/// Not included in [`Limelight::pipeline_latency`]; callers wanting an
/// end-to-end figure add it themselves.
pub const IMAGE_CAPTURE_LATENCY_MS: f64 = 11.0;

/// Pipeline indexes the camera accepts.
pub const PIPELINE_RANGE: RangeInclusive<i32> = 0..=9;

/// Every detection value, each read independently from the table.
///
/// The six reads are not atomic as a group; the camera may publish between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetReading {
    /// `tv`
    pub visible: bool,
    /// `tx`, degrees.
    pub x: f64,
    /// `ty`, degrees.
    pub y: f64,
    /// `ta`, fraction of the image.
    pub area: f64,
    /// `ts`, degrees.
    pub skew: f64,
    /// `tl`, milliseconds.
    pub latency_ms: f64,
}

/// Typed accessors over a Limelight's telemetry table.
///
/// The handle holds a shared reference to a table owned by a registry and
/// nothing else: every getter reads the table on demand, every setter is a
/// single overwrite. Missing or mistyped entries read as `false` / `0.0`.
///
/// Cloning is cheap and the clone observes the same table.
///
/// ```rust
/// use limelight::prelude::*;
///
/// let registry = MemoryTableRegistry::new();
/// let limelight = Limelight::from_provider(&registry, "limelight");
///
/// assert!(!limelight.has_target());
/// limelight.set_led_mode(LedMode::Off);
/// limelight.set_pipeline(2);
///
/// let table = registry.table("limelight");
/// assert!((table.get_number("ledMode", -1.0) - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Limelight {
    table: Arc<dyn Table>,
    cam_mode_policy: CamModePolicy,
}

impl Limelight {
    /// Bind to the `"limelight"` table in the process-wide registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(keys::DEFAULT_TABLE_NAME)
    }

    /// Bind to `name` in the process-wide registry.
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Self::from_provider(MemoryTableRegistry::global(), name)
    }

    /// Bind to `name` resolved through `provider`.
    #[must_use]
    pub fn from_provider<P: TableProvider + ?Sized>(provider: &P, name: &str) -> Self {
        Self::from_table(provider.table(name))
    }

    /// Bind according to `config`, resolving the table through `provider`.
    #[must_use]
    pub fn from_config<P: TableProvider + ?Sized>(provider: &P, config: &LimelightConfig) -> Self {
        Self::from_provider(provider, &config.table_name).with_cam_mode_policy(config.cam_mode_policy)
    }

    /// Wrap an already resolved table.
    #[must_use]
    pub fn from_table(table: Arc<dyn Table>) -> Self {
        debug!(table = table.name(), "Bound Limelight handle");
        Self {
            table,
            cam_mode_policy: CamModePolicy::default(),
        }
    }

    /// Replace the camera mode write policy.
    #[must_use]
    pub fn with_cam_mode_policy(mut self, policy: CamModePolicy) -> Self {
        self.cam_mode_policy = policy;
        self
    }

    /// Active camera mode write policy.
    #[must_use]
    pub fn cam_mode_policy(&self) -> CamModePolicy {
        self.cam_mode_policy
    }

    /// Name of the bound table.
    #[must_use]
    pub fn name(&self) -> &str {
        self.table.name()
    }

    /// The underlying table, for raw key access.
    ///
    /// This is the same table the typed accessors use, so raw writes are
    /// visible to them immediately.
    #[must_use]
    pub fn get(&self) -> Arc<dyn Table> {
        Arc::clone(&self.table)
    }

    /// Whether the camera currently sees a target.
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.table.get_boolean(keys::TARGET_VISIBLE, false)
    }

    /// Horizontal offset from crosshair to target.
    #[must_use]
    pub fn target_x(&self) -> f64 {
        self.table.get_number(keys::TARGET_X, 0.0)
    }

    /// Vertical offset from crosshair to target.
    #[must_use]
    pub fn target_y(&self) -> f64 {
        self.table.get_number(keys::TARGET_Y, 0.0)
    }

    /// Target area: 1.0 for 100% of the image, 0.5 for 50%, and so on.
    #[must_use]
    pub fn target_area(&self) -> f64 {
        self.table.get_number(keys::TARGET_AREA, 0.0)
    }

    /// Target skew, -90 to 0 degrees.
    #[must_use]
    pub fn target_skew(&self) -> f64 {
        self.table.get_number(keys::TARGET_SKEW, 0.0)
    }

    /// Pipeline latency in milliseconds, excluding
    /// [`IMAGE_CAPTURE_LATENCY_MS`].
    #[must_use]
    pub fn pipeline_latency(&self) -> f64 {
        self.table.get_number(keys::PIPELINE_LATENCY, 0.0)
    }

    /// Read all detection keys.
    #[must_use]
    pub fn target(&self) -> TargetReading {
        TargetReading {
            visible: self.has_target(),
            x: self.target_x(),
            y: self.target_y(),
            area: self.target_area(),
            skew: self.target_skew(),
            latency_ms: self.pipeline_latency(),
        }
    }

    /// Request an LED state.
    pub fn set_led_mode(&self, mode: LedMode) {
        self.put(keys::LED_MODE, mode.as_number());
    }

    /// Request a camera mode.
    ///
    /// Under [`CamModePolicy::LegacyForceVision`] this always writes
    /// [`CamMode::Vision`].
    pub fn set_cam_mode(&self, mode: CamMode) {
        let written = match self.cam_mode_policy {
            CamModePolicy::Encoded => mode,
            CamModePolicy::LegacyForceVision => {
                if mode != CamMode::Vision {
                    warn!(
                        table = self.name(),
                        requested = %mode,
                        "Legacy cam mode policy writes vision mode"
                    );
                }
                CamMode::Vision
            }
        };
        self.put(keys::CAM_MODE, written.as_number());
    }

    /// Request pipeline `id`.
    ///
    /// The camera accepts 0-9. Other values are written anyway.
    pub fn set_pipeline(&self, id: i32) {
        if !PIPELINE_RANGE.contains(&id) {
            warn!(
                table = self.name(),
                pipeline = id,
                "Pipeline index outside 0..=9 written unchanged"
            );
        }
        self.put(keys::PIPELINE, f64::from(id));
    }

    /// Last requested LED state, `None` if unset or not a valid code.
    #[must_use]
    pub fn led_mode(&self) -> Option<LedMode> {
        self.read_number(keys::LED_MODE)
            .and_then(|v| LedMode::try_from(v).ok())
    }

    /// Last requested camera mode, `None` if unset or not a valid code.
    #[must_use]
    pub fn cam_mode(&self) -> Option<CamMode> {
        self.read_number(keys::CAM_MODE)
            .and_then(|v| CamMode::try_from(v).ok())
    }

    /// Last requested pipeline, `None` if unset or not an integer.
    #[must_use]
    pub fn pipeline(&self) -> Option<i32> {
        self.read_number(keys::PIPELINE).and_then(integral_i32)
    }

    fn read_number(&self, key: &str) -> Option<f64> {
        self.table.get_value(key).and_then(|v| v.as_number())
    }

    fn put(&self, key: &str, value: f64) {
        trace!(table = self.name(), key, value, "Writing table entry");
        self.table.put_number(key, value);
    }
}

impl Default for Limelight {
    fn default() -> Self {
        Self::new()
    }
}
