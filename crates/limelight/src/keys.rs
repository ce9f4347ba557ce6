//! Table key names understood by the camera firmware.
//!
//! These strings are the wire contract with the device and must not change.

/// Table name the camera publishes under unless reconfigured.
pub const DEFAULT_TABLE_NAME: &str = "limelight";

/// Whether the camera has any valid target (`bool`).
pub const TARGET_VISIBLE: &str = "tv";

/// Horizontal offset from crosshair to target, degrees.
pub const TARGET_X: &str = "tx";

/// Vertical offset from crosshair to target, degrees.
pub const TARGET_Y: &str = "ty";

/// Target area as a fraction of the image (1.0 = 100%).
pub const TARGET_AREA: &str = "ta";

/// Target skew or rotation, roughly -90 to 0 degrees.
pub const TARGET_SKEW: &str = "ts";

/// Pipeline latency contribution, milliseconds.
pub const PIPELINE_LATENCY: &str = "tl";

/// Requested LED state.
pub const LED_MODE: &str = "ledMode";

/// Requested camera operating mode.
pub const CAM_MODE: &str = "camMode";

/// Requested active pipeline index.
pub const PIPELINE: &str = "pipeline";

/// Keys the camera writes.
pub const TARGET_KEYS: [&str; 6] = [
    TARGET_VISIBLE,
    TARGET_X,
    TARGET_Y,
    TARGET_AREA,
    TARGET_SKEW,
    PIPELINE_LATENCY,
];

/// Keys the robot writes.
pub const MODE_KEYS: [&str; 3] = [LED_MODE, CAM_MODE, PIPELINE];
