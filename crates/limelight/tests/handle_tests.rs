//! Read/write contract of the Limelight handle.

use limelight::prelude::*;
use limelight_test_helpers::{
    TargetFixture, assert_same_f64, isolated_registry, unique_table_name,
};

fn bound(registry: &MemoryTableRegistry) -> Limelight {
    Limelight::from_provider(registry, "limelight")
}

#[test]
fn test_unpublished_fields_read_defaults() {
    let registry = isolated_registry();
    let limelight = bound(&registry);

    assert!(!limelight.has_target());
    assert_same_f64(limelight.target_x(), 0.0);
    assert_same_f64(limelight.target_y(), 0.0);
    assert_same_f64(limelight.target_area(), 0.0);
    assert_same_f64(limelight.target_skew(), 0.0);
    assert_same_f64(limelight.pipeline_latency(), 0.0);
}

#[test]
fn test_published_fields_read_back_exactly() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let fixture = TargetFixture::acquired();
    fixture.publish(limelight.get().as_ref());

    assert!(limelight.has_target());
    assert_same_f64(limelight.target_x(), fixture.x);
    assert_same_f64(limelight.target_y(), fixture.y);
    assert_same_f64(limelight.target_area(), fixture.area);
    assert_same_f64(limelight.target_skew(), fixture.skew);
    assert_same_f64(limelight.pipeline_latency(), fixture.latency_ms);
}

#[test]
fn test_target_reading_matches_individual_getters() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let fixture = TargetFixture::acquired().with_x(-27.0).with_skew(-89.5);
    fixture.publish(registry.table("limelight").as_ref());

    let reading = limelight.target();
    assert!(reading.visible);
    assert_same_f64(reading.x, -27.0);
    assert_same_f64(reading.y, fixture.y);
    assert_same_f64(reading.area, fixture.area);
    assert_same_f64(reading.skew, -89.5);
    assert_same_f64(reading.latency_ms, fixture.latency_ms);
}

#[test]
fn test_latency_excludes_capture_constant() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    limelight.get().put_number("tl", 20.0);

    assert_same_f64(limelight.pipeline_latency(), 20.0);
    assert_same_f64(IMAGE_CAPTURE_LATENCY_MS, 11.0);
}

#[test]
fn test_mistyped_entries_read_defaults() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let table = limelight.get();
    table.put_number("tv", 1.0);
    table.put_string("tx", "left");
    table.put_boolean("ta", true);

    assert!(!limelight.has_target());
    assert_same_f64(limelight.target_x(), 0.0);
    assert_same_f64(limelight.target_area(), 0.0);
}

#[test]
fn test_set_led_mode_writes_codes() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let table = registry.table("limelight");

    for (mode, expected) in [
        (LedMode::Pipeline, 0.0),
        (LedMode::Off, 1.0),
        (LedMode::Blink, 2.0),
        (LedMode::On, 3.0),
    ] {
        limelight.set_led_mode(mode);
        assert_same_f64(table.get_number("ledMode", -1.0), expected);
    }
}

#[test]
fn test_set_cam_mode_writes_requested_mode() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let table = registry.table("limelight");

    limelight.set_cam_mode(CamMode::Driver);
    assert_same_f64(table.get_number("camMode", -1.0), 1.0);

    limelight.set_cam_mode(CamMode::Vision);
    assert_same_f64(table.get_number("camMode", -1.0), 0.0);
}

#[test]
fn test_legacy_policy_always_writes_vision() {
    let registry = isolated_registry();
    let limelight = bound(&registry).with_cam_mode_policy(CamModePolicy::LegacyForceVision);
    let table = registry.table("limelight");

    limelight.set_cam_mode(CamMode::Driver);
    assert_same_f64(table.get_number("camMode", -1.0), 0.0);
    assert_eq!(limelight.cam_mode(), Some(CamMode::Vision));
}

#[test]
fn test_set_pipeline_passes_values_through() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let table = registry.table("limelight");

    limelight.set_pipeline(5);
    assert_same_f64(table.get_number("pipeline", -1.0), 5.0);

    limelight.set_pipeline(-1);
    assert_same_f64(table.get_number("pipeline", 0.0), -1.0);

    limelight.set_pipeline(99);
    assert_same_f64(table.get_number("pipeline", 0.0), 99.0);
    assert_eq!(limelight.pipeline(), Some(99));
}

#[test]
fn test_writes_overwrite_without_touching_other_keys() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let table = registry.memory_table("limelight");

    limelight.set_pipeline(1);
    limelight.set_led_mode(LedMode::On);
    limelight.set_pipeline(3);

    assert_eq!(table.len(), 2);
    assert_same_f64(table.get_number("pipeline", -1.0), 3.0);
    assert_same_f64(table.get_number("ledMode", -1.0), 3.0);
}

#[test]
fn test_same_name_handles_share_table() {
    let registry = isolated_registry();
    let first = Limelight::from_provider(&registry, "limelight");
    let second = Limelight::from_provider(&registry, "limelight");

    first.get().put_number("tx", 4.25);
    assert_same_f64(second.target_x(), 4.25);

    second.set_led_mode(LedMode::Blink);
    assert_eq!(first.led_mode(), Some(LedMode::Blink));
}

#[test]
fn test_different_name_handles_are_isolated() {
    let registry = isolated_registry();
    let front = Limelight::from_provider(&registry, "limelight-front");
    let rear = Limelight::from_provider(&registry, "limelight-rear");

    front.get().put_boolean("tv", true);
    front.set_pipeline(4);

    assert!(!rear.has_target());
    assert_eq!(rear.pipeline(), None);
}

#[test]
fn test_raw_write_through_get_is_visible() {
    let registry = isolated_registry();
    let limelight = bound(&registry);

    limelight.get().put_number("tx", 3.5);
    assert_same_f64(limelight.target_x(), 3.5);
}

#[test]
fn test_clone_shares_table() {
    let registry = isolated_registry();
    let limelight = bound(&registry);
    let clone = limelight.clone();

    clone.get().put_boolean("tv", true);
    assert!(limelight.has_target());
    assert_eq!(clone.name(), limelight.name());
}

#[test]
fn test_from_config_binds_name_and_policy() -> ConfigResult<()> {
    let registry = isolated_registry();
    let config = LimelightConfig::builder()
        .table_name("limelight-shooter")
        .cam_mode_policy(CamModePolicy::LegacyForceVision)
        .build()?;

    let limelight = Limelight::from_config(&registry, &config);
    assert_eq!(limelight.name(), "limelight-shooter");
    assert_eq!(limelight.cam_mode_policy(), CamModePolicy::LegacyForceVision);
    assert!(registry.contains("limelight-shooter"));
    Ok(())
}

#[test]
fn test_global_registry_handles() {
    let name = unique_table_name("limelight-global");
    let first = Limelight::with_name(&name);
    let second = Limelight::with_name(&name);

    first.set_pipeline(6);
    assert_eq!(second.pipeline(), Some(6));
    assert!(MemoryTableRegistry::global().contains(&name));
}

#[test]
fn test_default_handle_uses_default_table_name() {
    let limelight = Limelight::default();
    assert_eq!(limelight.name(), "limelight");
    assert_eq!(Limelight::new().name(), "limelight");
}
