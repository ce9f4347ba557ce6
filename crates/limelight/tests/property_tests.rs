//! Property tests for the handle and mode encodings.

use limelight::prelude::*;
use proptest::prelude::*;

fn led_mode() -> impl Strategy<Value = LedMode> {
    prop_oneof![
        Just(LedMode::Pipeline),
        Just(LedMode::Off),
        Just(LedMode::Blink),
        Just(LedMode::On),
    ]
}

fn cam_mode() -> impl Strategy<Value = CamMode> {
    prop_oneof![Just(CamMode::Vision), Just(CamMode::Driver)]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// Any number the camera publishes reads back bit-for-bit.
    #[test]
    fn prop_target_x_round_trip(value in proptest::num::f64::ANY) {
        let registry = MemoryTableRegistry::new();
        let limelight = Limelight::from_provider(&registry, "limelight");
        limelight.get().put_number("tx", value);
        prop_assert_eq!(limelight.target_x().to_bits(), value.to_bits());
    }

    /// Target visibility reads back whatever boolean was published.
    #[test]
    fn prop_has_target_round_trip(visible in any::<bool>()) {
        let registry = MemoryTableRegistry::new();
        let limelight = Limelight::from_provider(&registry, "limelight");
        limelight.get().put_boolean("tv", visible);
        prop_assert_eq!(limelight.has_target(), visible);
    }

    /// Every i32 pipeline index is written unchanged and reads back.
    #[test]
    fn prop_pipeline_passthrough(id in any::<i32>()) {
        let registry = MemoryTableRegistry::new();
        let limelight = Limelight::from_provider(&registry, "limelight");
        limelight.set_pipeline(id);
        prop_assert_eq!(
            limelight.get().get_number("pipeline", f64::NAN).to_bits(),
            f64::from(id).to_bits()
        );
        prop_assert_eq!(limelight.pipeline(), Some(id));
    }

    /// LED mode writes decode back to the same mode.
    #[test]
    fn prop_led_mode_read_back(mode in led_mode()) {
        let registry = MemoryTableRegistry::new();
        let limelight = Limelight::from_provider(&registry, "limelight");
        limelight.set_led_mode(mode);
        prop_assert_eq!(limelight.led_mode(), Some(mode));
    }

    /// Under the default policy camera mode writes decode back unchanged.
    #[test]
    fn prop_cam_mode_read_back(mode in cam_mode()) {
        let registry = MemoryTableRegistry::new();
        let limelight = Limelight::from_provider(&registry, "limelight");
        limelight.set_cam_mode(mode);
        prop_assert_eq!(limelight.cam_mode(), Some(mode));
    }

    /// Integers outside 0..=3 never decode as an LED mode.
    #[test]
    fn prop_led_decode_rejects_out_of_domain(code in any::<i32>()) {
        prop_assume!(!(0..=3).contains(&code));
        let result = LedMode::try_from(f64::from(code));
        let is_out_of_domain = matches!(result, Err(ModeDecodeError::OutOfDomain { .. }));
        prop_assert!(is_out_of_domain, "code {} decoded as {:?}", code, result);
    }

    /// Numbers with a fractional part never decode as a camera mode.
    #[test]
    fn prop_cam_decode_rejects_fractions(whole in -10i32..10, frac in 0.01f64..0.99) {
        let result = CamMode::try_from(f64::from(whole) + frac);
        let is_not_integral = matches!(result, Err(ModeDecodeError::NotIntegral { .. }));
        prop_assert!(is_not_integral, "decoded {:?}", result);
    }
}
