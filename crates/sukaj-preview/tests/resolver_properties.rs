//! # Resolver Tests
//!
//! Gate precedence, hardware tiering and determinism of the capability
//! resolver.

use proptest::prelude::*;
use sukaj_preview::prelude::*;

fn best_case_desktop() -> CapabilityInput {
    CapabilityInput::new()
        .with_mobile(false)
        .with_reduce_motion(false)
        .with_effective_type("4g")
        .with_device_memory(16.0)
        .with_hardware_concurrency(8)
}

fn input_strategy() -> impl Strategy<Value = CapabilityInput> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(proptest::sample::select(vec![
            "slow-2g", "2g", "3g", "4g", "3G", "wifi",
        ])),
        proptest::option::of(proptest::sample::select(vec![
            0.25, 0.5, 1.0, 2.0, 4.0, 6.0, 8.0, 16.0,
        ])),
        proptest::option::of(1u32..32),
    )
        .prop_map(
            |(is_mobile, reduce_motion, has_webgl, save_data, effective_type, memory, cores)| {
                CapabilityInput {
                    is_mobile,
                    reduce_motion,
                    has_webgl,
                    save_data,
                    effective_type: effective_type.map(str::to_string),
                    device_memory: memory,
                    hardware_concurrency: cores,
                }
            },
        )
}

// =============================================================================
// FIXED CASES
// =============================================================================

#[test]
fn webgl_gate_dominates_best_case_hardware() {
    let input = best_case_desktop().with_webgl(false);
    assert_eq!(resolve_preview_mode(&input), PreviewMode::FallbackPreview);
    assert_eq!(explain(&input).reason, ResolutionReason::NoWebGl);
}

#[test]
fn mobile_tiering() {
    let mobile = CapabilityInput::new()
        .with_mobile(true)
        .with_reduce_motion(false);

    assert_eq!(
        resolve_preview_mode(&mobile.clone().with_device_memory(2.0)),
        PreviewMode::FallbackPreview
    );
    assert_eq!(
        resolve_preview_mode(&mobile.with_device_memory(6.0)),
        PreviewMode::MobileLite3d
    );
}

#[test]
fn desktop_tiering() {
    let desktop = CapabilityInput::new().with_mobile(false);

    assert_eq!(
        resolve_preview_mode(&desktop.clone().with_device_memory(4.0)),
        PreviewMode::MobileLite3d
    );
    assert_eq!(
        resolve_preview_mode(
            &desktop
                .with_device_memory(8.0)
                .with_hardware_concurrency(8)
        ),
        PreviewMode::DesktopPremium3d
    );
}

#[test]
fn each_opt_out_forces_fallback() {
    let cases = [
        best_case_desktop().with_save_data(true),
        best_case_desktop().with_effective_type("slow-2g"),
        best_case_desktop().with_effective_type("3g"),
        best_case_desktop().with_reduce_motion(true),
    ];
    for input in cases {
        assert_eq!(resolve_preview_mode(&input), PreviewMode::FallbackPreview, "{:?}", input);
    }
}

#[test]
fn best_case_desktop_is_premium() {
    assert_eq!(
        explain(&best_case_desktop()),
        Resolution {
            mode: PreviewMode::DesktopPremium3d,
            reason: ResolutionReason::CapableDesktop,
        }
    );
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Identical snapshots always resolve identically.
    #[test]
    fn resolver_is_deterministic(input in input_strategy()) {
        let first = explain(&input);
        let second = explain(&input.clone());
        prop_assert_eq!(first, second);
        prop_assert_eq!(resolve_preview_mode(&input), first.mode);
    }

    /// No snapshot that fails a hard gate ever gets a 3D mode.
    #[test]
    fn gates_never_yield_3d(input in input_strategy()) {
        let gated = !input.has_webgl
            || input.save_data
            || input.reduce_motion
            || input.is_slow_network();
        if gated {
            prop_assert_eq!(resolve_preview_mode(&input), PreviewMode::FallbackPreview);
        }
    }

    /// Mobile devices never get the premium model.
    #[test]
    fn mobile_never_premium(input in input_strategy()) {
        let mobile = CapabilityInput { is_mobile: true, ..input };
        prop_assert_ne!(resolve_preview_mode(&mobile), PreviewMode::DesktopPremium3d);
    }

    /// More hardware never lowers the tier.
    #[test]
    fn tier_is_monotonic_in_hardware(input in input_strategy(), extra_gb in 0.0f64..16.0, extra_cores in 0u32..16) {
        fn rank(mode: PreviewMode) -> u8 {
            match mode {
                PreviewMode::FallbackPreview => 0,
                PreviewMode::MobileLite3d => 1,
                PreviewMode::DesktopPremium3d => 2,
            }
        }
        let bigger = input
            .clone()
            .with_device_memory(input.memory_gb() + extra_gb)
            .with_hardware_concurrency(input.cores() + extra_cores);
        prop_assert!(rank(resolve_preview_mode(&bigger)) >= rank(resolve_preview_mode(&input)));
    }
}
