//! Preview capability command.

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use sukaj_observability::StructuredLogger;
use sukaj_preview::prelude::*;

use super::{PreviewArgs, Simulation};
use crate::context::Context;
use crate::output::mode_badge;

/// Renderer warm-up used by simulations that reach ready.
const SIMULATED_READY_MS: u64 = 800;

#[derive(Serialize)]
struct PreviewReport<'a> {
    input: &'a CapabilityInput,
    mode: PreviewMode,
    reason: ResolutionReason,
    asset: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    simulation: Option<SimulationReport>,
}

#[derive(Serialize)]
struct SimulationReport {
    event: String,
    state: PreviewState,
    retry_offered: bool,
    asset: Option<String>,
}

/// Logs every lifecycle transition as a structured entry.
struct TransitionLogger {
    logger: StructuredLogger,
}

impl PreviewObserver for TransitionLogger {
    fn on_transition(&self, from: &PreviewState, to: &PreviewState, now: Duration) {
        self.logger
            .info_builder("preview transition")
            .field("from", from.to_string())
            .field("to", to.to_string())
            .duration_ms("at_ms", now)
            .emit();
    }
}

/// Run the preview command.
pub fn run(args: PreviewArgs, ctx: &Context) -> Result<()> {
    let input = build_input(&args);
    let resolution = explain(&input);
    let assets = PreviewAssets::default();
    let asset = assets.for_mode(resolution.mode);

    let simulation = match args.simulate {
        Some(event) => Some(simulate(event, &input, ctx)?),
        None => None,
    };

    if ctx.output.is_json() {
        ctx.output.json(&PreviewReport {
            input: &input,
            mode: resolution.mode,
            reason: resolution.reason,
            asset: asset.path(),
            simulation,
        });
        return Ok(());
    }

    ctx.output.header("Preview");
    ctx.output.kv("mode", &mode_badge(resolution.mode.as_str()));
    ctx.output.kv("reason", resolution.reason.description());
    ctx.output.kv("asset", asset.path());

    if let Some(report) = simulation {
        ctx.output.header(&format!("Simulation: {}", report.event));
        ctx.output.kv("final state", &report.state.to_string());
        match report.asset {
            Some(path) => ctx.output.kv("showing", &path),
            None => ctx.output.kv("showing", "nothing"),
        }
        if report.retry_offered {
            ctx.output.info("\"Retry 3D\" is offered.");
        }
    }

    Ok(())
}

fn build_input(args: &PreviewArgs) -> CapabilityInput {
    let mut input = CapabilityInput::new()
        .with_mobile(args.mobile)
        .with_reduce_motion(args.reduce_motion)
        .with_webgl(!args.no_webgl)
        .with_save_data(args.save_data);
    if let Some(effective_type) = &args.effective_type {
        input = input.with_effective_type(effective_type.as_str());
    }
    if let Some(memory) = args.memory {
        input = input.with_device_memory(memory);
    }
    if let Some(cores) = args.cores {
        input = input.with_hardware_concurrency(cores);
    }
    input
}

/// Mount a viewer for `input` and play one renderer event through it.
fn simulate(event: Simulation, input: &CapabilityInput, ctx: &Context) -> Result<SimulationReport> {
    let config = ctx.config.preview_config();
    let timeout = config.ready_timeout();
    let logger = ctx.logger("preview").with_component("preview");
    let mut lifecycle = PreviewLifecycle::new(config).with_observer(TransitionLogger { logger });

    lifecycle.begin(Duration::ZERO)?;
    lifecycle.resolve(input, Duration::ZERO)?;

    if !lifecycle.state().holds_gpu_context() {
        ctx.output
            .debug("Resolver chose the static preview; no renderer to simulate");
    }

    let ready_at = Duration::from_millis(SIMULATED_READY_MS);
    match event {
        Simulation::Ready => {
            lifecycle.renderer_ready(ready_at);
            lifecycle.tick(timeout + ready_at);
        }
        Simulation::ContextLost => {
            lifecycle.renderer_ready(ready_at);
            lifecycle.context_lost(ready_at * 2);
        }
        Simulation::Timeout => {
            lifecycle.tick(timeout);
        }
        Simulation::PerformanceDrop => {
            lifecycle.renderer_ready(ready_at);
            lifecycle.performance_drop(ready_at * 3);
        }
    }

    let state = *lifecycle.state();
    let assets = PreviewAssets::default();
    Ok(SimulationReport {
        event: format!("{:?}", event),
        state,
        retry_offered: state.is_retry_offered(),
        asset: assets.for_state(&state).map(|a| a.path().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use sukaj_observability::SessionId;

    fn args() -> PreviewArgs {
        PreviewArgs {
            mobile: false,
            reduce_motion: false,
            no_webgl: false,
            save_data: false,
            effective_type: None,
            memory: None,
            cores: None,
            simulate: None,
        }
    }

    fn context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
            fixture_override: None,
            session_id: SessionId::from_string("test"),
        }
    }

    #[test]
    fn test_default_flags_resolve_premium() {
        let input = build_input(&args());
        assert_eq!(resolve_preview_mode(&input), PreviewMode::DesktopPremium3d);
    }

    #[test]
    fn test_flags_map_to_input() {
        let input = build_input(&PreviewArgs {
            mobile: true,
            no_webgl: true,
            effective_type: Some("3g".into()),
            memory: Some(2.0),
            cores: Some(2),
            ..args()
        });
        assert!(input.is_mobile);
        assert!(!input.has_webgl);
        assert_eq!(input.effective_type.as_deref(), Some("3g"));
        assert_eq!(input.memory_gb(), 2.0);
        assert_eq!(input.cores(), 2);
    }

    #[test]
    fn test_simulated_context_loss_offers_retry() {
        let report = simulate(Simulation::ContextLost, &build_input(&args()), &context()).unwrap();
        assert!(report.retry_offered);
        assert!(matches!(
            report.state,
            PreviewState::FallbackWithRetry {
                mode: PreviewMode::DesktopPremium3d,
                reason: DowngradeReason::ContextLost,
            }
        ));
        assert_eq!(
            report.asset.as_deref(),
            Some("/media/hero/pipe-static-fallback.webp")
        );
    }

    #[test]
    fn test_simulated_ready_keeps_rendering() {
        let report = simulate(Simulation::Ready, &build_input(&args()), &context()).unwrap();
        assert!(matches!(
            report.state,
            PreviewState::Rendering3d { ready: true, .. }
        ));
    }

    #[test]
    fn test_simulated_timeout_downgrades() {
        let report = simulate(Simulation::Timeout, &build_input(&args()), &context()).unwrap();
        assert!(matches!(
            report.state,
            PreviewState::FallbackWithRetry {
                reason: DowngradeReason::ReadyTimeout,
                ..
            }
        ));
    }

    #[test]
    fn test_static_preview_ignores_renderer_events() {
        let input = build_input(&PreviewArgs {
            save_data: true,
            ..args()
        });
        let report = simulate(Simulation::ContextLost, &input, &context()).unwrap();
        assert_eq!(report.state, PreviewState::Fallback);
        assert!(!report.retry_offered);
    }
}
