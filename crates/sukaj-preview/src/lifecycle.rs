//! Preview lifecycle state machine.
//!
//! Drives one mount of the hero viewer from resolution through rendering to
//! fallback. A runtime downgrade (context loss, ready timeout, performance
//! drop) is one-way: the viewer stays on the static fallback until the user
//! asks to retry.
//!
//! Time is passed in by the caller as the offset from an arbitrary epoch, so
//! the machine never reads a clock.

use std::fmt;
use std::time::Duration;

use crate::capability::{explain, CapabilityInput, Resolution};
use crate::error::PreviewError;
use crate::mode::PreviewMode;
use serde::{Deserialize, Serialize};

/// Default time a renderer gets to signal ready.
pub const DEFAULT_READY_TIMEOUT_MS: u64 = 5000;

/// Lifecycle tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Time a mounted renderer has to signal ready before downgrading.
    pub ready_timeout_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            ready_timeout_ms: DEFAULT_READY_TIMEOUT_MS,
        }
    }
}

impl PreviewConfig {
    pub fn ready_timeout(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }
}

/// Why a mounted renderer was replaced by the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DowngradeReason {
    /// The platform dropped the GPU context.
    ContextLost,
    /// The renderer never signalled ready.
    ReadyTimeout,
    /// Frame rate fell too low to keep rendering.
    PerformanceDrop,
}

impl DowngradeReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DowngradeReason::ContextLost => "context_lost",
            DowngradeReason::ReadyTimeout => "ready_timeout",
            DowngradeReason::PerformanceDrop => "performance_drop",
        }
    }
}

/// Lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PreviewState {
    /// Nothing mounted.
    Idle,
    /// Waiting for the first capability snapshot.
    Resolving,
    /// A 3D renderer is mounted.
    Rendering3d {
        mode: PreviewMode,
        /// Renderer has signalled ready.
        ready: bool,
        /// When the renderer was mounted.
        mounted_at: Duration,
        /// Mount count within this lifecycle, starting at 1.
        attempt: u32,
    },
    /// The resolver chose the static path.
    Fallback,
    /// A mounted renderer failed; retry is offered.
    FallbackWithRetry {
        /// Mode a retry remounts.
        mode: PreviewMode,
        reason: DowngradeReason,
    },
}

impl PreviewState {
    pub fn name(&self) -> &'static str {
        match self {
            PreviewState::Idle => "idle",
            PreviewState::Resolving => "resolving",
            PreviewState::Rendering3d { .. } => "rendering_3d",
            PreviewState::Fallback => "fallback",
            PreviewState::FallbackWithRetry { .. } => "fallback_with_retry",
        }
    }

    /// Mode currently on screen, if anything is mounted.
    pub fn displayed_mode(&self) -> Option<PreviewMode> {
        match self {
            PreviewState::Idle | PreviewState::Resolving => None,
            PreviewState::Rendering3d { mode, .. } => Some(*mode),
            PreviewState::Fallback | PreviewState::FallbackWithRetry { .. } => {
                Some(PreviewMode::FallbackPreview)
            }
        }
    }

    /// Check if a GPU context is (or is about to be) held.
    pub fn holds_gpu_context(&self) -> bool {
        matches!(self, PreviewState::Rendering3d { .. })
    }

    pub fn is_retry_offered(&self) -> bool {
        matches!(self, PreviewState::FallbackWithRetry { .. })
    }
}

impl fmt::Display for PreviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewState::Rendering3d { mode, ready, .. } => {
                let status = if *ready { "ready" } else { "loading" };
                write!(f, "{} ({}, {})", self.name(), mode, status)
            }
            PreviewState::FallbackWithRetry { mode, reason } => {
                write!(f, "{} ({}, {})", self.name(), mode, reason.as_str())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// Observer trait for lifecycle transitions.
pub trait PreviewObserver: Send + Sync {
    /// Called after every state change.
    fn on_transition(&self, from: &PreviewState, to: &PreviewState, now: Duration);
}

/// One mount of the hero viewer.
pub struct PreviewLifecycle {
    config: PreviewConfig,
    state: PreviewState,
    resolution: Option<Resolution>,
    attempts: u32,
    observers: Vec<Box<dyn PreviewObserver>>,
}

impl PreviewLifecycle {
    /// Create an idle lifecycle.
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            config,
            state: PreviewState::Idle,
            resolution: None,
            attempts: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn with_observer(mut self, observer: impl PreviewObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Most recent resolver decision.
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Start a mount: Idle to Resolving.
    pub fn begin(&mut self, now: Duration) -> Result<(), PreviewError> {
        match self.state {
            PreviewState::Idle => {
                self.transition(PreviewState::Resolving, now);
                Ok(())
            }
            _ => Err(self.invalid("begin")),
        }
    }

    /// Feed a capability snapshot.
    ///
    /// Each call resolves from scratch. A 3D decision never lifts a runtime
    /// downgrade; only [`retry`](Self::retry) does that.
    pub fn resolve(
        &mut self,
        input: &CapabilityInput,
        now: Duration,
    ) -> Result<Resolution, PreviewError> {
        if self.state == PreviewState::Idle {
            return Err(self.invalid("resolve"));
        }

        let resolution = explain(input);
        self.resolution = Some(resolution);
        let decided = resolution.mode;

        let current = self.state;
        let next = match current {
            PreviewState::Idle => None,
            PreviewState::Resolving | PreviewState::Fallback => {
                if decided.is_3d() {
                    Some(self.mount(decided, now))
                } else if current == PreviewState::Resolving {
                    Some(PreviewState::Fallback)
                } else {
                    None
                }
            }
            PreviewState::Rendering3d { mode, .. } => {
                if !decided.is_3d() {
                    Some(PreviewState::Fallback)
                } else if decided != mode {
                    Some(self.mount(decided, now))
                } else {
                    None
                }
            }
            // Only retry or unmount leaves a runtime downgrade. A 3D
            // decision just changes what the retry will mount.
            PreviewState::FallbackWithRetry { reason, .. } if decided.is_3d() => {
                Some(PreviewState::FallbackWithRetry {
                    mode: decided,
                    reason,
                })
            }
            PreviewState::FallbackWithRetry { .. } => None,
        };

        if let Some(next) = next {
            self.transition(next, now);
        }
        Ok(resolution)
    }

    /// Renderer reports its first frame. Returns `false` if the signal is stale.
    pub fn renderer_ready(&mut self, now: Duration) -> bool {
        let current = self.state;
        match current {
            PreviewState::Rendering3d {
                mode,
                ready: false,
                mounted_at,
                attempt,
            } => {
                self.transition(
                    PreviewState::Rendering3d {
                        mode,
                        ready: true,
                        mounted_at,
                        attempt,
                    },
                    now,
                );
                true
            }
            _ => self.stale("renderer_ready"),
        }
    }

    /// The platform dropped the GPU context.
    pub fn context_lost(&mut self, now: Duration) -> bool {
        self.downgrade(DowngradeReason::ContextLost, now)
    }

    /// The renderer reports sustained low frame rate.
    pub fn performance_drop(&mut self, now: Duration) -> bool {
        self.downgrade(DowngradeReason::PerformanceDrop, now)
    }

    /// Advance the clock; downgrades a renderer that missed its ready deadline.
    pub fn tick(&mut self, now: Duration) -> bool {
        let timeout = self.config.ready_timeout();
        match self.state {
            PreviewState::Rendering3d {
                ready: false,
                mounted_at,
                ..
            } if now.saturating_sub(mounted_at) >= timeout => {
                self.downgrade(DowngradeReason::ReadyTimeout, now)
            }
            _ => false,
        }
    }

    /// User asks for 3D again after a runtime downgrade.
    ///
    /// If the latest snapshot gates 3D off (reduced motion, save-data, ...)
    /// the retry settles in [`PreviewState::Fallback`] instead of mounting,
    /// and returns [`PreviewMode::FallbackPreview`].
    pub fn retry(&mut self, now: Duration) -> Result<PreviewMode, PreviewError> {
        let current = self.state;
        match current {
            PreviewState::FallbackWithRetry { mode, .. } => {
                let gated = self.resolution.is_some_and(|r| !r.mode.is_3d());
                if gated {
                    self.transition(PreviewState::Fallback, now);
                    return Ok(PreviewMode::FallbackPreview);
                }
                let next = self.mount(mode, now);
                self.transition(next, now);
                Ok(mode)
            }
            _ => Err(self.invalid("retry")),
        }
    }

    /// Tear down the mount from any state.
    pub fn unmount(&mut self, now: Duration) {
        self.resolution = None;
        self.attempts = 0;
        self.transition(PreviewState::Idle, now);
    }

    fn mount(&mut self, mode: PreviewMode, now: Duration) -> PreviewState {
        self.attempts += 1;
        PreviewState::Rendering3d {
            mode,
            ready: false,
            mounted_at: now,
            attempt: self.attempts,
        }
    }

    fn downgrade(&mut self, reason: DowngradeReason, now: Duration) -> bool {
        let current = self.state;
        match current {
            PreviewState::Rendering3d { mode, .. } => {
                tracing::warn!(mode = mode.as_str(), reason = reason.as_str(), "preview downgraded");
                self.transition(PreviewState::FallbackWithRetry { mode, reason }, now);
                true
            }
            _ => self.stale(reason.as_str()),
        }
    }

    fn stale(&self, signal: &str) -> bool {
        tracing::debug!(signal, state = self.state.name(), "ignoring stale renderer signal");
        false
    }

    fn invalid(&self, action: &str) -> PreviewError {
        PreviewError::InvalidTransition {
            from: self.state.name().to_string(),
            action: action.to_string(),
        }
    }

    fn transition(&mut self, to: PreviewState, now: Duration) {
        if self.state == to {
            return;
        }
        let from = std::mem::replace(&mut self.state, to);
        tracing::debug!(from = %from, to = %self.state, at_ms = now.as_millis() as u64, "preview transition");
        for observer in &self.observers {
            observer.on_transition(&from, &self.state, now);
        }
    }
}

impl Default for PreviewLifecycle {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

impl fmt::Debug for PreviewLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewLifecycle")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("resolution", &self.resolution)
            .field("observers", &self.observers.len())
            .finish()
    }
}
