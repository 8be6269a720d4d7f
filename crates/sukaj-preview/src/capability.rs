//! Device capability resolution.
//!
//! Classifies a snapshot of device and browser signals into a single
//! [`PreviewMode`]. The hard gates (no WebGL, save-data, slow network,
//! reduced motion) are checked before any hardware tiering, so a device that
//! fails a gate never gets a GPU context.

use crate::mode::PreviewMode;
use serde::{Deserialize, Serialize};

/// Device memory assumed when the browser does not report it, in GB.
pub const DEFAULT_DEVICE_MEMORY_GB: f64 = 4.0;

/// Logical core count assumed when the browser does not report it.
pub const DEFAULT_HARDWARE_CONCURRENCY: u32 = 4;

/// Network classes treated as slow when they are the whole label.
const SLOW_NETWORK_TYPES: [&str; 2] = ["2g", "3g"];

/// Marker treated as slow anywhere in the label.
const SLOWEST_NETWORK_MARKER: &str = "slow-2g";

/// Snapshot of the signals the resolver reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityInput {
    /// Coarse device class, computed by the caller.
    pub is_mobile: bool,
    /// OS/browser motion-reduction preference.
    pub reduce_motion: bool,
    /// Whether a WebGL context could be created at all.
    pub has_webgl: bool,
    /// Reduced data usage requested.
    pub save_data: bool,
    /// Network class label such as "4g".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_type: Option<String>,
    /// Approximate RAM in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_memory: Option<f64>,
    /// Approximate logical core count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,
}

impl CapabilityInput {
    /// Start from a desktop browser with WebGL and no reported hardware.
    pub fn new() -> Self {
        Self {
            has_webgl: true,
            ..Self::default()
        }
    }

    pub fn with_mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }

    pub fn with_reduce_motion(mut self, reduce_motion: bool) -> Self {
        self.reduce_motion = reduce_motion;
        self
    }

    pub fn with_webgl(mut self, has_webgl: bool) -> Self {
        self.has_webgl = has_webgl;
        self
    }

    pub fn with_save_data(mut self, save_data: bool) -> Self {
        self.save_data = save_data;
        self
    }

    pub fn with_effective_type(mut self, effective_type: impl Into<String>) -> Self {
        self.effective_type = Some(effective_type.into());
        self
    }

    pub fn with_device_memory(mut self, gb: f64) -> Self {
        self.device_memory = Some(gb);
        self
    }

    pub fn with_hardware_concurrency(mut self, cores: u32) -> Self {
        self.hardware_concurrency = Some(cores);
        self
    }

    /// Device memory, or the default when unreported.
    pub fn memory_gb(&self) -> f64 {
        self.device_memory.unwrap_or(DEFAULT_DEVICE_MEMORY_GB)
    }

    /// Core count, or the default when unreported.
    pub fn cores(&self) -> u32 {
        self.hardware_concurrency.unwrap_or(DEFAULT_HARDWARE_CONCURRENCY)
    }

    /// Check if the reported network class is exactly 2g or 3g, or mentions
    /// slow-2g. Case-insensitive; surrounding whitespace is not stripped.
    pub fn is_slow_network(&self) -> bool {
        self.effective_type.as_deref().is_some_and(|t| {
            let t = t.to_ascii_lowercase();
            SLOW_NETWORK_TYPES.contains(&t.as_str()) || t.contains(SLOWEST_NETWORK_MARKER)
        })
    }

    /// Memory at most 2 GB or at most 2 cores.
    pub fn is_very_constrained(&self) -> bool {
        self.memory_gb() <= 2.0 || self.cores() <= 2
    }

    /// Memory at most 4 GB or at most 4 cores.
    pub fn is_moderately_constrained(&self) -> bool {
        self.memory_gb() <= 4.0 || self.cores() <= 4
    }
}

/// The rule that decided a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionReason {
    #[serde(rename = "no_webgl")]
    NoWebGl,
    SaveData,
    SlowNetwork,
    ReducedMotion,
    ConstrainedMobile,
    Mobile,
    ConstrainedDesktop,
    CapableDesktop,
}

impl ResolutionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionReason::NoWebGl => "no_webgl",
            ResolutionReason::SaveData => "save_data",
            ResolutionReason::SlowNetwork => "slow_network",
            ResolutionReason::ReducedMotion => "reduced_motion",
            ResolutionReason::ConstrainedMobile => "constrained_mobile",
            ResolutionReason::Mobile => "mobile",
            ResolutionReason::ConstrainedDesktop => "constrained_desktop",
            ResolutionReason::CapableDesktop => "capable_desktop",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResolutionReason::NoWebGl => "WebGL is unavailable",
            ResolutionReason::SaveData => "data saver is on",
            ResolutionReason::SlowNetwork => "the network is slow",
            ResolutionReason::ReducedMotion => "reduced motion is preferred",
            ResolutionReason::ConstrainedMobile => "mobile device with at most 2 GB or 2 cores",
            ResolutionReason::Mobile => "mobile device",
            ResolutionReason::ConstrainedDesktop => "desktop with at most 4 GB or 4 cores",
            ResolutionReason::CapableDesktop => "capable desktop",
        }
    }
}

/// A mode together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub mode: PreviewMode,
    pub reason: ResolutionReason,
}

/// Resolve the preview mode and report which rule fired.
///
/// Gates are checked in order: WebGL, save-data, slow network, reduced
/// motion. The first matching rule wins.
pub fn explain(input: &CapabilityInput) -> Resolution {
    use ResolutionReason::*;

    let (mode, reason) = if !input.has_webgl {
        (PreviewMode::FallbackPreview, NoWebGl)
    } else if input.save_data {
        (PreviewMode::FallbackPreview, SaveData)
    } else if input.is_slow_network() {
        (PreviewMode::FallbackPreview, SlowNetwork)
    } else if input.reduce_motion {
        (PreviewMode::FallbackPreview, ReducedMotion)
    } else if input.is_mobile {
        if input.is_very_constrained() {
            (PreviewMode::FallbackPreview, ConstrainedMobile)
        } else {
            (PreviewMode::MobileLite3d, Mobile)
        }
    } else if input.is_moderately_constrained() {
        (PreviewMode::MobileLite3d, ConstrainedDesktop)
    } else {
        (PreviewMode::DesktopPremium3d, CapableDesktop)
    };

    tracing::debug!(mode = mode.as_str(), reason = reason.as_str(), "preview mode resolved");

    Resolution { mode, reason }
}

/// Resolve the preview mode for a signal snapshot.
pub fn resolve_preview_mode(input: &CapabilityInput) -> PreviewMode {
    explain(input).mode
}
