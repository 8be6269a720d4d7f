//! Hero preview capability resolution for the Sukaj site.
//!
//! Decides which rendering path the hero pipe viewer mounts and tracks that
//! mount over time:
//!
//! - **Capability**: Pure resolver from device signals to a [`PreviewMode`]
//! - **Assets**: Model and sprite-sheet selection per mode
//! - **Lifecycle**: Mount state machine with one-way runtime fallback and retry
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use sukaj_preview::prelude::*;
//!
//! let input = CapabilityInput::new()
//!     .with_device_memory(8.0)
//!     .with_hardware_concurrency(8);
//! assert_eq!(resolve_preview_mode(&input), PreviewMode::DesktopPremium3d);
//!
//! let mut lifecycle = PreviewLifecycle::default();
//! lifecycle.begin(Duration::ZERO)?;
//! lifecycle.resolve(&input, Duration::ZERO)?;
//! lifecycle.context_lost(Duration::from_millis(1200));
//! assert!(lifecycle.state().is_retry_offered());
//! ```

pub mod assets;
pub mod capability;
pub mod error;
pub mod lifecycle;
pub mod mode;

pub use capability::{explain, resolve_preview_mode, CapabilityInput, Resolution};
pub use error::PreviewError;
pub use mode::PreviewMode;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assets::{PreviewAsset, PreviewAssets, SpriteSheet};
    pub use crate::capability::{
        explain, resolve_preview_mode, CapabilityInput, Resolution, ResolutionReason,
    };
    pub use crate::error::PreviewError;
    pub use crate::lifecycle::{
        DowngradeReason, PreviewConfig, PreviewLifecycle, PreviewObserver, PreviewState,
    };
    pub use crate::mode::PreviewMode;
}
