//! Preview rendering modes.

use serde::{Deserialize, Serialize};

/// Which rendering path the hero viewer mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewMode {
    /// Full-detail 3D model.
    #[serde(rename = "desktop-premium-3d")]
    DesktopPremium3d,
    /// Reduced-detail 3D model.
    #[serde(rename = "mobile-lite-3d")]
    MobileLite3d,
    /// Static sprite/image; no GPU context.
    FallbackPreview,
}

impl PreviewMode {
    pub const ALL: [PreviewMode; 3] = [
        PreviewMode::DesktopPremium3d,
        PreviewMode::MobileLite3d,
        PreviewMode::FallbackPreview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewMode::DesktopPremium3d => "desktop-premium-3d",
            PreviewMode::MobileLite3d => "mobile-lite-3d",
            PreviewMode::FallbackPreview => "fallback-preview",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PreviewMode::DesktopPremium3d => "Premium 3D",
            PreviewMode::MobileLite3d => "Lite 3D",
            PreviewMode::FallbackPreview => "Preview",
        }
    }

    /// Check if this mode needs a GPU rendering context.
    pub fn is_3d(&self) -> bool {
        !matches!(self, PreviewMode::FallbackPreview)
    }
}

impl std::fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
