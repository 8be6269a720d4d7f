//! Media the hero viewer mounts for each preview mode.

use std::time::Duration;

use crate::lifecycle::PreviewState;
use crate::mode::PreviewMode;
use serde::{Deserialize, Serialize};

/// Animated sprite sheet used by the fallback preview.
///
/// Frames are laid out row-major in a `columns` x `rows` grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    /// Image path.
    pub image: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    pub columns: u32,
    pub rows: u32,
    /// Time each frame is shown.
    pub frame_duration_ms: u64,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            image: "/media/sprites/pipe-sprite.svg".to_string(),
            frame_width: 320,
            frame_height: 320,
            frame_count: 16,
            columns: 4,
            rows: 4,
            frame_duration_ms: 90,
        }
    }
}

impl SpriteSheet {
    /// Pixel offset of a frame within the sheet. Frames past the end wrap.
    pub fn frame_offset(&self, frame: u32) -> (u32, u32) {
        let columns = self.columns.max(1);
        let frame = frame % self.frame_count.max(1);
        (
            (frame % columns) * self.frame_width,
            (frame / columns) * self.frame_height,
        )
    }

    /// Frame shown after `elapsed` of continuous playback.
    pub fn frame_at(&self, elapsed: Duration) -> u32 {
        let ticks = elapsed.as_millis() / u128::from(self.frame_duration_ms.max(1));
        (ticks % u128::from(self.frame_count.max(1))) as u32
    }

    /// Full sheet size in pixels (width, height).
    pub fn sheet_size(&self) -> (u32, u32) {
        (
            self.frame_width * self.columns,
            self.frame_height * self.rows,
        )
    }

    /// Length of one full loop.
    pub fn loop_duration(&self) -> Duration {
        Duration::from_millis(self.frame_duration_ms * u64::from(self.frame_count))
    }
}

/// What the viewer mounts for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAsset<'a> {
    /// A GLB model rendered in a WebGL context.
    Model(&'a str),
    /// The animated sprite sheet.
    Sprite(&'a SpriteSheet),
    /// A still image.
    Image(&'a str),
}

impl PreviewAsset<'_> {
    pub fn path(&self) -> &str {
        match self {
            PreviewAsset::Model(path) => path,
            PreviewAsset::Sprite(sheet) => &sheet.image,
            PreviewAsset::Image(path) => path,
        }
    }
}

/// Asset paths for every preview mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewAssets {
    /// Full-detail model.
    pub premium_model: String,
    /// Reduced-detail model.
    pub lite_model: String,
    /// Sprite sheet for the fallback preview.
    pub sprite: SpriteSheet,
    /// Still image shown after a runtime downgrade.
    pub static_image: String,
}

impl Default for PreviewAssets {
    fn default() -> Self {
        Self {
            premium_model: "/media/models/sukaj-premium-pipe.glb".to_string(),
            lite_model: "/media/models/sukaj-lite-pipe.glb".to_string(),
            sprite: SpriteSheet::default(),
            static_image: "/media/hero/pipe-static-fallback.webp".to_string(),
        }
    }
}

impl PreviewAssets {
    /// The asset a freshly resolved mode mounts.
    pub fn for_mode(&self, mode: PreviewMode) -> PreviewAsset<'_> {
        match mode {
            PreviewMode::DesktopPremium3d => PreviewAsset::Model(&self.premium_model),
            PreviewMode::MobileLite3d => PreviewAsset::Model(&self.lite_model),
            PreviewMode::FallbackPreview => PreviewAsset::Sprite(&self.sprite),
        }
    }

    /// The asset shown for a lifecycle state, if anything is shown.
    ///
    /// A runtime downgrade shows the still image rather than the sprite so a
    /// device that just failed to keep up is not handed another animation.
    pub fn for_state(&self, state: &PreviewState) -> Option<PreviewAsset<'_>> {
        match state {
            PreviewState::Idle | PreviewState::Resolving => None,
            PreviewState::Rendering3d { mode, .. } => Some(self.for_mode(*mode)),
            PreviewState::Fallback => Some(self.for_mode(PreviewMode::FallbackPreview)),
            PreviewState::FallbackWithRetry { .. } => Some(PreviewAsset::Image(&self.static_image)),
        }
    }
}
