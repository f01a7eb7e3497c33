// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! The constants below are the built-in defaults. `EditorSettings` carries
//! the same values at runtime and can be overridden from a TOML file, so a
//! host can tune hit radii for its pointer device without rebuilding.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// HIT TEST SETTINGS
// ============================================================================
/// Maximum distance from a handle end for it to be grabbed (inclusive)
const HANDLE_HIT_RADIUS: f64 = 8.0;

/// Maximum distance from an anchor position for it to be grabbed (inclusive)
const POINT_HIT_RADIUS: f64 = 10.0;

/// Distance from a segment's anchor midpoint below which a click inserts
/// a new anchor (exclusive)
const SEGMENT_HIT_RADIUS: f64 = 12.0;

// ============================================================================
// HANDLE SETTINGS
// ============================================================================
/// Horizontal length of the out handle on a freshly inserted anchor.
/// The in handle points the opposite way.
const DEFAULT_HANDLE_LENGTH: f64 = 30.0;

// ============================================================================
// HISTORY SETTINGS
// ============================================================================
/// Undo depth limit, `None` keeps the whole history
const UNDO_LIMIT: Option<usize> = None;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Hit test radii (canvas units)
pub mod hit_test {
    /// Handle grab radius (inclusive)
    pub const HANDLE: f64 = super::HANDLE_HIT_RADIUS;

    /// Anchor grab radius (inclusive)
    pub const POINT: f64 = super::POINT_HIT_RADIUS;

    /// Segment midpoint radius (exclusive)
    pub const SEGMENT: f64 = super::SEGMENT_HIT_RADIUS;
}

/// Default tangent handles for anchors inserted with a single click
pub mod handles {
    use kurbo::Vec2;

    /// Default in handle offset
    pub const DEFAULT_IN: Vec2 = Vec2::new(-super::DEFAULT_HANDLE_LENGTH, 0.0);

    /// Default out handle offset
    pub const DEFAULT_OUT: Vec2 = Vec2::new(super::DEFAULT_HANDLE_LENGTH, 0.0);
}

/// Undo history settings
pub mod history {
    /// Maximum number of undo entries kept (`None` = unlimited)
    pub const UNDO_LIMIT: Option<usize> = super::UNDO_LIMIT;
}

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting `{name}`: {value} (must be finite and positive)")]
    Invalid { name: &'static str, value: f64 },
}

/// Distance thresholds used by hit testing
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HitThresholds {
    /// Handle grab radius (inclusive)
    pub handle: f64,
    /// Anchor grab radius (inclusive)
    pub point: f64,
    /// Segment midpoint radius (exclusive)
    pub segment: f64,
}

impl Default for HitThresholds {
    fn default() -> Self {
        Self {
            handle: hit_test::HANDLE,
            point: hit_test::POINT,
            segment: hit_test::SEGMENT,
        }
    }
}

/// Runtime editor configuration
///
/// Every field falls back to the built-in default when omitted, so a
/// settings file only needs to mention what it changes:
///
/// ```toml
/// undo_limit = 200
///
/// [hit]
/// handle = 12.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub hit: HitThresholds,
    pub undo_limit: Option<usize>,
}

impl EditorSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: EditorSettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        tracing::info!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let radii = [
            ("hit.handle", self.hit.handle),
            ("hit.point", self.hit.point),
            ("hit.segment", self.hit.segment),
        ];
        for (name, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid { name, value });
            }
        }
        Ok(())
    }
}
