//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (playback easing/time scale, camera defaults)
//! are consolidated here. Options serialize to/from TOML; partial files
//! fill the remaining fields with defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util::easing::Easing;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[playback]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Playback controller tuning.
    pub playback: PlaybackOptions,
    /// Initial camera pose.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns a message when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns a message when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize options: {e}"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// Tuning for the playback controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Easing curve applied to each segment's blend factor.
    pub easing: Easing,
    /// Multiplier applied to tick deltas (1.0 = real time, 0.5 = half
    /// speed). Must be finite and non-negative; invalid values fall back
    /// to 1.0 at controller construction.
    pub time_scale: f32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            easing: Easing::DEFAULT,
            time_scale: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// Initial pose for a camera constructed from options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Eye position.
    pub origin: [f32; 3],
    /// Look-at target.
    pub focus: [f32; 3],
    /// Up direction.
    pub up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            focus: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[playback]
time_scale = 0.25
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.playback.time_scale, 0.25);
        // Everything else should be default
        assert_eq!(opts.playback.easing, Easing::CubicInOut);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn easing_parses_from_snake_case() {
        let toml_str = r#"
[playback]
easing = "quadratic_out"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.playback.easing, Easing::QuadraticOut);
    }

    #[test]
    fn camera_options_feed_camera_construction() {
        let opts = CameraOptions {
            origin: [1.0, 2.0, 3.0],
            focus: [4.0, 5.0, 6.0],
            up: [0.0, 1.0, 0.0],
        };
        let camera = crate::camera::Camera::from_options(&opts);
        assert_eq!(camera.origin(), glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.focus(), glam::Vec3::new(4.0, 5.0, 6.0));
    }
}
