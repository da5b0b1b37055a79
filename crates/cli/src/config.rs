//! Sketch settings, read from a JSON file and overridden by flags.

use crate::sketch::SketchKind;
use anyhow::{bail, Context, Result};
use random::NoiseOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub width: f64,
    pub height: f64,
    /// Root seed. Without one a seed is drawn from entropy and logged.
    pub seed: Option<String>,
    pub sketch: SketchKind,
    /// Number of marks; what a mark is depends on the sketch.
    pub count: usize,
    /// Any CSS color string.
    pub background: String,
    pub stroke_width: f64,
    pub noise: NoiseOptions,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            seed: None,
            sketch: SketchKind::Scatter,
            count: 200,
            background: "white".to_string(),
            stroke_width: 1.0,
            noise: NoiseOptions::default().with_frequency(0.005),
        }
    }
}

impl SketchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: SketchConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            bail!(
                "canvas size must be positive, got {}x{}",
                self.width,
                self.height
            );
        }
        if self.stroke_width < 0.0 {
            bail!("stroke width must not be negative, got {}", self.stroke_width);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SketchConfig =
            serde_json::from_str(r#"{"width": 400, "sketch": "flow", "seed": "moss"}"#).unwrap();
        assert_eq!(config.width, 400.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.sketch, SketchKind::Flow);
        assert_eq!(config.seed.as_deref(), Some("moss"));
        assert_eq!(config.noise.frequency, 0.005);
    }

    #[test]
    fn test_validate_rejects_empty_canvas() {
        let config = SketchConfig {
            width: 0.0,
            ..SketchConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(SketchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let error = SketchConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(error.to_string().contains("Failed to read config"));
    }
}
