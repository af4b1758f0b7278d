use serde::Deserialize;
use thiserror::Error;

/// Tuning knobs for a firework show, provided by the hosting view.
///
/// Every field has a sensible default, so hosts typically override only the
/// viewport size (and a seed of 0 tells the web runner to derive one from
/// the clock).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// RNG seed. A given seed reproduces a show exactly.
    pub seed: u64,
    /// Frames between automatic (idle) launch batches.
    pub auto_interval: u32,
    /// Frames between launch batches while the pointer is held.
    pub held_interval: u32,
    /// Fraction of the previous frame erased per frame, [0, 1].
    pub fade_strength: f32,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            seed: 42,
            auto_interval: 80,
            held_interval: 5,
            fade_strength: 0.5,
        }
    }
}

/// Errors that prevent a show from starting.
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("viewport must have positive size, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ShowConfig::default();
        assert_eq!(c.auto_interval, 80);
        assert_eq!(c.held_interval, 5);
        assert_eq!(c.fade_strength, 0.5);
    }

    #[test]
    fn deserializes_partial_json() {
        let c: ShowConfig = serde_json::from_str(r#"{"width": 1280.0, "seed": 7}"#).unwrap();
        assert_eq!(c.width, 1280.0);
        assert_eq!(c.seed, 7);
        // Unspecified fields fall back to defaults
        assert_eq!(c.height, 600.0);
        assert_eq!(c.auto_interval, 80);
    }
}
