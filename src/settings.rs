//! Emitter settings and quality presets
//!
//! Hosts usually keep these alongside their own preferences as JSON.

use serde::{Deserialize, Serialize};

/// Quality preset levels, each mapping to a per-emitter particle budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub const ALL: [QualityPreset; 3] = [QualityPreset::Low, QualityPreset::Medium, QualityPreset::High];

    pub fn name(&self) -> &'static str {
        match self {
            QualityPreset::Low => "low",
            QualityPreset::Medium => "medium",
            QualityPreset::High => "high",
        }
    }

    /// Case-insensitive lookup by `name`
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
    }

    /// Live + pending particles one emitter may hold. The demo burst is 30
    /// particles living up to 1.5s, so Low still fits several overlapping bursts.
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 256,
            QualityPreset::Medium => 1024,
            QualityPreset::High => 4096,
        }
    }
}

/// Emitter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Quality preset (drives the particle cap)
    pub quality: QualityPreset,
    /// Particle effects enabled
    pub particles: bool,
    /// Enforce the preset's particle cap
    #[serde(default = "default_true")]
    pub cap_particles: bool,
    /// Fixed RNG seed (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            cap_particles: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle cap. `Some(0)` when particles are off, `None` when uncapped.
    pub fn max_particles(&self) -> Option<usize> {
        if !self.particles {
            Some(0)
        } else if self.cap_particles {
            Some(self.quality.max_particles())
        } else {
            None
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(QualityPreset::from_name("Medium"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_name("ultra"), None);
        assert_eq!(QualityPreset::High.name(), "high");
    }

    #[test]
    fn test_max_particles() {
        let mut settings = Settings::from_preset(QualityPreset::High);
        assert_eq!(settings.max_particles(), Some(4096));

        settings.cap_particles = false;
        assert_eq!(settings.max_particles(), None);

        settings.particles = false;
        assert_eq!(settings.max_particles(), Some(0));
    }

    #[test]
    fn test_json_defaults() {
        let settings = Settings::from_json(r#"{"quality":"Low","particles":true}"#)
            .expect("valid settings json");
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(settings.cap_particles);
        assert_eq!(settings.seed, None);

        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("round trip"), settings);
    }
}
