//! Named generation presets
//!
//! A preset is a `GenerationOptions` without its texture, so effect tuning can
//! live in JSON and be bound to a host texture at load time.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{Color, EmissionType, FloatRange, GenerationOptions};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read presets: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse presets: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Generation options minus the texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationPreset {
    pub count: u32,
    #[serde(default)]
    pub color: Color,
    pub velocity: FloatRange,
    #[serde(default)]
    pub emission_type: EmissionType,
    pub rotation_velocity: FloatRange,
    pub scale: FloatRange,
    pub time_to_live: FloatRange,
    #[serde(default)]
    pub fade: bool,
}

impl GenerationPreset {
    /// A 30 particle white burst, the stock demo effect
    pub fn demo() -> Self {
        Self {
            count: 30,
            color: Color::WHITE,
            velocity: FloatRange::new(1.0, 4.0),
            emission_type: EmissionType::Burst,
            rotation_velocity: FloatRange::new(1.0, 2.0),
            scale: FloatRange::new(0.1, 1.0),
            time_to_live: FloatRange::new(1.0, 1.5),
            fade: false,
        }
    }

    /// Attach a texture to get options ready for `Emitter::generate`
    pub fn bind<T>(&self, texture: T) -> GenerationOptions<T> {
        GenerationOptions {
            texture,
            count: self.count,
            color: self.color,
            velocity: self.velocity,
            emission_type: self.emission_type,
            rotation_velocity: self.rotation_velocity,
            scale: self.scale,
            time_to_live: self.time_to_live,
            fade: self.fade,
        }
    }
}

impl<T> From<&GenerationOptions<T>> for GenerationPreset {
    fn from(options: &GenerationOptions<T>) -> Self {
        Self {
            count: options.count,
            color: options.color,
            velocity: options.velocity,
            emission_type: options.emission_type,
            rotation_velocity: options.rotation_velocity,
            scale: options.scale,
            time_to_live: options.time_to_live,
            fade: options.fade,
        }
    }
}

/// Presets keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetLibrary {
    presets: BTreeMap<String, GenerationPreset>,
}

impl PresetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `name -> preset`
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let library: Self = serde_json::from_str(json)?;
        log::debug!("Parsed {} particle presets", library.presets.len());
        Ok(library)
    }

    /// Load presets from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let library = Self::from_json(&json)?;
        log::info!("Loaded {} particle presets from {}", library.len(), path.display());
        Ok(library)
    }

    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, preset: GenerationPreset) {
        self.presets.insert(name.into(), preset);
    }

    pub fn get(&self, name: &str) -> Result<&GenerationPreset, PresetError> {
        self.presets
            .get(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
    }

    /// Look up a preset and bind it to a texture in one step
    pub fn options<T>(&self, name: &str, texture: T) -> Result<GenerationOptions<T>, PresetError> {
        Ok(self.get(name)?.bind(texture))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
