//! Closed float interval used as a random-sample domain and clamp bound

use serde::{Deserialize, Serialize};

/// Minimum and maximum float values (callers keep `minimum <= maximum`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatRange {
    pub minimum: f32,
    pub maximum: f32,
}

impl FloatRange {
    pub const fn new(minimum: f32, maximum: f32) -> Self {
        Self { minimum, maximum }
    }

    /// Range where every sample resolves to `value`
    pub const fn constant(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Check if a value lies within the closed interval
    pub fn contains(&self, value: f32) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Clamp into the range. Never panics, even when `minimum > maximum`.
    #[inline]
    pub(crate) fn clamp(&self, value: f32) -> f32 {
        value.max(self.minimum).min(self.maximum)
    }
}
