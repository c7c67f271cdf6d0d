use serde::{Deserialize, Serialize};
use std::fmt;

/// Similarity score clamped to [0.0, 1.0].
///
/// A below-floor candidate is reported as *no match*, never as a
/// zero-similarity match; code that has no score to report uses
/// `Option<Similarity>`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Similarity(f64);

impl Similarity {
    /// Create a new Similarity, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Percentage rendering rounded to one decimal, for caller display.
    pub fn percentage(self) -> f64 {
        (self.0 * 1000.0).round() / 10.0
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Similarity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Similarity> for f64 {
    fn from(s: Similarity) -> Self {
        s.0
    }
}
