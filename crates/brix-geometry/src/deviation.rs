use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Tessellation-tolerance control for curved profile segments.
///
/// `deviation` bounds the sagitta between an arc and its approximating
/// chords; a looser deviation yields fewer segments. Segment counts are
/// clamped per full circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeviationParams {
    /// Maximum chord-to-arc deviation (in model units)
    pub deviation: f64,
    pub min_per_circle: u32,
    pub max_per_circle: u32,
}

impl DeviationParams {
    pub fn new(deviation: f64, min_per_circle: u32, max_per_circle: u32) -> Self {
        Self {
            deviation,
            min_per_circle,
            max_per_circle,
        }
    }

    /// Segments approximating a full circle of the given radius.
    ///
    /// A circle split into n chords has sagitta `r * (1 - cos(PI / n))`;
    /// n is the smallest count keeping that under `deviation`.
    pub fn segments_per_circle(&self, radius: f64) -> u32 {
        if radius <= self.deviation {
            return self.min_per_circle;
        }
        let half_step = (1.0 - self.deviation / radius).acos();
        let n = (std::f64::consts::PI / half_step).ceil() as u32;
        n.clamp(self.min_per_circle, self.max_per_circle)
    }

    /// Segments approximating an arc with the given sweep angle (radians).
    pub fn segments_for_arc(&self, radius: f64, sweep: f64) -> u32 {
        let per_circle = self.segments_per_circle(radius);
        let n = (per_circle as f64 * sweep.abs() / TAU).ceil() as u32;
        n.max(1)
    }
}

impl Default for DeviationParams {
    fn default() -> Self {
        Self {
            deviation: 0.5,
            min_per_circle: 8,
            max_per_circle: 128,
        }
    }
}
