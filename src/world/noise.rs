//! Terrain feature noise
//!
//! Each terrain feature is an independent smooth pseudo-noise function of
//! (x, y, seed): a bounded sum of sine and cosine terms whose phases are
//! derived from the seed and a per-feature salt. Deterministic and total.

/// One terrain feature's noise parameters
#[derive(Debug, Clone, Copy)]
pub struct FeatureNoise {
    /// Spatial frequency applied to both axes
    pub frequency: f64,
    /// Per-feature salt so features decorrelate under the same seed
    pub phase_salt: u64,
    /// A cell exhibits the feature when its value reaches this threshold
    pub threshold: f64,
}

impl FeatureNoise {
    pub const fn new(frequency: f64, phase_salt: u64, threshold: f64) -> Self {
        Self { frequency, phase_salt, threshold }
    }

    /// Noise value in [-1, 1]
    pub fn value(&self, x: i32, y: i32, seed: u64) -> f64 {
        let px = phase(seed, self.phase_salt, 1);
        let py = phase(seed, self.phase_salt, 2);
        let pd = phase(seed, self.phase_salt, 3);
        let fx = x as f64 * self.frequency;
        let fy = y as f64 * self.frequency;
        ((fx + px).sin() + (fy + py).cos() + ((fx + fy) * 0.7 + pd).sin()) / 3.0
    }

    /// Does this cell exhibit the feature?
    pub fn exceeds(&self, x: i32, y: i32, seed: u64) -> bool {
        self.value(x, y, seed) >= self.threshold
    }
}

/// Seed-derived phase offset in [0, 2π)
fn phase(seed: u64, salt: u64, k: u64) -> f64 {
    let h = mix(seed ^ salt.wrapping_mul(0x9e3779b97f4a7c15).wrapping_add(k));
    (h as f64 / u64::MAX as f64) * std::f64::consts::TAU
}

/// splitmix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
