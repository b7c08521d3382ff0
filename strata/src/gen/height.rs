//! Terrain height profile, a 1D ridge cut out of 2D noise.

use glam::DVec2;

use crate::util::{PerlinNoise, WorldRand};


/// Number of candidate rows of a column of the given height, the integer
/// rows `y >= 0` with `y < height`. Zero for non-positive heights.
#[inline]
pub fn column_rows(height: f64) -> i32 {
    height.ceil().max(0.0) as i32
}


/// The terrain height profile of a world.
///
/// Heights come from a single line of 2D noise: the x coordinate travels
/// along `(x + seed) * freq` while the y coordinate stays pinned at
/// `seed * freq`, so the profile is a 1D ridge of the same kind of field
/// the caves use. The float heights are kept as is, rounding only ever
/// happens at loop bounds.
#[derive(Debug, Clone)]
pub struct HeightProfile {
    /// Noise sampled along the ridge.
    noise: PerlinNoise,
    /// The world seed, doubling as the noise-space offset.
    seed: i64,
    /// Sampling frequency along the ridge.
    freq: f64,
    /// Height span above the floor.
    multiplier: f64,
    /// Height floor.
    addition: f64,
}

impl HeightProfile {

    /// Create a new profile with its noise built from the given RNG.
    pub fn new(rand: &mut WorldRand, seed: i64, freq: f64, multiplier: f64, addition: f64) -> Self {
        Self {
            noise: PerlinNoise::new(rand),
            seed,
            freq,
            multiplier,
            addition,
        }
    }

    /// Sample the terrain height of the given column, in
    /// `[addition, addition + multiplier]`.
    pub fn height(&self, x: i32) -> f64 {
        let seed = self.seed as f64;
        let pos = DVec2::new((x as f64 + seed) * self.freq, seed * self.freq);
        self.noise.gen_unit_point(pos) * self.multiplier + self.addition
    }

}
