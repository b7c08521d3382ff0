//! Perlin noise generation over 2D tile grids.

use glam::{DVec2, IVec2};

use super::WorldRand;


/// A 2D Perlin noise generator.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    /// All permutations used by Perlin noise algorithm.
    permutations: Box<[u16; 512]>,
    /// Offset applied to all positions given to the generator.
    offset: DVec2,
}

impl PerlinNoise {

    /// Create a new perlin noise initialized with the given RNG.
    pub fn new(rand: &mut WorldRand) -> Self {

        let offset = rand.next_dvec2() * 256.0;
        let mut permutations = Box::new(std::array::from_fn::<u16, 512, _>(|i| {
            if i <= 256 {
                i as u16
            } else {
                0
            }
        }));

        for index in 0usize..256 {
            let permutation_index = rand.next_int_bounded(256 - index as i32) as usize + index;
            permutations.swap(index, permutation_index);
            permutations[index + 256] = permutations[index];
        }

        Self {
            permutations,
            offset,
        }

    }

    /// Get the raw noise value at given coordinates, roughly in `[-1, 1]`.
    pub fn gen_point(&self, pos: DVec2) -> f64 {

        let mut pos = pos + self.offset;
        let pos_floor = pos.floor();
        pos -= pos_floor;
        let factor = pos * pos * pos * (pos * (pos * 6.0 - 15.0) + 10.0);

        let pos_int = pos_floor.as_ivec2();
        let x_index = (pos_int.x & 255) as usize;
        let y_index = (pos_int.y & 255) as usize;

        let a = self.permutations[x_index] as usize + y_index;
        let b = self.permutations[x_index + 1] as usize + y_index;

        lerp(factor.y,
            lerp(factor.x,
                grad(self.permutations[a], pos),
                grad(self.permutations[b], pos - DVec2::new(1.0, 0.0))),
            lerp(factor.x,
                grad(self.permutations[a + 1], pos - DVec2::new(0.0, 1.0)),
                grad(self.permutations[b + 1], pos - DVec2::new(1.0, 1.0))))

    }

    /// Get the noise value at given coordinates, mapped and clamped into
    /// the `[0, 1]` unit range.
    #[inline]
    pub fn gen_unit_point(&self, pos: DVec2) -> f64 {
        (self.gen_point(pos) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Fill the given map with unit-range noise, sampling each cell at
    /// `(offset + cell) * freq`.
    pub fn gen_map(&self, map: &mut NoiseMap, offset: DVec2, freq: f64) {
        for x in 0..map.width() {
            for y in 0..map.height() {
                let pos = (offset + DVec2::new(x as f64, y as f64)) * freq;
                map.set(IVec2::new(x, y), self.gen_unit_point(pos));
            }
        }
    }

}

#[inline]
fn lerp(factor: f64, from: f64, to: f64) -> f64 {
    from + factor * (to - from)
}

#[inline]
fn grad(value: u16, pos: DVec2) -> f64 {
    let value = value & 7;
    let a = if value < 4 { pos.x } else { pos.y };
    let b = if value < 4 { pos.y } else { pos.x };
    (if value & 1 == 0 { a } else { -a }) + (if value & 2 == 0 { b } else { -b })
}


/// A grid of unit-range noise values generated ahead of a terrain pass.
///
/// The grid is filled once and only read afterwards, so it can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct NoiseMap {
    /// Grid width, in cells.
    width: i32,
    /// Grid height, in cells.
    height: i32,
    /// Row-major values, `width * height` of them.
    values: Box<[f64]>,
}

impl NoiseMap {

    /// Create a new zeroed map of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "illegal noise map dimensions");
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize].into_boxed_slice(),
        }
    }

    /// Grid width, in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height, in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, pos: IVec2) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Get the value at the given cell, failing if the cell is outside of
    /// the grid.
    pub fn get(&self, pos: IVec2) -> Result<f64, SampleError> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            Err(SampleError { pos, width: self.width, height: self.height })
        } else {
            Ok(self.values[self.index(pos)])
        }
    }

    /// Get the value at the cell nearest to the given one, clamping each
    /// coordinate to the grid edges.
    pub fn get_clamped(&self, pos: IVec2) -> f64 {
        let pos = pos.clamp(IVec2::ZERO, IVec2::new(self.width - 1, self.height - 1));
        self.values[self.index(pos)]
    }

    /// Set the value at the given cell.
    #[inline]
    pub fn set(&mut self, pos: IVec2, value: f64) {
        let index = self.index(pos);
        self.values[index] = value;
    }

}

/// Error returned when a noise map is queried outside of its grid.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("noise sample out of bounds: {pos} not in {width}x{height}")]
pub struct SampleError {
    /// The queried cell.
    pub pos: IVec2,
    /// Grid width at the time of the query.
    pub width: i32,
    /// Grid height at the time of the query.
    pub height: i32,
}
