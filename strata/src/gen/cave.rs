//! Cave carving through a pre-generated noise field.

use glam::{DVec2, IVec2};

use crate::config::{WorldConfig, BoundsPolicy};
use crate::util::{NoiseMap, PerlinNoise, SampleError, WorldRand};


/// The cave mask of a world.
///
/// The whole field is generated ahead of the column pass, one unit-range
/// value per cell of a `world_size` sided square. A cell is solid ground
/// when its value is strictly above the threshold and carved out otherwise.
/// Columns taller than the grid query cells above it, the bounds policy
/// decides between failing the query and clamping it to the top edge.
#[derive(Debug, Clone)]
pub struct CaveMask {
    /// The pre-generated field.
    map: NoiseMap,
    /// Solidity threshold.
    surface_value: f64,
    /// Behavior for queries outside the field.
    policy: BoundsPolicy,
}

impl CaveMask {

    /// Generate the full field for a world of the configured size, with its
    /// noise built from the given RNG.
    pub fn new(rand: &mut WorldRand, seed: i64, config: &WorldConfig) -> Self {
        let noise = PerlinNoise::new(rand);
        let mut map = NoiseMap::new(config.world_size, config.world_size);
        noise.gen_map(&mut map, DVec2::splat(seed as f64), config.cave_freq);
        Self {
            map,
            surface_value: config.surface_value,
            policy: config.bounds_policy,
        }
    }

    /// Return true if the given cell is solid ground.
    pub fn is_solid(&self, pos: IVec2) -> Result<bool, SampleError> {
        let value = match self.policy {
            BoundsPolicy::Strict => self.map.get(pos)?,
            BoundsPolicy::Clamp => self.map.get_clamped(pos),
        };
        Ok(value > self.surface_value)
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    fn mask_config(surface_value: f64, policy: BoundsPolicy) -> WorldConfig {
        WorldConfig {
            world_size: 20,
            chunk_size: 5,
            surface_value,
            bounds_policy: policy,
            ..Default::default()
        }
    }

    #[test]
    fn threshold_decides_solidity() {
        // Unit-range values are all strictly above -0.1 and never above 1.1.
        let all = CaveMask::new(&mut WorldRand::new(3), 3, &mask_config(-0.1, BoundsPolicy::Strict));
        let none = CaveMask::new(&mut WorldRand::new(3), 3, &mask_config(1.1, BoundsPolicy::Strict));
        for x in 0..20 {
            for y in 0..20 {
                let pos = IVec2::new(x, y);
                assert_eq!(all.is_solid(pos), Ok(true));
                assert_eq!(none.is_solid(pos), Ok(false));
            }
        }
    }

    #[test]
    fn same_seed_same_mask() {
        let a = CaveMask::new(&mut WorldRand::new(11), 11, &mask_config(0.25, BoundsPolicy::Strict));
        let b = CaveMask::new(&mut WorldRand::new(11), 11, &mask_config(0.25, BoundsPolicy::Strict));
        for x in 0..20 {
            for y in 0..20 {
                let pos = IVec2::new(x, y);
                assert_eq!(a.is_solid(pos), b.is_solid(pos));
            }
        }
    }

    #[test]
    fn queries_above_the_grid_follow_the_policy() {

        let strict = CaveMask::new(&mut WorldRand::new(7), 7, &mask_config(0.5, BoundsPolicy::Strict));
        let clamp = CaveMask::new(&mut WorldRand::new(7), 7, &mask_config(0.5, BoundsPolicy::Clamp));

        let err = strict.is_solid(IVec2::new(4, 20)).unwrap_err();
        assert_eq!(err.pos, IVec2::new(4, 20));
        assert_eq!(err.height, 20);

        // Same noise on both masks, the clamped query reads the top edge.
        let edge = clamp.is_solid(IVec2::new(4, 19)).unwrap();
        assert_eq!(clamp.is_solid(IVec2::new(4, 20)), Ok(edge));
        assert_eq!(clamp.is_solid(IVec2::new(4, 500)), Ok(edge));

        // In-range queries agree between the two policies.
        for x in 0..20 {
            for y in 0..20 {
                let pos = IVec2::new(x, y);
                assert_eq!(strict.is_solid(pos).unwrap(), clamp.is_solid(pos).unwrap());
            }
        }

    }

}
