//! World generation configuration.


/// Bounds behavior for noise queries outside of the pre-generated grid.
///
/// Columns taller than the world size query the cave field above its top
/// row; the policy decides whether that is an error or a clamped read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Out-of-grid queries abort the pass with a sample error.
    #[default]
    Strict,
    /// Out-of-grid queries read the nearest edge cell.
    Clamp,
}

/// Configuration of a terrain pass.
///
/// All fields are plain knobs set by the host ahead of generation, the
/// generator validates them once and never mutates them. Defaults are the
/// reference tuning for a 100 cells wide world.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// World width and cave grid side, in cells.
    pub world_size: i32,
    /// Number of columns grouped into one chunk, must divide `world_size`.
    pub chunk_size: i32,
    /// Soil rows kept between bedrock and the surface row of each column.
    pub dirt_layer_height: i32,
    /// Cave threshold, cells with noise above this value are solid.
    pub surface_value: f64,
    /// Terrain height span above `height_addition`.
    pub height_multiplier: f64,
    /// Terrain height floor.
    pub height_addition: f64,
    /// Cave noise frequency.
    pub cave_freq: f64,
    /// Terrain profile noise frequency.
    pub terrain_freq: f64,
    /// When false the cave field is skipped entirely and every cell within
    /// the height profile is solid.
    pub generate_caves: bool,
    /// Upper bound of the per-surface-cell tree draw, in `[0, tree_chance)`.
    /// A tree can only root when the draw lands on 1, so a higher bound
    /// makes trees rarer and a bound of 1 disables them.
    pub tree_chance: i32,
    /// Minimum trunk height, inclusive.
    pub min_tree_height: i32,
    /// Maximum trunk height, exclusive.
    pub max_tree_height: i32,
    /// Bounds behavior for cave queries above the grid.
    pub bounds_policy: BoundsPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 100,
            chunk_size: 20,
            dirt_layer_height: 5,
            surface_value: 0.25,
            height_multiplier: 4.0,
            height_addition: 25.0,
            cave_freq: 0.05,
            terrain_freq: 0.05,
            generate_caves: true,
            tree_chance: 10,
            min_tree_height: 3,
            max_tree_height: 6,
            bounds_policy: BoundsPolicy::Strict,
        }
    }
}

impl WorldConfig {

    /// Number of chunks of a valid configuration.
    #[inline]
    pub fn num_chunks(&self) -> u32 {
        (self.world_size / self.chunk_size) as u32
    }

    /// Check the knobs for degenerate combinations, returning the first
    /// problem found. A configuration that passes can no longer fail
    /// mid-pass on terrain tiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_size <= 0 {
            Err(ConfigError::IllegalWorldSize(self.world_size))
        } else if self.chunk_size <= 0 {
            Err(ConfigError::IllegalChunkSize(self.chunk_size))
        } else if self.world_size % self.chunk_size != 0 {
            Err(ConfigError::ChunkSizeMismatch {
                world_size: self.world_size,
                chunk_size: self.chunk_size,
            })
        } else if self.tree_chance <= 0 {
            Err(ConfigError::IllegalTreeChance(self.tree_chance))
        } else if self.min_tree_height < 0 || self.min_tree_height >= self.max_tree_height {
            Err(ConfigError::IllegalTreeHeight {
                min: self.min_tree_height,
                max: self.max_tree_height,
            })
        } else {
            Ok(())
        }
    }

}

/// Error returned for a degenerate configuration, ahead of any generation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("world size must be positive, got {0}")]
    IllegalWorldSize(i32),
    #[error("chunk size must be positive, got {0}")]
    IllegalChunkSize(i32),
    #[error("chunk size {chunk_size} does not divide world size {world_size}")]
    ChunkSizeMismatch { world_size: i32, chunk_size: i32 },
    #[error("tree chance must be at least 1, got {0}")]
    IllegalTreeChance(i32),
    #[error("tree height range [{min}, {max}) is empty or negative")]
    IllegalTreeHeight { min: i32, max: i32 },
}
