//! World generation module.
//!
//! One [`WorldGenerator`] owns every RNG and pre-generated noise field of a
//! pass. A pass is a single synchronous sweep over the columns in
//! increasing x, rows in increasing y, which makes the emitted tile
//! sequence part of the deterministic output: same seed and configuration,
//! same records in the same order.

use std::time::Instant;

use glam::IVec2;
use tracing::{debug, trace};

use crate::config::{WorldConfig, ConfigError};
use crate::world::{World, TileSink};
use crate::chunk::PlaceError;
use crate::util::{WorldRand, SampleError};

// Terrain shape.
mod height;
mod layer;
pub use height::{HeightProfile, column_rows};
pub use layer::{classify, is_surface_row};

// Carvers and features.
mod cave;
mod tree;
pub use cave::CaveMask;
pub use tree::TreeGenerator;


/// Generate a whole world in one call, no sink attached.
pub fn generate(config: &WorldConfig, seed: i64) -> Result<World, GenError> {
    Ok(WorldGenerator::new(config.clone(), seed)?.generate()?)
}


/// A generator owning every noise field and RNG needed for terrain passes.
///
/// Construction derives one RNG per purpose from the world seed and fully
/// pre-generates the cave field, so a generator is ready to run passes
/// without further sampling setup. The same generator can run any number
/// of passes, each one restarts from the same draw stream.
pub struct WorldGenerator {
    /// The validated configuration of the pass.
    config: WorldConfig,
    /// The world seed.
    seed: i64,
    /// RNG for the tree draws of the pass.
    rand: WorldRand,
    /// The terrain height profile.
    height: HeightProfile,
    /// The cave mask, only generated when caves are enabled.
    caves: Option<CaveMask>,
    /// The tree feature generator.
    trees: TreeGenerator,
}

impl WorldGenerator {

    /// Create a new generator for the given configuration and seed. The
    /// configuration is validated here, after that a pass can only fail on
    /// strict out-of-grid cave queries.
    pub fn new(config: WorldConfig, seed: i64) -> Result<Self, ConfigError> {

        config.validate()?;

        let height = HeightProfile::new(
            &mut WorldRand::new(seed.wrapping_mul(9871)),
            seed,
            config.terrain_freq,
            config.height_multiplier,
            config.height_addition);

        let caves = config.generate_caves.then(|| {
            CaveMask::new(&mut WorldRand::new(seed.wrapping_mul(39811)), seed, &config)
        });

        let trees = TreeGenerator::new(
            config.tree_chance,
            config.min_tree_height,
            config.max_tree_height);

        Ok(Self {
            rand: WorldRand::new(seed),
            height,
            caves,
            trees,
            seed,
            config,
        })

    }

    /// The seed of this generator.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The validated configuration of this generator.
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Run a full pass and return the generated world.
    pub fn generate(&mut self) -> Result<World, GenError> {
        self.generate_with(&mut ())
    }

    /// Run a full pass, feeding every accepted tile to the given sink in
    /// emission order.
    ///
    /// Within a row the cave decision comes before the tree draw of the
    /// same cell, so a carved-out surface cell never roots a tree through
    /// its own missing tile. Tree tiles reaching past the chunk table, a
    /// canopy hanging over the world edge, are skipped; terrain tiles can
    /// no longer be out of range once the configuration validated.
    pub fn generate_with(&mut self, sink: &mut impl TileSink) -> Result<World, GenError> {

        let start = Instant::now();

        // Restart from the seed so that every pass draws the same stream.
        self.rand.set_seed(self.seed);

        let mut world = World::new(self.seed, self.config.clone());
        sink.prepare_chunks(world.chunk_count());

        for x in 0..self.config.world_size {

            let height = self.height.height(x);
            world.push_height(height);

            for y in 0..column_rows(height) {

                let pos = IVec2::new(x, y);
                let kind = classify(y, height, self.config.dirt_layer_height);

                let solid = match &self.caves {
                    Some(caves) => caves.is_solid(pos)?,
                    None => true,
                };

                if solid {
                    let record = world.push_tile(pos, kind)?;
                    sink.place_tile(record);
                }

                if is_surface_row(y, height) {
                    let tiles = self.trees.try_generate(pos, |p| world.contains(p), &mut self.rand);
                    for (tree_pos, tree_kind) in tiles {
                        match world.push_tile(tree_pos, tree_kind) {
                            Ok(record) => sink.place_tile(record),
                            Err(err) => trace!("skip tree tile: {err}"),
                        }
                    }
                }

            }

        }

        debug!("generated world: seed {}, {} tiles, {} chunks, {:?}",
            self.seed, world.tiles().len(), world.chunk_count(), start.elapsed());

        Ok(world)

    }

}

/// Error type for a failed generation pass.
#[derive(thiserror::Error, Debug)]
pub enum GenError {
    /// The configuration is degenerate.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    /// A tile resolved outside the chunk table.
    #[error("place: {0}")]
    Place(#[from] PlaceError),
    /// A cave query left the noise grid under the strict bounds policy.
    #[error("sample: {0}")]
    Sample(#[from] SampleError),
}
