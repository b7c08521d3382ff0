//! Data structure for storing a fully generated world.

use glam::IVec2;
use indexmap::IndexSet;

use crate::chunk::{ChunkTable, PlaceError};
use crate::config::WorldConfig;
use crate::tile::{TileRecord, TileKind};


/// A fully generated world.
///
/// This is the immutable product of one terrain pass: every tile record in
/// emission order, the chunk table grouping them by column, the set of
/// occupied cells and the sampled height of every column. Two passes with
/// the same seed and configuration produce identical worlds.
#[derive(Debug)]
pub struct World {
    /// The seed this world was generated from.
    seed: i64,
    /// The configuration this world was generated with.
    config: WorldConfig,
    /// Every placed tile, in emission order.
    tiles: Vec<TileRecord>,
    /// Chunks grouping tile indices by column.
    chunks: ChunkTable,
    /// Every occupied cell, in insertion order.
    placed: IndexSet<IVec2>,
    /// The sampled terrain height of each column, in column order.
    heights: Vec<f64>,
}

impl World {

    /// Create a new empty world with its chunk table preallocated from the
    /// given configuration.
    pub(crate) fn new(seed: i64, config: WorldConfig) -> Self {
        Self {
            seed,
            chunks: ChunkTable::new(config.chunk_size, config.num_chunks()),
            placed: IndexSet::new(),
            heights: Vec::with_capacity(config.world_size.max(0) as usize),
            tiles: Vec::new(),
            config,
        }
    }

    /// Record the sampled height of the next column.
    pub(crate) fn push_height(&mut self, height: f64) {
        self.heights.push(height);
    }

    /// Place one tile: resolve its owning chunk, append the record and mark
    /// the cell as occupied. On a failed resolution nothing is recorded.
    pub(crate) fn push_tile(&mut self, pos: IVec2, kind: TileKind) -> Result<TileRecord, PlaceError> {
        let chunk = self.chunks.index_of(pos)?;
        let tile_index = self.tiles.len() as u32;
        let record = TileRecord { pos, kind, chunk };
        self.tiles.push(record);
        self.chunks.insert(chunk, tile_index);
        self.placed.insert(pos);
        Ok(record)
    }

    /// The seed this world was generated from.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The configuration this world was generated with.
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Every placed tile, in emission order.
    #[inline]
    pub fn tiles(&self) -> &[TileRecord] {
        &self.tiles
    }

    /// Return true if the given cell holds at least one tile.
    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        self.placed.contains(&pos)
    }

    /// The sampled terrain height of the given column, if the pass reached
    /// that column.
    pub fn height(&self, x: i32) -> Option<f64> {
        if x < 0 {
            None
        } else {
            self.heights.get(x as usize).copied()
        }
    }

    /// Number of chunks of this world.
    #[inline]
    pub fn chunk_count(&self) -> u32 {
        self.chunks.len()
    }

    /// Iterate over the tiles owned by the given chunk, in placement order.
    /// The iterator is empty for an out-of-range chunk index.
    pub fn chunk_tiles(&self, index: u32) -> impl Iterator<Item = &TileRecord> + '_ {
        self.chunks.get(index)
            .map(|chunk| chunk.tiles())
            .unwrap_or_default()
            .iter()
            .map(|&tile_index| &self.tiles[tile_index as usize])
    }

}

/// Receiver of the placement events of a terrain pass.
///
/// Hosts implement this to mirror the pass into their own scene or
/// containers while it runs. The sink only ever sees tiles the pass has
/// accepted, so the chunk index of each record is always valid. The unit
/// type implements a no-op sink for hosts that only want the returned
/// [`World`].
pub trait TileSink {

    /// Called once ahead of any tile, with the number of chunks the world
    /// is divided into.
    fn prepare_chunks(&mut self, _count: u32) {}

    /// Called for each accepted tile, in emission order.
    fn place_tile(&mut self, tile: TileRecord);

}

impl TileSink for () {

    fn place_tile(&mut self, _tile: TileRecord) {}

}

#[cfg(test)]
mod tests {

    use super::*;

    fn small_world() -> World {
        World::new(42, WorldConfig {
            world_size: 10,
            chunk_size: 5,
            ..Default::default()
        })
    }

    #[test]
    fn pushed_tiles_are_recorded_everywhere() {

        let mut world = small_world();
        assert_eq!(world.chunk_count(), 2);

        world.push_height(5.0);
        let record = world.push_tile(IVec2::new(7, 2), TileKind::Soil).unwrap();
        assert_eq!(record.chunk, 1);

        assert_eq!(world.tiles(), [record]);
        assert!(world.contains(IVec2::new(7, 2)));
        assert!(!world.contains(IVec2::new(7, 3)));
        assert_eq!(world.chunk_tiles(1).copied().collect::<Vec<_>>(), [record]);
        assert_eq!(world.chunk_tiles(0).count(), 0);
        assert_eq!(world.chunk_tiles(2).count(), 0);

        assert_eq!(world.height(0), Some(5.0));
        assert_eq!(world.height(1), None);
        assert_eq!(world.height(-1), None);

    }

    #[test]
    fn failed_placement_records_nothing() {
        let mut world = small_world();
        let err = world.push_tile(IVec2::new(10, 0), TileKind::Leaf).unwrap_err();
        assert_eq!(err.chunk, 2);
        assert_eq!(err.count, 2);
        assert!(world.tiles().is_empty());
        assert!(!world.contains(IVec2::new(10, 0)));
    }

}
