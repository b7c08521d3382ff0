//! Chunks grouping sibling tiles by column, preallocated for a whole world.

use glam::IVec2;


/// Calculate the index of the chunk owning the given column. This is a
/// floor division, columns at negative x resolve to negative indices
/// instead of being folded back onto chunk zero.
#[inline]
pub fn calc_chunk_index(x: i32, chunk_size: i32) -> i32 {
    debug_assert!(chunk_size > 0, "illegal chunk size");
    x.div_euclid(chunk_size)
}


/// A group of sibling tiles, covering `chunk_size` adjacent columns.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    /// Indices of the owned tiles in the world's emission-ordered records.
    tiles: Vec<u32>,
}

impl Chunk {

    /// Indices of the owned tiles in the world's emission-ordered records,
    /// in placement order.
    #[inline]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

}

/// The fixed table of chunks of one world.
///
/// Every chunk is created empty ahead of the pass, placement never grows
/// the table and fails loudly for columns the table does not cover.
#[derive(Debug, Clone)]
pub struct ChunkTable {
    /// Columns per chunk.
    chunk_size: i32,
    /// The chunks, in increasing column order.
    chunks: Vec<Chunk>,
}

impl ChunkTable {

    /// Create a new table of `count` empty chunks, each `chunk_size`
    /// columns wide.
    pub fn new(chunk_size: i32, count: u32) -> Self {
        Self {
            chunk_size,
            chunks: vec![Chunk::default(); count as usize],
        }
    }

    /// Number of chunks in the table.
    #[inline]
    pub fn len(&self) -> u32 {
        self.chunks.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Resolve the chunk owning the given cell, failing when the cell's
    /// column falls outside of the table.
    pub fn index_of(&self, pos: IVec2) -> Result<u32, PlaceError> {
        let index = calc_chunk_index(pos.x, self.chunk_size);
        if index < 0 || index as usize >= self.chunks.len() {
            Err(PlaceError { pos, chunk: index, count: self.len() })
        } else {
            Ok(index as u32)
        }
    }

    /// Get a chunk from its index.
    #[inline]
    pub fn get(&self, index: u32) -> Option<&Chunk> {
        self.chunks.get(index as usize)
    }

    /// Record a tile in its owning chunk, previously resolved through
    /// [`Self::index_of`].
    pub(crate) fn insert(&mut self, chunk_index: u32, tile_index: u32) {
        self.chunks[chunk_index as usize].tiles.push(tile_index);
    }

}

/// Error returned when a tile is placed in a column owned by no chunk.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tile placement out of range: {pos} resolves to chunk {chunk} of {count}")]
pub struct PlaceError {
    /// The rejected cell.
    pub pos: IVec2,
    /// The chunk index the cell's column resolves to.
    pub chunk: i32,
    /// Number of chunks in the table.
    pub count: u32,
}
