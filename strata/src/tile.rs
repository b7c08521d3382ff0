//! Tile kinds and placed tile records.

use glam::{IVec2, DVec2};


/// A kind of tile placed by the terrain pass.
///
/// A kind only carries its atlas tag name, resolving the tag to an actual
/// sprite or material asset is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Deep stone below the soil layer.
    Bedrock,
    /// Soil rows directly below the surface row.
    Soil,
    /// The walkable top row of a column.
    Surface,
    /// Tree trunk.
    Log,
    /// Tree canopy.
    Leaf,
}

impl TileKind {

    /// Every tile kind, terrain layers first, then tree parts.
    pub const ALL: [TileKind; 5] = [
        TileKind::Bedrock,
        TileKind::Soil,
        TileKind::Surface,
        TileKind::Log,
        TileKind::Leaf,
    ];

    /// The atlas tag naming this kind.
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Bedrock => "bedrock",
            TileKind::Soil => "soil",
            TileKind::Surface => "surface",
            TileKind::Log => "log",
            TileKind::Leaf => "leaf",
        }
    }

}

/// An immutable record of one placed tile.
///
/// Records are only ever appended during a pass, their emission order is
/// part of the deterministic output for a given seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRecord {
    /// The cell this tile occupies.
    pub pos: IVec2,
    /// The material kind.
    pub kind: TileKind,
    /// Index of the chunk owning this tile.
    pub chunk: u32,
}

impl TileRecord {

    /// The visual center of the tile, offset half a cell from its corner.
    /// The recorded position itself stays on the integer grid.
    #[inline]
    pub fn center(self) -> DVec2 {
        self.pos.as_dvec2() + 0.5
    }

}
