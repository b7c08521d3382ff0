//! Tree generation above surface tiles.

use glam::IVec2;

use crate::tile::TileKind;
use crate::util::WorldRand;


/// A feature generator for the simple trees rooting on surface tiles.
pub struct TreeGenerator {
    /// Upper bound of the root draw, drawn in `[0, chance)`.
    chance: i32,
    /// Minimum trunk height, inclusive.
    min_height: i32,
    /// Maximum trunk height, exclusive.
    max_height: i32,
}

impl TreeGenerator {

    #[inline]
    pub fn new(chance: i32, min_height: i32, max_height: i32) -> Self {
        Self {
            chance,
            min_height,
            max_height,
        }
    }

    /// Draw at the given surface cell and emit a tree when the draw lands
    /// on 1 and the cell actually received its surface tile.
    ///
    /// The root draw is consumed on every call so the draw stream stays
    /// aligned for a given seed whether or not trees grow; the trunk height
    /// draw is only consumed for a rooting tree. Emitted tiles are in
    /// order: trunk logs bottom to top, then the canopy.
    pub fn try_generate(&self,
        pos: IVec2,
        was_placed: impl Fn(IVec2) -> bool,
        rand: &mut WorldRand,
    ) -> Vec<(IVec2, TileKind)> {

        let draw = rand.next_int_bounded(self.chance);
        if draw != 1 || !was_placed(pos) {
            return Vec::new();
        }

        let height = rand.next_int_range(self.min_height, self.max_height);
        let mut tiles = Vec::with_capacity(height as usize + 8);
        place_tree(pos + IVec2::Y, height, &mut tiles);
        tiles

    }

}

/// Emit the tiles of one tree with its trunk base at `base`: logs from the
/// base up through `base + height`, then seven canopy leaves, center column
/// first. The bottom center leaf shares its cell with the top log, both
/// records are emitted.
fn place_tree(base: IVec2, height: i32, tiles: &mut Vec<(IVec2, TileKind)>) {

    for dy in 0..=height {
        tiles.push((base + IVec2::new(0, dy), TileKind::Log));
    }

    tiles.push((base + IVec2::new(0, height), TileKind::Leaf));
    tiles.push((base + IVec2::new(0, height + 1), TileKind::Leaf));
    tiles.push((base + IVec2::new(0, height + 2), TileKind::Leaf));

    tiles.push((base + IVec2::new(-1, height), TileKind::Leaf));
    tiles.push((base + IVec2::new(-1, height + 1), TileKind::Leaf));

    tiles.push((base + IVec2::new(1, height), TileKind::Leaf));
    tiles.push((base + IVec2::new(1, height + 1), TileKind::Leaf));

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn canopy_shape_for_a_trunk_of_four() {
        let mut tiles = Vec::new();
        place_tree(IVec2::new(10, 6), 4, &mut tiles);
        assert_eq!(tiles, [
            (IVec2::new(10, 6), TileKind::Log),
            (IVec2::new(10, 7), TileKind::Log),
            (IVec2::new(10, 8), TileKind::Log),
            (IVec2::new(10, 9), TileKind::Log),
            (IVec2::new(10, 10), TileKind::Log),
            (IVec2::new(10, 10), TileKind::Leaf),
            (IVec2::new(10, 11), TileKind::Leaf),
            (IVec2::new(10, 12), TileKind::Leaf),
            (IVec2::new(9, 10), TileKind::Leaf),
            (IVec2::new(9, 11), TileKind::Leaf),
            (IVec2::new(11, 10), TileKind::Leaf),
            (IVec2::new(11, 11), TileKind::Leaf),
        ]);
    }

    #[test]
    fn unsupported_cells_grow_nothing_but_consume_the_draw() {

        let gen = TreeGenerator::new(10, 3, 6);
        let mut rand = WorldRand::new(5);
        for x in 0..50 {
            let tiles = gen.try_generate(IVec2::new(x, 4), |_| false, &mut rand);
            assert!(tiles.is_empty());
        }

        // Exactly one bounded draw per call, the height draw never ran.
        let mut control = WorldRand::new(5);
        for _ in 0..50 {
            control.next_int_bounded(10);
        }
        assert_eq!(rand.next_double().to_bits(), control.next_double().to_bits());

    }

    #[test]
    fn rooted_trees_have_trunk_then_canopy() {

        // Heights drawn from [4, 5) so every tree has a trunk of four.
        let gen = TreeGenerator::new(2, 4, 5);
        let mut rand = WorldRand::new(99);
        let mut seen = 0;

        for x in 0..100 {
            let tiles = gen.try_generate(IVec2::new(x, 9), |_| true, &mut rand);
            if tiles.is_empty() {
                continue;
            }
            seen += 1;
            assert_eq!(tiles.len(), 12);
            assert_eq!(tiles[0], (IVec2::new(x, 10), TileKind::Log));
            assert_eq!(tiles[4], (IVec2::new(x, 14), TileKind::Log));
            assert!(tiles[..5].iter().all(|&(_, kind)| kind == TileKind::Log));
            assert!(tiles[5..].iter().all(|&(_, kind)| kind == TileKind::Leaf));
        }

        assert!(seen > 0, "no tree rooted over 100 draws of 1 in 2");

    }

    #[test]
    fn unit_chance_never_roots() {
        let gen = TreeGenerator::new(1, 3, 6);
        let mut rand = WorldRand::new(1);
        for x in 0..200 {
            assert!(gen.try_generate(IVec2::new(x, 4), |_| true, &mut rand).is_empty());
        }
    }

}
