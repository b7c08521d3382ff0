//! Material layer classification of terrain columns.

use crate::tile::TileKind;


/// Classify the material of the cell at row `y` in a column of the given
/// sampled height. The branches are exclusive: bedrock below the soil band,
/// soil below the surface row, surface above that.
///
/// A `dirt_layer_height` at or above the column height simply leaves the
/// column without bedrock.
pub fn classify(y: i32, height: f64, dirt_layer_height: i32) -> TileKind {
    if (y as f64) < height - dirt_layer_height as f64 {
        TileKind::Bedrock
    } else if (y as f64) < height - 1.0 {
        TileKind::Soil
    } else {
        TileKind::Surface
    }
}

/// Return true if row `y` is the surface row of a column of the given
/// height. Within a column's candidate rows this matches exactly once, on
/// the topmost row.
#[inline]
pub fn is_surface_row(y: i32, height: f64) -> bool {
    (y as f64) >= height - 1.0
}
