//! Generate a world with the default configuration and print it as ASCII.
//! An explicit seed can be passed as the first argument.

use std::collections::HashMap;

use glam::IVec2;

use strata::config::WorldConfig;
use strata::tile::TileKind;
use strata::{gen, util};


fn glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Bedrock => '#',
        TileKind::Soil => '%',
        TileKind::Surface => '"',
        TileKind::Log => '|',
        TileKind::Leaf => '*',
    }
}

pub fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = std::env::args().nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .unwrap_or_else(util::gen_seed);

    let config = WorldConfig::default();
    let world = gen::generate(&config, seed).unwrap();

    let mut cells = HashMap::new();
    let mut top = 0;
    for tile in world.tiles() {
        cells.insert(tile.pos, tile.kind);
        top = top.max(tile.pos.y);
    }

    for y in (0..=top).rev() {
        let mut line = String::with_capacity(config.world_size as usize);
        for x in 0..config.world_size {
            line.push(match cells.get(&IVec2::new(x, y)) {
                Some(&kind) => glyph(kind),
                None => ' ',
            });
        }
        println!("{line}");
    }

    let mut ruler = String::new();
    for index in 0..world.chunk_count() {
        ruler.push_str(&format!("{:<1$}", index, config.chunk_size as usize));
    }
    println!("{ruler}");

    print!("seed {seed}, {} tiles", world.tiles().len());
    for kind in TileKind::ALL {
        print!(", {} {}", glyph(kind), kind.name());
    }
    println!();

}
