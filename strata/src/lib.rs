//! Deterministic 2D tile terrain generation.
//!
//! A world is generated in one synchronous pass from a seed and a
//! [`config::WorldConfig`]: a noise height profile shapes each column,
//! layers classify into bedrock, soil and surface, a pre-generated cave
//! field carves cells out, and trees root on surface tiles. The pass emits
//! immutable tile records grouped into preallocated chunks, identically on
//! every run with the same inputs.

pub mod util;

pub mod config;
pub mod tile;

pub mod chunk;
pub mod world;
pub mod gen;
