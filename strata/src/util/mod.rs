//! Random and noise utilities shared by the generation passes.

mod rand;
mod noise;

pub use rand::{WorldRand, gen_seed};

pub use noise::{PerlinNoise, NoiseMap, SampleError};
