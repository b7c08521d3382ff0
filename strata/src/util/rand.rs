//! Pseudo-random number generation for reproducible terrain passes.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{UNIX_EPOCH, SystemTime};
use std::num::Wrapping;

use glam::DVec2;


const MULTIPLIER: Wrapping<i64> = Wrapping(0x5DEECE66D);
const ADDEND: Wrapping<i64> = Wrapping(0xB);
const MASK: Wrapping<i64> = Wrapping((1 << 48) - 1);

const DOUBLE_DIV: f64 = (1u64 << 53) as f64;

/// World seeds are also used as additive offsets in noise space, so freshly
/// generated ones are reduced into a range where adding a column index to
/// the seed never loses `f64` precision.
const SEED_RANGE: i64 = 10_000;


#[inline]
fn initial_scramble(seed: i64) -> Wrapping<i64> {
    (Wrapping(seed) ^ MULTIPLIER) & MASK
}


/// Generate a new world seed in `[-10000, 10000)` from wall-clock entropy.
///
/// Any explicit `i64` is a valid world seed; this helper only exists for
/// hosts that want a fresh one with the same spread the terrain formulas
/// were tuned for.
pub fn gen_seed() -> i64 {
    static SEED: AtomicI64 = AtomicI64::new(8682522807148012);
    let mut current = SEED.load(Ordering::Relaxed);
    loop {
        let next = current.wrapping_mul(181783497276652981);
        match SEED.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => {
                // Nano time as an integer is not directly available in Rust,
                // so system time since unix epoch stands in for it.
                let next = match SystemTime::now().duration_since(UNIX_EPOCH) {
                    Ok(d) => next ^ (d.as_nanos() as i64),
                    Err(_) => next
                };
                return next.rem_euclid(SEED_RANGE * 2) - SEED_RANGE;
            }
            Err(old) => current = old
        }
    }
}

/// A pseudo-random number generator with the `java.util.Random` constants.
///
/// Every draw of a terrain pass goes through this generator, so a given
/// world seed reproduces the same world bit for bit on any platform.
#[derive(Debug, Clone)]
pub struct WorldRand {
    seed: Wrapping<i64>
}

impl Default for WorldRand {
    fn default() -> Self {
        Self::new_seeded()
    }
}

impl WorldRand {

    #[inline]
    pub fn new(seed: i64) -> WorldRand {
        WorldRand { seed: initial_scramble(seed) }
    }

    #[inline]
    pub fn new_seeded() -> WorldRand {
        Self::new(gen_seed())
    }

    #[inline]
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = initial_scramble(seed);
    }

    #[inline]
    fn next(&mut self, bits: u8) -> i32 {
        self.seed = (self.seed * MULTIPLIER + ADDEND) & MASK;
        (self.seed.0 as u64 >> (48 - bits)) as i32
    }

    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {

        if (bound & -bound) == bound {
            (((bound as i64).wrapping_mul(self.next(31) as i64)) >> 31) as i32
        } else {

            let mut bits;
            let mut val;

            loop {
                bits = self.next(31);
                val = bits.rem_euclid(bound);
                if bits - val + (bound - 1) >= 0 {
                    break;
                }
            }

            val

        }

    }

    /// Get the next pseudo-random integer in `[min, max)`.
    /// **This is not part of the standard Java class.**
    #[inline]
    pub fn next_int_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min < max, "invalid range");
        min + self.next_int_bounded(max - min)
    }

    /// Get the next pseudo-random double-precision float.
    pub fn next_double(&mut self) -> f64 {
        let high = (self.next(26) as i64) << 27;
        let low = self.next(27) as i64;
        (high.wrapping_add(low) as f64) / DOUBLE_DIV
    }

    /// Get the next pseudo-random double-precision float vector, x and y.
    /// **This is not part of the standard Java class.**
    pub fn next_dvec2(&mut self) -> DVec2 {
        DVec2 {
            x: self.next_double(),
            y: self.next_double(),
        }
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = WorldRand::new(1234);
        let mut b = WorldRand::new_seeded();
        b.set_seed(1234);
        for _ in 0..200 {
            assert_eq!(a.next_int_bounded(17), b.next_int_bounded(17));
            assert_eq!(a.next_double().to_bits(), b.next_double().to_bits());
        }
    }

    #[test]
    fn bounded_draws_stay_in_range() {
        let mut rand = WorldRand::new_seeded();
        for _ in 0..1000 {
            assert!((0..10).contains(&rand.next_int_bounded(10)));
            assert!((0..16).contains(&rand.next_int_bounded(16)));
            assert!((3..6).contains(&rand.next_int_range(3, 6)));
        }
    }

    #[test]
    fn doubles_stay_in_unit_range() {
        let mut rand = WorldRand::new(-4);
        for _ in 0..1000 {
            let v = rand.next_double();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_seed_stays_in_offset_range() {
        for _ in 0..100 {
            assert!((-10_000..10_000).contains(&gen_seed()));
        }
    }

}
