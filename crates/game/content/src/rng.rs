//! Deterministic stateless RNG for content generation.
//!
//! PCG-XSH-RR: a 64-bit LCG step followed by an xorshift and a random
//! rotate. Stateless by design; every call derives its value from the seed
//! alone, so map generation is reproducible from the map seed.

#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }

    /// Seed for a per-tile decision, mixed from the map seed and coordinates.
    pub fn tile_seed(map_seed: u64, x: i32, y: i32) -> u64 {
        let mut hash = map_seed;
        hash ^= (x as u64).wrapping_mul(0x9e3779b97f4a7c15);
        hash ^= (y as u64).wrapping_mul(0x517cc1b727220a95);
        hash
    }
}
