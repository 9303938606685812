//! RNG oracle for the reducer's random draws.
//!
//! The reducer never owns a stateful generator. Every draw is derived from
//! the play's seed and the intent nonce, so replaying the same intents with
//! the same seed reproduces the same play.

/// Deterministic random source.
///
/// Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Fair coin flip.
    fn coin_flip(&self, seed: u64) -> bool {
        self.next_u32(seed) & 1 == 1
    }

    /// Uniform index in `0..len`; `0` when `len` is zero.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
///
/// See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Context values separating independent draws taken from the same nonce.
pub mod context {
    pub const RESCHEDULE: u32 = 1;
    pub const SCENARIO_PICK: u32 = 2;
}

/// Mixes the play seed, intent nonce, and draw context into one seed.
pub fn compute_seed(seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // SplitMix64-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
