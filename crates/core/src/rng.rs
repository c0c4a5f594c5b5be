//! RNG module - deterministic seeding
//!
//! Playouts must be reproducible from a single number, so games and test
//! doubles draw from this small LCG instead of an OS-backed generator. The
//! sampler also uses it as its seeder: one seed yields a whole batch of
//! playout seeds.

use std::time::{SystemTime, UNIX_EPOCH};

/// Mixed into every seed so that small seeds (0 included) start far apart.
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses Knuth's MMIX constants over a 64-bit state
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed. Distinct seeds give distinct streams.
    pub fn new(seed: u64) -> Self {
        Self::from_state(seed ^ SEED_MIX)
    }

    /// Resume from a raw state taken with [`SimpleRng::state`]
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Seed from the wall clock (non-reproducible batches)
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u64
    pub fn next_u64(&mut self) -> u64 {
        // LCG formula: (a * state + c) mod 2^64
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Generate next random u32 (upper half, the better-mixed bits)
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Pick one element of a non-empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }

    /// Current state (feed back into [`SimpleRng::from_state`] to resume the sequence)
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
