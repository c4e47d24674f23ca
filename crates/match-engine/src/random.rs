//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for the opponent's draws and the thinking delay.
//! Uses a simple but effective xorshift algorithm; no cryptographic
//! strength is needed here.

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // splitmix64 finalizer so nearby seeds diverge and 0 is usable
        let mut z = seed.wrapping_add(0x9e3779b97f4a7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^= z >> 31;

        // xorshift has a fixed point at zero
        let state = if z == 0 { 0x2545f4914f6cdd1d } else { z };

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Derive an independent stream, e.g. one for opponent moves and one for delays
    pub fn fork(&self, stream: u8) -> Self {
        Self::new(self.state ^ (stream as u64 + 1).wrapping_mul(0x517cc1b727220a95))
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max), uniformly
    ///
    /// Draws falling in the ragged tail of the u32 range are rejected so
    /// every outcome has exactly the same weight.
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % max;
            }
        }
    }

    /// Generate a value in range [lo, hi], uniformly. Bounds may be given in either order.
    pub fn next_between(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        match (hi - lo).checked_add(1) {
            Some(span) => lo + self.next_below(span),
            None => self.next_u32(),
        }
    }
}
