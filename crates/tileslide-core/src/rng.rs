/// Small self-contained PRNG used for scrambling.
///
/// Shuffle quality, not cryptography, is the requirement here, so a
/// splitmix64 step is plenty. Seedable for reproducible tests.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create an RNG seeded from the operating system.
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still gives distinct streams.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create an RNG with a fixed seed, for deterministic scrambles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(0x9e3779b97f4a7c15),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // splitmix64
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform-ish value in `[0, bound)`. `bound` must be nonzero.
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Fisher-Yates shuffle: walk from the last index down to 1, swapping
    /// each element with a random index at or below it.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_outputs_a_permutation() {
        let mut rng = SimpleRng::with_seed(7);
        for len in [0usize, 1, 2, 5, 16, 100] {
            let mut values: Vec<usize> = (0..len).collect();
            rng.shuffle(&mut values);

            let mut sorted = values.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..len).collect::<Vec<_>>(), "length {}", len);
        }
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = SimpleRng::with_seed(42);
        let mut b = SimpleRng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::with_seed(1);
        let mut b = SimpleRng::with_seed(2);
        let left: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let right: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn next_usize_stays_in_bounds() {
        let mut rng = SimpleRng::with_seed(9);
        for _ in 0..1000 {
            assert!(rng.next_usize(7) < 7);
        }
    }
}
