//! Deterministic pseudo-randomness for quote selection.
//!
//! Every "random-looking" choice in the revelation pipeline must reproduce
//! byte-identically from the input data, so repeated report views and
//! regression tests see stable text. A general-purpose random source cannot
//! guarantee that across library upgrades, so the pipeline seeds a small
//! xorshift generator from an FNV-1a hash of input-derived strings.

/// FNV-1a 64-bit hash.
///
/// # Example
///
/// ```
/// use life_clock_engine::insight::rng::fnv1a_64;
///
/// // Stable across calls and platforms.
/// assert_eq!(fnv1a_64("0|The Origins Code"), fnv1a_64("0|The Origins Code"));
/// assert_ne!(fnv1a_64("a"), fnv1a_64("b"));
/// ```
#[inline]
pub fn fnv1a_64(input: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Xorshift64 generator seeded from input data.
///
/// Not cryptographic and not meant to be; the only requirement is that the
/// same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Create a generator from a seed. A zero seed is remapped to a fixed
    /// nonzero constant because xorshift has a fixed point at zero.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
        }
    }

    /// Seed from a string via FNV-1a.
    #[inline]
    pub fn from_str_seed(seed: &str) -> Self {
        Self::new(fnv1a_64(seed))
    }

    /// Next raw value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-enough index in `0..bound`. `bound` must be nonzero.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index bound must be nonzero");
        (self.next_u64() % bound as u64) as usize
    }

    /// Fisher–Yates shuffle driven by this generator.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// A shuffled index permutation of `0..len`.
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        self.shuffle(&mut indices);
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_vector() {
        // FNV-1a 64 of the empty string is the offset basis.
        assert_eq!(fnv1a_64(""), 0xcbf2_9ce4_8422_2325);
        // Published vector: "a" hashes to 0xaf63dc4c8601ec8c.
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_sequence_is_deterministic() {
        let mut a = XorShift64::new(12345);
        let mut b = XorShift64::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = XorShift64::new(0);
        // A zero state would be stuck at zero forever.
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = XorShift64::from_str_seed("bounds");
        for _ in 0..1000 {
            assert!(rng.next_index(7) < 7);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = XorShift64::from_str_seed("shuffle");
        let mut items: Vec<usize> = (0..47).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..47).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let perm_a = XorShift64::from_str_seed("sig").permutation(47);
        let perm_b = XorShift64::from_str_seed("sig").permutation(47);
        assert_eq!(perm_a, perm_b);

        let perm_c = XorShift64::from_str_seed("other-sig").permutation(47);
        assert_ne!(perm_a, perm_c);
    }
}
