//! Seed strings to deterministic streams.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Build the stream for a seed string.
///
/// The string is folded with 64-bit FNV-1a, which is stable across
/// platforms and releases, so a seed string always names the same sequence.
pub fn stream_from_seed(seed: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(fnv1a(seed.as_bytes()))
}

/// A fresh, non-reproducible seed string drawn from the thread RNG.
pub fn entropy_seed() -> String {
    rand::random::<f64>().to_string()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = stream_from_seed("lichen");
        let mut b = stream_from_seed("lichen");
        for _ in 0..32 {
            assert_eq!(a.random::<f64>(), b.random::<f64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = stream_from_seed("lichen");
        let mut b = stream_from_seed("moss");
        let a: Vec<f64> = (0..4).map(|_| a.random()).collect();
        let b: Vec<f64> = (0..4).map(|_| b.random()).collect();
        assert_ne!(a, b);
    }
}
