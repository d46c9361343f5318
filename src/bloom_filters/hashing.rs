use std::fmt::Display;
use xxhash_rust::xxh3::xxh3_64_with_seed;

const FNV_OFFSET: u64 = 0xcbf29ce4_84222325;
const FNV_PRIME: u64 = 0x00000100_000001b3;

/// 64-bit FNV-1: multiply by the prime, then xor the byte in.
pub fn fnv1_64(data: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    for &byte in data {
        h = h.wrapping_mul(FNV_PRIME);
        h ^= u64::from(byte);
    }
    h
}

/// How the k hash values of a member are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashDerivation {
    /// Hashes `==k==member==` k times. Every derived hash is identical, so the
    /// filter behaves as if k were 1. Bit compatible with the reference filter.
    #[default]
    Repeated,
    /// Hashes `==i==member==` for each iteration i.
    Indexed,
    /// xxh3 over the `Indexed` text, seeded with the iteration index.
    Xxh3Seeded,
}

impl HashDerivation {
    /// Returns exactly `k` hashes for `member`.
    pub fn derive_hashes<T: Display + ?Sized>(self, member: &T, k: u64) -> Vec<u64> {
        match self {
            HashDerivation::Repeated => {
                let input = format!("=={k}=={member}==");
                (0..k).map(|_| fnv1_64(input.as_bytes())).collect()
            }
            HashDerivation::Indexed => {
                let repr = member.to_string();
                (0..k)
                    .map(|i| fnv1_64(indexed_input(i, &repr).as_bytes()))
                    .collect()
            }
            HashDerivation::Xxh3Seeded => {
                let repr = member.to_string();
                (0..k)
                    .map(|i| xxh3_64_with_seed(indexed_input(i, &repr).as_bytes(), i))
                    .collect()
            }
        }
    }
}

// Short inputs (a bare decimal) take xxh3's weakest mixing path, so the
// framed text is hashed instead.
fn indexed_input(i: u64, repr: &str) -> String {
    format!("=={i}=={repr}==")
}
