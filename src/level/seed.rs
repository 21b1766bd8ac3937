//! Level seeding
//!
//! Course names are hashed with 64-bit FNV-1a. The hash is fixed and
//! documented so a name maps to the same seed on every run, platform and
//! compiler version (`std`'s `DefaultHasher` makes no such promise).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes of `s`
pub const fn fnv1a_64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Seed derived from a level name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelSeed(pub u64);

impl LevelSeed {
    pub fn from_name(name: &str) -> Self {
        Self(fnv1a_64(name))
    }

    /// Fresh generator for one generation pass
    pub fn to_rng(self) -> Pcg32 {
        Pcg32::seed_from_u64(self.0)
    }
}

impl From<&str> for LevelSeed {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
