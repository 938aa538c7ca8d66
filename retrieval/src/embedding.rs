/// Number of hash buckets in a fingerprint.
pub const DIMENSIONS: usize = 100;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Bag-of-words sketch of a text: token counts folded into `DIMENSIONS` buckets.
///
/// A fingerprint is either all zero (the text had no tokens) or has unit
/// euclidean norm. Distinct tokens whose hashes collide share a bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct Fingerprint([f64; DIMENSIONS]);

impl Fingerprint {
    pub fn zero() -> Self {
        Fingerprint([0.0; DIMENSIONS])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity between two fingerprints, since both sides are unit or zero.
    pub fn dot(&self, other: &Fingerprint) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Fingerprint::zero()
    }
}

/// Tokens are maximal runs of non-whitespace, kept verbatim (no case folding,
/// punctuation stays attached).
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

pub fn bucket(token: &str) -> usize {
    (fnv1a(token.as_bytes()) % DIMENSIONS as u64) as usize
}

pub fn embed(text: &str) -> Fingerprint {
    let mut buckets = [0.0_f64; DIMENSIONS];
    for token in tokenize(text) {
        buckets[bucket(token)] += 1.0;
    }

    let fingerprint = Fingerprint(buckets);
    let norm = fingerprint.norm();
    if norm == 0.0 {
        return fingerprint;
    }

    let Fingerprint(mut buckets) = fingerprint;
    for value in buckets.iter_mut() {
        *value /= norm;
    }
    Fingerprint(buckets)
}

/// 64-bit FNV-1a. Stable across processes and platforms, unlike the std hasher.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
