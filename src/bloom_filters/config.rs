use crate::bloom_filters::{HashDerivation, WordBloomFilter};
use crate::error::FilterError;

/// Construction parameters of a [`WordBloomFilter`].
///
/// ```
/// use word_bloom::{FilterConfig, HashDerivation};
///
/// let filter = FilterConfig::new(200, 7)
///     .derivation(HashDerivation::Indexed)
///     .build()
///     .unwrap();
/// assert_eq!(filter.word_count(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// number of 64-bit words
    pub word_count: u64,
    /// number of hash functions
    pub hash_count: u64,
    pub derivation: HashDerivation,
}

impl FilterConfig {
    pub fn new(word_count: u64, hash_count: u64) -> Self {
        Self {
            word_count,
            hash_count,
            derivation: HashDerivation::default(),
        }
    }

    pub fn derivation(mut self, derivation: HashDerivation) -> Self {
        self.derivation = derivation;
        self
    }

    /// Checks the parameters and returns the number of addressable bits.
    pub fn validate(&self) -> Result<usize, FilterError> {
        if self.word_count == 0 {
            return Err(FilterError::ZeroWordCount);
        }
        if self.hash_count == 0 {
            return Err(FilterError::ZeroHashCount);
        }
        self.word_count
            .checked_mul(64)
            .and_then(|bits| usize::try_from(bits).ok())
            .ok_or(FilterError::TooLarge {
                words: self.word_count,
            })
    }

    pub fn build(self) -> Result<WordBloomFilter, FilterError> {
        WordBloomFilter::from_config(self)
    }
}
