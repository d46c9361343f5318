use crate::bloom_filters::{Filter, FilterConfig, HashDerivation};
use crate::error::FilterError;
use bit_vec::BitVec;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::{debug, trace};

/// number of never-inserted members probed by the estimate
const ESTIMATE_SAMPLE: u64 = 100_000;

/// Maps a hash to its (word, bit) coordinate: the bits above the low six
/// select the word modulo `n`, the low six select the bit within it.
fn hash_to_bits(h: u64, n: u64) -> (u64, u64) {
    ((h / 64) % n, h % 64)
}

fn zeroed(bits: usize) -> BitVec<u64> {
    let mut storage = BitVec::default();
    storage.grow(bits, false);
    storage
}

/// Insert-only bloom filter over `n` 64-bit words probed by `k` hashes.
///
/// Not synchronized; share it across threads behind a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBloomFilter {
    /// number of 64-bit words
    n: u64,
    /// number of hash functions
    k: u64,
    derivation: HashDerivation,

    storage: BitVec<u64>,
}

impl WordBloomFilter {
    /// Empty filter using the [`HashDerivation::Repeated`] hashes.
    pub fn new(n: u64, k: u64) -> Result<Self, FilterError> {
        FilterConfig::new(n, k).build()
    }

    pub fn with_derivation(
        n: u64,
        k: u64,
        derivation: HashDerivation,
    ) -> Result<Self, FilterError> {
        FilterConfig::new(n, k).derivation(derivation).build()
    }

    pub fn from_config(config: FilterConfig) -> Result<Self, FilterError> {
        let bits = config.validate()?;
        let storage = zeroed(bits);
        debug!(
            words = config.word_count,
            hashes = config.hash_count,
            derivation = ?config.derivation,
            "created bloom filter"
        );
        Ok(Self {
            n: config.word_count,
            k: config.hash_count,
            derivation: config.derivation,
            storage,
        })
    }

    pub fn word_count(&self) -> u64 {
        self.n
    }

    pub fn derivation(&self) -> HashDerivation {
        self.derivation
    }

    /// number of bits currently set
    pub fn count_ones(&self) -> u64 {
        self.storage
            .storage()
            .iter()
            .map(|word| u64::from(word.count_ones()))
            .sum()
    }

    /// Measures the false positive rate empirically: a fresh filter with the
    /// same parameters gets the integers `0..inserted`, then the following
    /// 100000 integers (fewer near `u64::MAX`) are probed.
    pub fn false_positive_probability_estimate(&self, inserted: u64) -> f64 {
        let mut probe = Self {
            n: self.n,
            k: self.k,
            derivation: self.derivation,
            storage: zeroed(self.storage.len()),
        };
        for i in 0..inserted {
            probe.set(&i);
        }

        let rate = probe.member_rate(inserted);
        debug!(inserted, rate, "simulated false positive rate");
        rate
    }

    // share of the up to 100000 integers from `start` reported as members
    fn member_rate(&self, start: u64) -> f64 {
        let end = start.saturating_add(ESTIMATE_SAMPLE);
        let probed = (end - start).max(1);
        let hits = (start..end).filter(|i| self.member(i)).count();
        hits as f64 / probed as f64
    }

    /// Writes the parameters and every word, most significant bit first.
    pub fn dump_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "words\t: {}", self.n)?;
        writeln!(out, "hashes\t: {}", self.k)?;
        for (i, word) in self.storage.storage().iter().enumerate() {
            writeln!(out, "{i}\t{word:064b}")?;
        }
        Ok(())
    }

    pub fn dump(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.dump_to(&mut out)
    }

    fn bit_index(&self, h: u64) -> usize {
        let (word, bit) = hash_to_bits(h, self.n);
        (word * 64 + bit) as usize
    }

    // true if the addressed bit is set
    fn test_bit(&self, h: u64) -> bool {
        self.storage.get(self.bit_index(h)) == Some(true)
    }

    // sets the addressed bit, returns true if it was already set
    fn set_bit(&mut self, h: u64) -> bool {
        let idx = self.bit_index(h);
        trace!(hash = h, idx, "set bit");
        if self.storage.get(idx) == Some(true) {
            return true;
        }
        self.storage.set(idx, true);
        false
    }
}

impl Filter for WordBloomFilter {
    fn set<T: Display + ?Sized>(&mut self, member: &T) -> bool {
        let mut already_set = true;
        for h in self.derivation.derive_hashes(member, self.k) {
            already_set &= self.set_bit(h);
        }
        already_set
    }

    fn member<T: Display + ?Sized>(&self, member: &T) -> bool {
        self.derivation
            .derive_hashes(member, self.k)
            .into_iter()
            .all(|h| self.test_bit(h))
    }

    fn get_size(&self) -> usize {
        self.storage.len()
    }

    fn hash_count(&self) -> u64 {
        self.k
    }
}
