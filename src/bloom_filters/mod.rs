mod base;
mod config;
mod hashing;
mod word_bloom_filter;

pub use self::base::Filter;
pub use self::config::FilterConfig;
pub use self::hashing::{fnv1_64, HashDerivation};
pub use self::word_bloom_filter::WordBloomFilter;
