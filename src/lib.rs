//! A fixed-size bloom filter addressed as an array of 64-bit words.
//!
//! ```
//! use word_bloom::{Filter, WordBloomFilter};
//!
//! let mut bf = WordBloomFilter::new(3, 5).unwrap();
//! assert!(!bf.member(&5));
//! assert!(!bf.set(&5));
//! assert!(bf.member(&5));
//! assert!(bf.set(&5));
//! ```

mod bloom_filters;
mod error;

pub use bloom_filters::{fnv1_64, Filter, FilterConfig, HashDerivation, WordBloomFilter};
pub use error::FilterError;
