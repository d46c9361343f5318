use thiserror::Error;

/// Errors raised while configuring a filter.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("word count must be at least 1")]
    ZeroWordCount,

    #[error("hash count must be at least 1")]
    ZeroHashCount,

    #[error("filter of {words} words does not fit in memory")]
    TooLarge { words: u64 },
}
