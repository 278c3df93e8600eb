//! Text normalization.
//!
//! Raw input is cleaned before it ever reaches a classifier: stopwords,
//! punctuation and special characters are removed, in that order.
//!
//! ```rust
//! use candle_emotion::text::TextNormalizer;
//!
//! let normalizer = TextNormalizer::default();
//! let clean = normalizer.normalize("I am so happy today!!!");
//! assert!(clean.contains("happy"));
//! assert!(!clean.contains('!'));
//! ```

// ============ Internal API ============

pub(crate) mod normalize;
pub(crate) mod stopwords;

// ============ Public API ============

pub use normalize::TextNormalizer;
pub use stopwords::StopwordFilter;
