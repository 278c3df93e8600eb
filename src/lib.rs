//! Emotion detection from text, powered by [Candle](https://github.com/huggingface/candle).
//!
//! A sentence goes through a text normalizer (stopword, punctuation and
//! special-character removal) and a pre-trained ModernBERT classifier, and
//! comes back as an emotion label (happy, sad, angry, love, fear, ...).
//! The label set is a property of the model checkpoint, not of this crate.
//!
//! ```rust,no_run
//! use candle_emotion::emotion::{EmotionDetectionPipelineBuilder, ModernBertSize};
//!
//! # fn main() -> candle_emotion::error::Result<()> {
//! let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//!
//! let output = pipeline.run("I am so happy today!!!")?;
//! println!("emotion: {} ({:.2})", output.prediction.label, output.prediction.score);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod text;

pub use pipelines::emotion;
