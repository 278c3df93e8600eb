//! Emotion detection pipeline.
//!
//! Classify text into an emotion label (e.g., `happy`, `sad`, `angry`,
//! `love`, `fear`). The exact label set comes from the loaded model
//! checkpoint. Returns both the predicted label and a confidence score.
//!
//! Input is normalized before classification: stopwords, punctuation and
//! special characters are removed, in that order. Empty or whitespace-only
//! input never reaches the model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use candle_emotion::emotion::{EmotionDetectionPipelineBuilder, ModernBertSize};
//!
//! # fn main() -> candle_emotion::error::Result<()> {
//! let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//!
//! // Single text - direct access
//! let output = pipeline.run("I am so happy today!!!")?;
//! println!("emotion: {} (confidence: {:.2})", output.prediction.label, output.prediction.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Batch Inference
//!
//! Classify multiple texts at once (returns `BatchOutput`):
//!
//! ```rust,no_run
//! # use candle_emotion::emotion::{EmotionDetectionPipelineBuilder, ModernBertSize};
//! # fn main() -> candle_emotion::error::Result<()> {
//! # let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//! let texts = &[
//!     "What a lovely surprise, thank you!",
//!     "I can't stop crying.",
//!     "Don't you dare touch my things again.",
//! ];
//!
//! let output = pipeline.run(texts)?;
//!
//! for r in output.results {
//!     let p = r.prediction?;
//!     println!("{}: {} ({:.2})", r.text, p.label, p.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Interactive Use
//!
//! [`InteractiveSession`] wraps a pipeline in a submit/response loop that
//! rejects empty input with an inline error instead of a prediction. See
//! `demos/emotion_cli.rs` for a console front-end.
//!
//! # Supported Models
//!
//! For now only ModernBERT emotion checkpoints are supported.
//!
//! | Model | Sizes | Builder Method |
//! |-------|-------|----------------|
//! | ModernBERT | `Base`, `Large` | [`EmotionDetectionPipelineBuilder::modernbert`] |

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;
pub(crate) mod session;

// ============ Public API ============

pub use crate::models::ModernBertSize;
pub use crate::pipelines::stats::PipelineStats;
pub use builder::EmotionDetectionPipelineBuilder;
pub use pipeline::{BatchOutput, BatchResult, EmotionDetectionPipeline, Output, Prediction};
pub use session::{EmotionPredictor, InteractiveSession, Submission};

#[doc(hidden)]
pub use pipeline::EmotionInput;

/// Only for generic annotations. Use [`EmotionDetectionPipelineBuilder::modernbert`].
pub type EmotionModernBert = crate::models::modernbert::EmotionModernBertModel;
