use super::model::EmotionDetectionModel;
use crate::error::{PipelineError, Result};
use crate::pipelines::stats::PipelineStats;
use crate::text::TextNormalizer;
use tokenizers::Tokenizer;

// ============ Output types ============

/// An emotion prediction with label and confidence score.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The predicted emotion (e.g., "happy", "sad", "angry", "love", "fear").
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Single-text output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Emotion prediction.
    pub prediction: Prediction,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult {
    /// Input text (raw, before normalization).
    pub text: String,
    /// Prediction or error for this input.
    pub prediction: Result<Prediction>,
}

/// Batch output from `run()`.
#[derive(Debug)]
pub struct BatchOutput {
    /// Results for each input.
    pub results: Vec<BatchResult>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Input trait for type-based dispatch ============

#[doc(hidden)]
pub trait EmotionInput<'a> {
    /// Output type for `.run()`.
    type Output;

    #[doc(hidden)]
    fn into_texts(self) -> Vec<&'a str>;
    #[doc(hidden)]
    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output>;
}

impl<'a> EmotionInput<'a> for &'a str {
    type Output = Output;

    fn into_texts(self) -> Vec<&'a str> {
        vec![self]
    }

    fn convert_output(
        _texts: Vec<&'a str>,
        mut predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let prediction = predictions
            .pop()
            .ok_or_else(|| PipelineError::Unexpected("No predictions returned".into()))??;
        Ok(Output { prediction, stats })
    }
}

impl<'a> EmotionInput<'a> for &'a [&'a str] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let results = texts
            .into_iter()
            .zip(predictions)
            .map(|(text, prediction)| BatchResult {
                text: text.to_string(),
                prediction,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

impl<'a, const N: usize> EmotionInput<'a> for &'a [&'a str; N] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.as_slice().to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Result<Prediction>>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let results = texts
            .into_iter()
            .zip(predictions)
            .map(|(text, prediction)| BatchResult {
                text: text.to_string(),
                prediction,
            })
            .collect();
        Ok(BatchOutput { results, stats })
    }
}

// ============ Pipeline ============

/// Classifies the emotion of a text.
///
/// Construct with [`EmotionDetectionPipelineBuilder`](super::EmotionDetectionPipelineBuilder).
///
/// Every input is normalized (stopwords, punctuation and special characters
/// removed) before it reaches the model. Empty or whitespace-only input is
/// rejected with [`PipelineError::InvalidInput`] and never reaches the model.
///
/// # Examples
///
/// ```rust,no_run
/// # use candle_emotion::emotion::{EmotionDetectionPipelineBuilder, ModernBertSize};
/// # fn main() -> candle_emotion::error::Result<()> {
/// let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
///
/// // Single text - direct access
/// let output = pipeline.run("I am so happy today!!!")?;
/// println!("{}: {:.2}", output.prediction.label, output.prediction.score);
///
/// // Batch - results include input text
/// let output = pipeline.run(&["What a lovely surprise!", "I miss you so much."])?;
/// for r in output.results {
///     println!("{} → {}", r.text, r.prediction?.label);
/// }
/// # Ok(())
/// # }
/// ```
pub struct EmotionDetectionPipeline<M: EmotionDetectionModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) normalizer: TextNormalizer,
}

impl<M: EmotionDetectionModel> EmotionDetectionPipeline<M> {
    /// Detect the emotion of text.
    ///
    /// Single input → [`Output`], batch → [`BatchOutput`]. Whitespace-only
    /// input yields [`PipelineError::InvalidInput`] (per item, for batches).
    pub fn run<'a, I: EmotionInput<'a>>(&self, input: I) -> Result<I::Output> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        // Normalize up front; whitespace-only raw input is rejected here and
        // never reaches the model.
        let mut slots: Vec<Option<Result<Prediction>>> = Vec::with_capacity(item_count);
        let mut clean_texts: Vec<String> = Vec::new();
        let mut valid_indices: Vec<usize> = Vec::new();

        for (i, raw) in texts.iter().enumerate() {
            if raw.trim().is_empty() {
                slots.push(Some(Err(PipelineError::InvalidInput(
                    "Input is empty or whitespace-only; nothing to classify".into(),
                ))));
            } else {
                slots.push(None);
                clean_texts.push(self.normalizer.normalize(raw));
                valid_indices.push(i);
            }
        }

        if !valid_indices.is_empty() {
            let clean_refs: Vec<&str> = clean_texts.iter().map(String::as_str).collect();
            let raw_results = self
                .model
                .predict_with_score_batch(&self.tokenizer, &clean_refs)?;

            for (idx, result) in valid_indices.into_iter().zip(raw_results) {
                slots[idx] = Some(result.map(|r| Prediction {
                    label: r.label,
                    score: r.score,
                }));
            }
        }

        let predictions: Vec<Result<Prediction>> = slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(PipelineError::Unexpected(
                        "Model returned no predictions".into(),
                    ))
                })
            })
            .collect();

        I::convert_output(texts, predictions, stats_builder.finish(item_count))
    }

    /// The closed label set of the loaded model, in id order.
    pub fn labels(&self) -> Vec<String> {
        self.model.labels()
    }

    /// The normalizer applied to every input.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
