use crate::error::Result;
use tokenizers::Tokenizer;

/// Raw model output before the pipeline wraps it into a [`Prediction`](super::Prediction).
#[derive(Debug, Clone)]
pub struct RawEmotion {
    pub label: String,
    pub score: f32,
}

/// Seam between the pipeline and a concrete classifier checkpoint.
///
/// The model owns its weights and label map; the tokenizer is passed in by
/// the pipeline. The label set is closed and fixed by the loaded artifact.
pub trait EmotionDetectionModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    fn predict(&self, tokenizer: &Tokenizer, text: &str) -> Result<String>;

    fn predict_with_score(&self, tokenizer: &Tokenizer, text: &str) -> Result<RawEmotion> {
        let label = self.predict(tokenizer, text)?;
        Ok(RawEmotion { label, score: 1.0 })
    }

    fn predict_with_score_batch(
        &self,
        tokenizer: &Tokenizer,
        texts: &[&str],
    ) -> Result<Vec<Result<RawEmotion>>> {
        Ok(texts
            .iter()
            .map(|text| self.predict_with_score(tokenizer, text))
            .collect())
    }

    /// The closed label set of the loaded artifact, in id order.
    fn labels(&self) -> Vec<String>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
