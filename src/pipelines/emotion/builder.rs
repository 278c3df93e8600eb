use super::model::EmotionDetectionModel;
use super::pipeline::EmotionDetectionPipeline;
use crate::error::Result;
use crate::pipelines::cache::ModelOptions;
use crate::pipelines::utils::{BasePipelineBuilder, DeviceRequest, StandardPipelineBuilder};
use crate::text::{StopwordFilter, TextNormalizer};

crate::pipelines::utils::impl_device_methods!(
    EmotionDetectionPipelineBuilder<M: EmotionDetectionModel>
);

/// Builder for creating [`EmotionDetectionPipeline`] instances.
///
/// Use [`Self::modernbert`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use candle_emotion::emotion::{EmotionDetectionPipelineBuilder, ModernBertSize};
/// # fn main() -> candle_emotion::error::Result<()> {
/// let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base)
///     .stopword_language("en")
///     .cuda(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct EmotionDetectionPipelineBuilder<M: EmotionDetectionModel> {
    inner: StandardPipelineBuilder<M::Options>,
    stopwords: StopwordFilter,
}

impl<M: EmotionDetectionModel> EmotionDetectionPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self {
            inner: StandardPipelineBuilder::new(options),
            stopwords: StopwordFilter::default(),
        }
    }

    /// Select the stopword language used by the normalizer (default: English).
    pub fn stopword_language(mut self, language: &str) -> Self {
        self.stopwords = StopwordFilter::new(language);
        self
    }

    /// Add extra words to the normalizer's stopword list.
    pub fn extra_stopwords(mut self, words: &[&str]) -> Self {
        self.stopwords.add_stopwords(words);
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// The model artifact is downloaded (first use) and loaded exactly once
    /// per process; later builds reuse the cached handle.
    ///
    /// # Errors
    ///
    /// Returns an error if model loading or device initialization fails.
    /// This is fatal for the pipeline: there is no degraded mode without a
    /// model.
    pub fn build(self) -> Result<EmotionDetectionPipeline<M>>
    where
        M: Clone + Send + Sync + 'static,
        M::Options: ModelOptions + Clone,
    {
        BasePipelineBuilder::build(self)
    }
}

impl<M: EmotionDetectionModel> BasePipelineBuilder<M> for EmotionDetectionPipelineBuilder<M>
where
    M: Clone + Send + Sync + 'static,
    M::Options: ModelOptions + Clone,
{
    type Model = M;
    type Pipeline = EmotionDetectionPipeline<M>;
    type Options = M::Options;

    fn options(&self) -> &Self::Options {
        &self.inner.options
    }

    fn device_request(&self) -> &DeviceRequest {
        &self.inner.device_request
    }

    fn create_model(options: Self::Options, device: candle_core::Device) -> Result<M> {
        M::new(options, device)
    }

    fn get_tokenizer(options: Self::Options) -> Result<tokenizers::Tokenizer> {
        M::get_tokenizer(options)
    }

    fn construct_pipeline(
        self,
        model: M,
        tokenizer: tokenizers::Tokenizer,
    ) -> Result<Self::Pipeline> {
        Ok(EmotionDetectionPipeline {
            model,
            tokenizer,
            normalizer: TextNormalizer::new(self.stopwords),
        })
    }
}

impl EmotionDetectionPipelineBuilder<super::EmotionModernBert> {
    /// Creates a builder for a ModernBERT emotion detection model.
    pub fn modernbert(size: crate::models::ModernBertSize) -> Self {
        Self::new(size)
    }
}
