use super::model::EmotionDetectionModel;
use super::pipeline::{EmotionDetectionPipeline, Prediction};
use crate::error::Result;

/// Anything that can classify one text into an emotion prediction.
///
/// Implemented by [`EmotionDetectionPipeline`]; the seam exists so that
/// [`InteractiveSession`] can be exercised without loading a model.
pub trait EmotionPredictor {
    /// Classify a single text.
    fn predict(&self, text: &str) -> Result<Prediction>;
}

impl<M: EmotionDetectionModel> EmotionPredictor for EmotionDetectionPipeline<M> {
    fn predict(&self, text: &str) -> Result<Prediction> {
        Ok(self.run(text)?.prediction)
    }
}

/// Outcome of a single submit action.
#[derive(Debug, Clone)]
pub enum Submission {
    /// The input was classified.
    Classified(Prediction),
    /// The input was empty or whitespace-only; the predictor was not invoked.
    Empty,
}

/// One user-facing submit/response loop around a predictor.
///
/// Each [`submit`](Self::submit) is independent: no retries, no caching of
/// predictions, no history across submissions. Repeated submits of the same
/// input hit the same already-loaded model and return the same label.
///
/// # Examples
///
/// ```rust,no_run
/// use candle_emotion::emotion::{
///     EmotionDetectionPipelineBuilder, InteractiveSession, ModernBertSize, Submission,
/// };
///
/// # fn main() -> candle_emotion::error::Result<()> {
/// let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
/// let session = InteractiveSession::new(pipeline);
///
/// match session.submit("I am so happy today!!!")? {
///     Submission::Classified(p) => println!("Predicted Emotion: {}", p.label),
///     Submission::Empty => println!("Please enter some text to analyze."),
/// }
/// # Ok(())
/// # }
/// ```
pub struct InteractiveSession<P: EmotionPredictor> {
    predictor: P,
}

impl<P: EmotionPredictor> InteractiveSession<P> {
    /// Wrap a predictor in a session.
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    /// The wrapped predictor.
    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Handle one submit action.
    ///
    /// Input that trims to empty returns [`Submission::Empty`] without
    /// touching the predictor; everything else is classified.
    pub fn submit(&self, raw: &str) -> Result<Submission> {
        if raw.trim().is_empty() {
            return Ok(Submission::Empty);
        }
        Ok(Submission::Classified(self.predictor.predict(raw)?))
    }
}
