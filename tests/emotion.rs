#![cfg(feature = "cuda")]

use candle_emotion::emotion::{
    EmotionDetectionPipelineBuilder, InteractiveSession, ModernBertSize, Submission,
};
use candle_emotion::error::{PipelineError, Result};

#[test]
fn emotion_basic() -> Result<()> {
    let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let labels = pipeline.labels();
    assert!(!labels.is_empty());

    let output = pipeline.run("I am so happy today!!!")?;
    assert!(labels.contains(&output.prediction.label));
    assert!(output.prediction.score >= 0.0 && output.prediction.score <= 1.0);
    Ok(())
}

#[test]
fn emotion_rejects_whitespace_input() -> Result<()> {
    let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let err = pipeline.run("   ").unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
    Ok(())
}

#[test]
fn emotion_batch_marks_empty_items_only() -> Result<()> {
    let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;

    let texts: &[&str] = &["I miss my family so much.", "  ", "What a wonderful day!"];
    let output = pipeline.run(texts)?;
    assert_eq!(output.results.len(), 3);

    assert!(output.results[0].prediction.is_ok());
    assert!(matches!(
        output.results[1].prediction,
        Err(PipelineError::InvalidInput(_))
    ));
    assert!(output.results[2].prediction.is_ok());
    Ok(())
}

#[test]
fn repeated_submits_reuse_the_loaded_model() -> Result<()> {
    let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base)
        .cuda(0)
        .build()?;
    let session = InteractiveSession::new(pipeline);

    let first = match session.submit("I am so happy today!!!")? {
        Submission::Classified(p) => p.label,
        Submission::Empty => panic!("non-empty input rejected"),
    };

    for _ in 0..2 {
        match session.submit("I am so happy today!!!")? {
            Submission::Classified(p) => assert_eq!(p.label, first),
            Submission::Empty => panic!("non-empty input rejected"),
        }
    }

    Ok(())
}
