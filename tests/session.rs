use candle_emotion::emotion::{EmotionPredictor, InteractiveSession, Prediction, Submission};
use candle_emotion::error::Result;
use std::cell::Cell;

/// Deterministic stand-in predictor that counts how often it is invoked.
struct StubPredictor {
    label: &'static str,
    calls: Cell<usize>,
}

impl StubPredictor {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            calls: Cell::new(0),
        }
    }
}

impl EmotionPredictor for StubPredictor {
    fn predict(&self, _text: &str) -> Result<Prediction> {
        self.calls.set(self.calls.get() + 1);
        Ok(Prediction {
            label: self.label.to_string(),
            score: 0.92,
        })
    }
}

#[test]
fn whitespace_only_input_never_reaches_the_predictor() {
    let session = InteractiveSession::new(StubPredictor::new("happy"));

    for input in ["", "   ", "\t", "\n\n", " \t \n "] {
        match session.submit(input).unwrap() {
            Submission::Empty => {}
            Submission::Classified(p) => panic!("classified {input:?} as {}", p.label),
        }
    }

    assert_eq!(session.predictor().calls.get(), 0);
}

#[test]
fn non_empty_input_is_classified() {
    let session = InteractiveSession::new(StubPredictor::new("happy"));

    match session.submit("I am so happy today!!!").unwrap() {
        Submission::Classified(p) => {
            assert_eq!(p.label, "happy");
            assert!(p.score > 0.0 && p.score <= 1.0);
        }
        Submission::Empty => panic!("non-empty input rejected"),
    }
}

#[test]
fn repeated_submits_are_deterministic_and_uncached() {
    let session = InteractiveSession::new(StubPredictor::new("love"));

    let mut labels = Vec::new();
    for _ in 0..3 {
        match session.submit("I adore this little dog").unwrap() {
            Submission::Classified(p) => labels.push(p.label),
            Submission::Empty => panic!("non-empty input rejected"),
        }
    }

    assert!(labels.iter().all(|l| l == "love"));

    // No caching of predictions: every submit goes back to the predictor.
    assert_eq!(session.predictor().calls.get(), 3);
}

#[test]
fn input_surrounded_by_whitespace_is_still_classified() {
    let session = InteractiveSession::new(StubPredictor::new("fear"));

    match session.submit("  what was that noise \n").unwrap() {
        Submission::Classified(p) => assert_eq!(p.label, "fear"),
        Submission::Empty => panic!("input with surrounding whitespace rejected"),
    }
}
