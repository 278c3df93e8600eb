use candle_emotion::emotion::{
    EmotionDetectionPipelineBuilder, InteractiveSession, ModernBertSize, Submission,
};
use candle_emotion::error::Result;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    println!("Emotion Detection from Text");
    println!("Enter a sentence to predict its emotion (e.g., happy, sad, angry, love, fear).");
    println!("\nBuilding pipeline...");

    let pipeline = EmotionDetectionPipelineBuilder::modernbert(ModernBertSize::Base).build()?;

    println!("Pipeline built. Labels: {}", pipeline.labels().join(", "));
    println!("Type a sentence and press Enter (Ctrl-D to quit).\n");

    let session = InteractiveSession::new(pipeline);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.submit(&line)? {
            Submission::Classified(p) => {
                println!("Predicted Emotion: {} (confidence: {:.2})", p.label, p.score);
            }
            Submission::Empty => {
                println!("Please enter some text to analyze.");
            }
        }
    }

    Ok(())
}
