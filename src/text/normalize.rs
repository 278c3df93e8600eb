use super::stopwords::StopwordFilter;

/// Cleans raw text before classification.
///
/// Normalization removes stopwords, then ASCII punctuation, then any
/// remaining character that is neither alphanumeric nor whitespace, and
/// collapses runs of whitespace into single spaces. It is total (any string
/// in, a possibly empty string out) and has no side effects.
///
/// A final stopword sweep runs after character removal so that a stopword
/// uncovered by punctuation stripping (`"a."` becomes `a`) is still dropped.
/// This makes normalization idempotent: normalizing already-clean text
/// returns it unchanged.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stopwords: StopwordFilter,
}

impl TextNormalizer {
    /// Create a normalizer using the given stopword filter.
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Normalize raw text into clean text.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.strip_stopwords(text);
        let stripped = strip_punctuation(&stripped);
        let stripped = strip_special_characters(&stripped);
        self.strip_stopwords(&stripped)
    }

    /// The stopword filter in use.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    // A token is matched on its alphanumeric core, so "The." counts as "the".
    fn strip_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|token| {
                let core = token.trim_matches(|c: char| !c.is_alphanumeric());
                core.is_empty() || !self.stopwords.is_stopword(core)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

fn strip_special_characters(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_punctuation_and_specials() {
        let normalizer = TextNormalizer::new(StopwordFilter::empty());

        assert_eq!(normalizer.normalize("wow!!! <great>"), "wow great");
        assert_eq!(normalizer.normalize("50% off... now"), "50 off now");
    }

    #[test]
    fn stopword_core_matching() {
        let normalizer = TextNormalizer::new(StopwordFilter::from_list(&["a", "the"]));

        // "a." matches "a" on its alphanumeric core and is dropped whole.
        assert_eq!(normalizer.normalize("a. fox"), "fox");
        assert_eq!(normalizer.normalize("The fox"), "fox");
    }

    #[test]
    fn whitespace_collapses() {
        let normalizer = TextNormalizer::new(StopwordFilter::empty());

        assert_eq!(normalizer.normalize("  spaced \t out \n text  "), "spaced out text");
    }
}
