use candle_emotion::text::{StopwordFilter, TextNormalizer};

#[test]
fn clean_text_has_no_punctuation() {
    let normalizer = TextNormalizer::default();

    for input in [
        "I am so happy today!!!",
        "wait... what?!",
        "semi;colons:and(brackets)[everywhere]{really}",
        "quotes \"around\" 'words'",
    ] {
        let clean = normalizer.normalize(input);
        assert!(
            !clean.chars().any(|c| c.is_ascii_punctuation()),
            "punctuation survived in {clean:?}"
        );
    }
}

#[test]
fn clean_text_has_no_special_characters() {
    let normalizer = TextNormalizer::default();

    let clean = normalizer.normalize("feeling great \u{1F600} — 100% of the time");
    assert!(
        clean
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace()),
        "special characters survived in {clean:?}"
    );
}

#[test]
fn clean_text_has_no_stopwords() {
    let normalizer = TextNormalizer::default();
    let stopwords = normalizer.stopwords().clone();

    let clean = normalizer.normalize("I am so happy that the sun is out today");
    for token in clean.split_whitespace() {
        assert!(
            !stopwords.is_stopword(token),
            "stopword {token:?} survived in {clean:?}"
        );
    }
    assert!(clean.contains("happy"));
}

#[test]
fn normalization_is_idempotent() {
    let normalizer = TextNormalizer::default();

    for input in [
        "I am so happy today!!!",
        "a. fox, the lazy dog!",
        "   ",
        "",
        "nothing to remove here apparently",
        "ALL CAPS AND the SHOUTING!!!",
    ] {
        let once = normalizer.normalize(input);
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn empty_and_whitespace_input_yield_empty_output() {
    let normalizer = TextNormalizer::default();

    assert_eq!(normalizer.normalize(""), "");
    assert_eq!(normalizer.normalize("   \t\n  "), "");
    // Punctuation-only input also cleans down to nothing.
    assert_eq!(normalizer.normalize("!!! ??? ..."), "");
}

#[test]
fn custom_stopword_filter_is_honored() {
    let normalizer = TextNormalizer::new(StopwordFilter::from_list(&["happy"]));

    let clean = normalizer.normalize("so happy right now");
    assert!(!clean.contains("happy"));
    assert!(clean.contains("now"));
}

#[test]
fn preserves_case_of_kept_words() {
    let normalizer = TextNormalizer::default();

    let clean = normalizer.normalize("The Paris trip was AMAZING!");
    assert!(clean.contains("Paris"));
    assert!(clean.contains("AMAZING"));
}
