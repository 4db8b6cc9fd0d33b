const TRUE_WORDS: [&str; 5] = ["true", "t", "1", "yes", "y"];
const FALSE_WORDS: [&str; 5] = ["false", "f", "0", "no", "n"];

/// A true/false answer after normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrueFalseAnswer {
    Value(bool),
    Indeterminate,
}

/// A short answer after normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortAnswer {
    Text(String),
    Empty,
}

pub fn normalize_true_false(raw: &str) -> TrueFalseAnswer {
    let word = raw.trim().to_lowercase();
    if TRUE_WORDS.contains(&word.as_str()) {
        TrueFalseAnswer::Value(true)
    } else if FALSE_WORDS.contains(&word.as_str()) {
        TrueFalseAnswer::Value(false)
    } else {
        TrueFalseAnswer::Indeterminate
    }
}

pub fn normalize_short_answer(raw: &str) -> ShortAnswer {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        ShortAnswer::Empty
    } else {
        ShortAnswer::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_false_words_are_case_insensitive() {
        for raw in ["true", "T", "1", "Yes", " y "] {
            assert_eq!(normalize_true_false(raw), TrueFalseAnswer::Value(true), "{raw}");
        }
        for raw in ["FALSE", "f", "0", "No", "n"] {
            assert_eq!(normalize_true_false(raw), TrueFalseAnswer::Value(false), "{raw}");
        }
    }

    #[test]
    fn unknown_true_false_words_are_indeterminate() {
        for raw in ["maybe", "", "yes!", "2"] {
            assert_eq!(normalize_true_false(raw), TrueFalseAnswer::Indeterminate, "{raw}");
        }
    }

    #[test]
    fn short_answer_is_trimmed_and_lowercased() {
        assert_eq!(
            normalize_short_answer("  Kubernetes \n"),
            ShortAnswer::Text("kubernetes".to_string())
        );
        assert_eq!(normalize_short_answer("   "), ShortAnswer::Empty);
        assert_eq!(normalize_short_answer(""), ShortAnswer::Empty);
    }
}
