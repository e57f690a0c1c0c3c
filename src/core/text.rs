use once_cell::sync::Lazy;
use regex::Regex;

/// A word followed by terminal punctuation, matched at the start of the token
static END_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+[:.?!*\\-]+").expect("end word pattern is valid")
});

/// Characters scraped phrases never keep
static SCRAPE_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[(%~`<>#:@/^*&$\t?=|){}\[\]"\n]"#).expect("noise pattern is valid")
});

/// Sentence punctuation glued to the next word
static MISSING_SPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[?!.]([a-zA-Z])").expect("spacing pattern is valid")
});

/// English stop words dropped before classification
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now",
];

/// True when the token ends a sentence, e.g. `fox.` or `why?!`
pub fn is_end_word(word: &str) -> bool {
    END_WORD.is_match(word)
}

/// Normalise a raw phrase before it is fed to the generator
///
/// Drops brackets, quotes and markup characters, then makes sure sentence
/// punctuation is followed by a space: `"done.Next (maybe)"` becomes
/// `"done. Next maybe"`.
pub fn clean_phrase(phrase: &str) -> String {
    let stripped = SCRAPE_NOISE.replace_all(phrase, "");
    MISSING_SPACE.replace_all(&stripped, ". ${1}").into_owned()
}

/// Strip ASCII punctuation, lower-case and drop stop words
pub fn clean_words(sentence: &str) -> Vec<String> {
    let stripped: String = sentence
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_lowercase();

    stripped
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_words() {
        assert!(is_end_word("fox."));
        assert!(is_end_word("really?!"));
        assert!(is_end_word("list:"));
        assert!(is_end_word("wait-"));
        assert!(!is_end_word("fox"));
        assert!(!is_end_word("."));
        assert!(!is_end_word("\"quoted.\""));
    }

    #[test]
    fn test_clean_phrase() {
        assert_eq!(clean_phrase("done.Next (maybe)"), "done. Next maybe");
        assert_eq!(
            clean_phrase("[my \"cat\"] wrote {rust}!Really: <b>yes</b>"),
            "my cat wrote rust. Really byesb"
        );
        assert_eq!(clean_phrase("already clean."), "already clean.");
        assert_eq!(clean_phrase("what?\t"), "what");
        assert!(clean_phrase("()[]{}").is_empty());
    }

    #[test]
    fn test_clean_words() {
        assert_eq!(
            clean_words("I put a Tuple in Firebase!"),
            vec!["put", "tuple", "firebase"]
        );
        assert!(clean_words("").is_empty());
    }
}
