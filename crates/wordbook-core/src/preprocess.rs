use unicode_normalization::UnicodeNormalization;

/// Turns raw user or clipboard input into a word key
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        // NFKC folds full-width and compatibility forms
        let text: String = text.nfkc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

pub fn normalize_word(text: &str) -> String {
    DefaultPreprocessor.process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize_word("  look\r\n  up \t"), "look up");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn folds_full_width_letters() {
        assert_eq!(normalize_word("ａｐｐｌｅ"), "apple");
    }
}
