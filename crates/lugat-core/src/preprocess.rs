use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Typed query -> form compared against case-folded headwords
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Composed form so typed "ü" matches authored "ü"
        text.nfc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
