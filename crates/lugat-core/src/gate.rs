use lugat_config::input::InputConfig;
use lugat_types::Key;

/// Keystroke veto for the search box
#[derive(Debug, Clone)]
pub struct InputGate {
    extra_letters: Vec<char>,
}

impl InputGate {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            extra_letters: config.extra_letters.chars().collect(),
        }
    }

    /// ASCII letters, whitespace and the configured extra letters
    pub fn accepts_char(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || c.is_whitespace() || self.extra_letters.contains(&c)
    }

    pub fn accepts(&self, key: Key) -> bool {
        match key {
            Key::Enter => true,
            Key::Char(c) => self.accepts_char(c),
        }
    }
}

impl Default for InputGate {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_space() {
        let gate = InputGate::default();
        for c in ['a', 'Z', ' ', '\t'] {
            assert!(gate.accepts_char(c), "{c:?}");
        }
    }

    #[test]
    fn accepts_extended_letters() {
        let gate = InputGate::default();
        for c in "çÇðÐýÝöÖþÞüÜğĞıİşŞ".chars() {
            assert!(gate.accepts_char(c), "{c:?}");
        }
    }

    #[test]
    fn rejects_digits_and_symbols() {
        let gate = InputGate::default();
        for c in ['3', '@', '-', '.', '*', 'é'] {
            assert!(!gate.accepts_char(c), "{c:?}");
        }
    }

    #[test]
    fn enter_passes() {
        assert!(InputGate::default().accepts(Key::Enter));
        assert!(!InputGate::default().accepts(Key::Char('3')));
    }
}
