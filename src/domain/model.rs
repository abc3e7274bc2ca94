use serde::{Deserialize, Serialize};

pub const DEFAULT_VOWELS: &str = "aeiouy";
pub const DEFAULT_CONSONANTS: &str = "bcdfghjkmnpqrstvwxz";
pub const DEFAULT_NUMERICS: &str = "0123456789";
pub const DEFAULT_DELIMITERS: &str = "-";

pub const DEFAULT_WORDS: usize = 3;
pub const DEFAULT_SYLLABLES: usize = 2;
pub const DEFAULT_NUM_DIGITS: usize = 1;
pub const DEFAULT_UPPER: usize = 1;
pub const DEFAULT_COUNT: usize = 1;

/// Syllables are always consonant-vowel-consonant. Kept as a constant so that
/// nothing has to build a syllable just to learn its width.
pub const SYLLABLE_LENGTH: usize = 3;

/// Everything needed to produce a single passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub words: usize,
    pub syllables: usize,
    pub num_digits: usize,
    pub upper: usize,
    /// Digits may replace any lowercase letter instead of only boundary positions.
    pub all_nums: bool,
    pub vowels: String,
    pub consonants: String,
    pub numerics: String,
    pub delimiters: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS,
            syllables: DEFAULT_SYLLABLES,
            num_digits: DEFAULT_NUM_DIGITS,
            upper: DEFAULT_UPPER,
            all_nums: false,
            vowels: DEFAULT_VOWELS.to_string(),
            consonants: DEFAULT_CONSONANTS.to_string(),
            numerics: DEFAULT_NUMERICS.to_string(),
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }
}

impl GenerationOptions {
    pub fn uses_delimiters(&self) -> bool {
        !self.delimiters.is_empty()
    }

    /// Lowercase letters in a fresh passphrase, before any substitution.
    pub fn lowercase_available(&self) -> usize {
        SYLLABLE_LENGTH
            .saturating_mul(self.syllables)
            .saturating_mul(self.words)
    }

    /// Character count of every passphrase generated with these options.
    pub fn passphrase_length(&self) -> usize {
        let gaps = if self.uses_delimiters() {
            self.words.saturating_sub(1)
        } else {
            0
        };
        self.lowercase_available() + gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_cli_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.words, 3);
        assert_eq!(options.syllables, 2);
        assert_eq!(options.delimiters, "-");
        assert!(!options.all_nums);
    }

    #[test]
    fn test_passphrase_length() {
        let mut options = GenerationOptions::default();
        assert_eq!(options.lowercase_available(), 18);
        assert_eq!(options.passphrase_length(), 20);

        options.delimiters.clear();
        assert_eq!(options.passphrase_length(), 18);
    }
}
