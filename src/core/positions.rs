use crate::domain::model::{GenerationOptions, SYLLABLE_LENGTH};
use crate::utils::error::{ApwgenError, Result};

/// Digit slots for boundary mode: the first character after each delimiter
/// and the last character of every word.
///
/// Derived from the option arithmetic alone, so it only holds while every
/// syllable is exactly `SYLLABLE_LENGTH` characters wide.
pub fn boundary_positions(
    words: usize,
    syllables: usize,
    uses_delimiters: bool,
) -> Result<Vec<usize>> {
    if words == 0 {
        return Err(ApwgenError::InvalidArgument {
            field: "words".to_string(),
            reason: "Number of words must not be zero".to_string(),
        });
    }
    if syllables == 0 {
        return Err(ApwgenError::InvalidArgument {
            field: "syllables".to_string(),
            reason: "Number of syllables must not be zero".to_string(),
        });
    }

    let delimiter_width = usize::from(uses_delimiters);
    let word_length = syllables * SYLLABLE_LENGTH;

    let mut positions = Vec::with_capacity(2 * words - 1);
    for i in 0..words {
        if i > 0 {
            positions.push(i * delimiter_width + i * word_length);
        }
        positions.push(i * delimiter_width + (i + 1) * word_length - 1);
    }
    Ok(positions)
}

/// Indices of every lowercase letter in `passphrase`.
pub fn lowercase_positions(passphrase: &str) -> Vec<usize> {
    passphrase
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_alphabetic() && c.is_lowercase())
        .map(|(i, _)| i)
        .collect()
}

/// Candidate digit positions for `passphrase` under the configured mode.
pub fn digit_positions(options: &GenerationOptions, passphrase: &str) -> Result<Vec<usize>> {
    if options.all_nums {
        Ok(lowercase_positions(passphrase))
    } else {
        boundary_positions(options.words, options.syllables, options.uses_delimiters())
    }
}
