use crate::utils::error::{ApwgenError, Result};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

/// Pick the delimiter for one gap. A single-member pool costs no randomness.
pub fn choose_delimiter<R>(rng: &mut R, delimiters: &[char]) -> Option<char>
where
    R: Rng + CryptoRng + ?Sized,
{
    match delimiters {
        [] => None,
        [only] => Some(*only),
        pool => pool.choose(rng).copied(),
    }
}

/// Join words, drawing a fresh delimiter for every gap.
///
/// A lone word is only accepted when no delimiters were asked for.
pub fn join<R, S>(rng: &mut R, words: &[S], delimiters: &[char]) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
    S: AsRef<str>,
{
    let (first, rest) = words.split_first().ok_or_else(|| ApwgenError::InvalidArgument {
        field: "words".to_string(),
        reason: "Cannot join an empty word list".to_string(),
    })?;

    if !delimiters.is_empty() && rest.is_empty() {
        return Err(ApwgenError::InsufficientWords { words: words.len() });
    }

    let mut passphrase = String::from(first.as_ref());
    for word in rest {
        if let Some(delimiter) = choose_delimiter(rng, delimiters) {
            passphrase.push(delimiter);
        }
        passphrase.push_str(word.as_ref());
    }
    Ok(passphrase)
}
