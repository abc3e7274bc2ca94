use crate::domain::model::SYLLABLE_LENGTH;
use crate::utils::error::{ApwgenError, Result};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

/// Uniformly draw one character from `pool`.
pub fn choose_char<R>(rng: &mut R, pool: &[char], pool_name: &str) -> Result<char>
where
    R: Rng + CryptoRng + ?Sized,
{
    pool.choose(rng).copied().ok_or_else(|| ApwgenError::InvalidPool {
        pool: pool_name.to_string(),
    })
}

/// Consonant, vowel, consonant.
pub fn build_syllable<R>(rng: &mut R, vowels: &[char], consonants: &[char]) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    // Both pools are checked up front so no draw is spent on a doomed syllable.
    if vowels.is_empty() {
        return Err(ApwgenError::InvalidPool {
            pool: "vowels".to_string(),
        });
    }
    if consonants.is_empty() {
        return Err(ApwgenError::InvalidPool {
            pool: "consonants".to_string(),
        });
    }

    let mut syllable = String::with_capacity(SYLLABLE_LENGTH);
    syllable.push(choose_char(rng, consonants, "consonants")?);
    syllable.push(choose_char(rng, vowels, "vowels")?);
    syllable.push(choose_char(rng, consonants, "consonants")?);
    Ok(syllable)
}

pub fn build_word<R>(
    rng: &mut R,
    num_syllables: usize,
    vowels: &[char],
    consonants: &[char],
) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    if num_syllables == 0 {
        return Err(ApwgenError::InvalidArgument {
            field: "syllables".to_string(),
            reason: "Number of syllables must be positive".to_string(),
        });
    }

    let mut word = String::with_capacity(num_syllables * SYLLABLE_LENGTH);
    for _ in 0..num_syllables {
        word.push_str(&build_syllable(rng, vowels, consonants)?);
    }
    Ok(word)
}

/// `num_words` independently generated words.
pub fn build_word_list<R>(
    rng: &mut R,
    num_words: usize,
    num_syllables: usize,
    vowels: &[char],
    consonants: &[char],
) -> Result<Vec<String>>
where
    R: Rng + CryptoRng + ?Sized,
{
    if num_words == 0 {
        return Err(ApwgenError::InvalidArgument {
            field: "words".to_string(),
            reason: "Number of words must be positive".to_string(),
        });
    }

    (0..num_words)
        .map(|_| build_word(rng, num_syllables, vowels, consonants))
        .collect()
}
