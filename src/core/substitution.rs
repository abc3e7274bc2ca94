use crate::core::positions::lowercase_positions;
use crate::core::syllable::choose_char;
use crate::utils::error::{ApwgenError, Result};
use rand::{CryptoRng, Rng};

/// Replace the character at `position` (a char index) with `transform(original)`.
pub fn substitute<F>(passphrase: &str, position: usize, transform: F) -> Result<String>
where
    F: FnOnce(char) -> char,
{
    let mut chars: Vec<char> = passphrase.chars().collect();
    if chars.is_empty() {
        return Err(ApwgenError::EmptyInput);
    }
    if position >= chars.len() {
        return Err(ApwgenError::IndexOutOfRange {
            position,
            length: chars.len(),
        });
    }

    chars[position] = transform(chars[position]);
    Ok(chars.into_iter().collect())
}

/// Uppercase form of `c`; for multi-char mappings (e.g. `ß`) the first scalar.
pub fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Remove and return a uniformly chosen entry of `pool`.
fn take_position<R>(rng: &mut R, pool: &mut Vec<usize>) -> usize
where
    R: Rng + CryptoRng + ?Sized,
{
    let index = rng.gen_range(0..pool.len());
    pool.swap_remove(index)
}

/// Put `num_digits` numerics on distinct positions drawn from `pool`.
pub fn insert_digits<R>(
    rng: &mut R,
    passphrase: String,
    mut pool: Vec<usize>,
    num_digits: usize,
    numerics: &[char],
) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    if num_digits > pool.len() {
        return Err(ApwgenError::CapacityExceeded {
            kind: "digits".to_string(),
            requested: num_digits,
            available: pool.len(),
        });
    }
    if num_digits > 0 && numerics.is_empty() {
        return Err(ApwgenError::InvalidPool {
            pool: "numerics".to_string(),
        });
    }

    let mut passphrase = passphrase;
    for _ in 0..num_digits {
        let position = take_position(rng, &mut pool);
        let digit = choose_char(rng, numerics, "numerics")?;
        passphrase = substitute(&passphrase, position, |_| digit)?;
    }
    Ok(passphrase)
}

/// Uppercase `upper` distinct lowercase letters of `passphrase`.
///
/// Candidates are taken from the string as it is now, so any digit inserted
/// earlier is never picked.
pub fn insert_uppercase<R>(rng: &mut R, passphrase: String, upper: usize) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    let mut pool = lowercase_positions(&passphrase);
    if upper > pool.len() {
        return Err(ApwgenError::CapacityExceeded {
            kind: "upper case characters".to_string(),
            requested: upper,
            available: pool.len(),
        });
    }

    let mut passphrase = passphrase;
    for _ in 0..upper {
        let position = take_position(rng, &mut pool);
        passphrase = substitute(&passphrase, position, to_upper)?;
    }
    Ok(passphrase)
}
