use crate::domain::model::GenerationOptions;
use crate::utils::error::{ApwgenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, flag: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ApwgenError::ValidationError {
            field: field_name.to_string(),
            message: format!("The {} ({}) must be greater than zero.", field_name, flag),
        });
    }
    Ok(())
}

pub fn validate_non_empty_pool(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ApwgenError::ValidationError {
            field: field_name.to_string(),
            message: format!("The {} pool (--{}) must not be empty.", field_name, field_name),
        });
    }
    Ok(())
}

/// Pre-flight check of the requested counts against what a passphrase built
/// from `options` can hold. Stops at the first violation.
pub fn validate_options(options: &GenerationOptions, count: usize) -> Result<()> {
    validate_positive_number("number of words", "-w/--words", options.words)?;
    validate_positive_number(
        "number of syllables per word",
        "-s/--syllables",
        options.syllables,
    )?;
    validate_positive_number(
        "number of passphrases to generate",
        "-c/--count",
        count,
    )?;

    validate_non_empty_pool("vowels", &options.vowels)?;
    validate_non_empty_pool("consonants", &options.consonants)?;
    validate_non_empty_pool("numerics", &options.numerics)?;

    let lc_avail = options.lowercase_available();
    let over_length = |field: &str| ApwgenError::ValidationError {
        field: field.to_string(),
        message: format!(
            "Sum of digits and upper case characters requested exceeds length of passphrase \
             ({} digits + {} upper case > {} available).",
            options.num_digits, options.upper, lc_avail
        ),
    };

    if options.all_nums {
        if options.num_digits > lc_avail.saturating_sub(options.upper) {
            return Err(over_length("numdigits"));
        }
    } else {
        let boundary_slots = options.words.saturating_mul(2) - 1;
        if options.num_digits > boundary_slots {
            return Err(ApwgenError::ValidationError {
                field: "numdigits".to_string(),
                message: format!(
                    "Too many digits requested ({} of {} boundary positions). \
                     Maybe try adding --allnums?",
                    options.num_digits, boundary_slots
                ),
            });
        }
    }

    if options.upper > lc_avail.saturating_sub(options.num_digits) {
        return Err(over_length("upper"));
    }

    Ok(())
}
