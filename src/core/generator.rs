use crate::core::assembler::join;
use crate::core::positions::digit_positions;
use crate::core::substitution::{insert_digits, insert_uppercase};
use crate::core::syllable::build_word_list;
use crate::domain::model::GenerationOptions;
use crate::domain::ports::OptionsProvider;
use crate::utils::error::Result;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

/// Generate one passphrase from the operating system's CSPRNG.
pub fn generate_passphrase(options: &GenerationOptions) -> Result<String> {
    generate_passphrase_with_rng(&mut OsRng, options)
}

/// Generate one passphrase with a caller-supplied cryptographic RNG.
///
/// Digits are placed before uppercase letters: the uppercase candidates are
/// read back from the string after the digits are in.
pub fn generate_passphrase_with_rng<R>(rng: &mut R, options: &GenerationOptions) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    let vowels: Vec<char> = options.vowels.chars().collect();
    let consonants: Vec<char> = options.consonants.chars().collect();
    let numerics: Vec<char> = options.numerics.chars().collect();
    let delimiters: Vec<char> = options.delimiters.chars().collect();

    let words = build_word_list(rng, options.words, options.syllables, &vowels, &consonants)?;
    let passphrase = join(rng, &words, &delimiters)?;

    let pool = digit_positions(options, &passphrase)?;
    let passphrase = insert_digits(rng, passphrase, pool, options.num_digits, &numerics)?;

    insert_uppercase(rng, passphrase, options.upper)
}

/// One result per requested passphrase. A failure never stops the rest.
pub fn generate_passphrases(options: &GenerationOptions, count: usize) -> Vec<Result<String>> {
    (0..count).map(|_| generate_passphrase(options)).collect()
}

pub struct PassphraseGenerator {
    options: GenerationOptions,
    count: usize,
}

impl PassphraseGenerator {
    pub fn new(options: GenerationOptions, count: usize) -> Self {
        Self { options, count }
    }

    pub fn from_provider<P: OptionsProvider>(provider: &P) -> Self {
        Self::new(provider.generation_options(), provider.count())
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Generate the whole batch, logging every failed slot.
    pub fn run(&self) -> Vec<Result<String>> {
        tracing::debug!(
            words = self.options.words,
            syllables = self.options.syllables,
            num_digits = self.options.num_digits,
            upper = self.options.upper,
            all_nums = self.options.all_nums,
            count = self.count,
            "Generating passphrases"
        );

        let results = generate_passphrases(&self.options, self.count);

        // Failures only; passphrases never reach the log. The caller reports
        // each failure to the user.
        let mut failures = 0;
        for (index, result) in results.iter().enumerate() {
            if let Err(e) = result {
                failures += 1;
                tracing::debug!(
                    "Passphrase {} failed: {} (category: {:?})",
                    index + 1,
                    e,
                    e.category()
                );
            }
        }

        tracing::debug!(
            "Generated {} of {} passphrases",
            self.count - failures,
            self.count
        );
        results
    }
}
