use crate::config::toml_config::TomlConfig;
use crate::domain::model::{GenerationOptions, DEFAULT_COUNT};
use crate::domain::ports::OptionsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_options, Validate};
use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    "Version ",
    env!("CARGO_PKG_VERSION"),
    "\nA phoneme-based passphrase generator inspired by the Apple Passwords app.\n\n",
    "Licensed under the European Union Public License Version 1.2 (EUPL-v1.2)"
);

/// Flags left unset fall back to the profile (`--config`), then to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "apwgen", version, long_version = LONG_VERSION)]
#[command(about = "A phoneme-based passphrase generator inspired by the Apple Passwords app.")]
pub struct CliConfig {
    /// Specify the number of words to add. [default: 3]
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Specify the number of syllables a single word should contain. [default: 2]
    #[arg(short, long)]
    pub syllables: Option<usize>,

    /// Number of passphrases to generate. One per line. [default: 1]
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Number of upper case characters to include. [default: 1]
    #[arg(short, long)]
    pub upper: Option<usize>,

    /// Number of digits to include in passphrase. [default: 1]
    #[arg(short = 'n', long = "numdigits")]
    pub num_digits: Option<usize>,

    /// Allow digits to be placed on any position. Otherwise they will be
    /// allowed only before or after a delimiter and on the last position.
    /// `--allnums=false` switches off a profile's `all_nums = true`.
    #[arg(
        short,
        long = "allnums",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub all_nums: Option<bool>,

    /// Delimiter(s) to put between words. [default: "-"]
    #[arg(short, long)]
    pub delimiters: Option<String>,

    /// Specifies the vowel pool for syllables. [default: "aeiouy"]
    #[arg(long)]
    pub vowels: Option<String>,

    /// Specifies the consonant pool for syllables. [default: "bcdfghjkmnpqrstvwxz"]
    #[arg(long)]
    pub consonants: Option<String>,

    /// Specify the digit pool. [default: "0123456789"]
    #[arg(long)]
    pub numerics: Option<String>,

    /// Read defaults from a TOML profile.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(skip)]
    pub profile: Option<TomlConfig>,
}

impl CliConfig {
    /// Load the `--config` profile, if one was given.
    pub fn load_profile(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            tracing::debug!("Loading profile from {}", path.display());
            self.profile = Some(TomlConfig::from_file(path)?);
        }
        Ok(())
    }

    fn base_options(&self) -> GenerationOptions {
        self.profile
            .as_ref()
            .map(|profile| profile.generation_options())
            .unwrap_or_default()
    }
}

impl OptionsProvider for CliConfig {
    fn generation_options(&self) -> GenerationOptions {
        let base = self.base_options();
        GenerationOptions {
            words: self.words.unwrap_or(base.words),
            syllables: self.syllables.unwrap_or(base.syllables),
            num_digits: self.num_digits.unwrap_or(base.num_digits),
            upper: self.upper.unwrap_or(base.upper),
            all_nums: self.all_nums.unwrap_or(base.all_nums),
            vowels: self.vowels.clone().unwrap_or(base.vowels),
            consonants: self.consonants.clone().unwrap_or(base.consonants),
            numerics: self.numerics.clone().unwrap_or(base.numerics),
            delimiters: self.delimiters.clone().unwrap_or(base.delimiters),
        }
    }

    fn count(&self) -> usize {
        let base = self
            .profile
            .as_ref()
            .map(|profile| profile.count())
            .unwrap_or(DEFAULT_COUNT);
        self.count.unwrap_or(base)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_options(&self.generation_options(), self.count())
    }
}
