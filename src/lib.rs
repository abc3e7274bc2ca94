pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::generator::{
    generate_passphrase, generate_passphrase_with_rng, generate_passphrases, PassphraseGenerator,
};
pub use crate::domain::model::GenerationOptions;
pub use crate::domain::ports::OptionsProvider;
pub use crate::utils::error::{ApwgenError, Result};
pub use crate::utils::validation::{validate_options, Validate};
