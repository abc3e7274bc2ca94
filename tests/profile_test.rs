use anyhow::Result;
use apwgen::{OptionsProvider, PassphraseGenerator, TomlConfig, Validate};
use std::io::Write;
use tempfile::NamedTempFile;

/// 從設定檔產生一批密碼
#[test]
fn test_batch_from_profile() -> Result<()> {
    let mut profile = NamedTempFile::new()?;
    profile.write_all(
        br#"
[passphrase]
words = 4
syllables = 1
num_digits = 2
upper = 2
delimiters = "."
count = 6
"#,
    )?;

    let config = TomlConfig::from_file(profile.path())?;
    config.validate()?;

    let generator = PassphraseGenerator::from_provider(&config);
    assert_eq!(generator.count(), 6);

    let results = generator.run();
    assert_eq!(results.len(), 6);
    for result in results {
        let passphrase = result?;
        assert_eq!(passphrase.split('.').count(), 4);
        assert_eq!(passphrase.chars().count(), 15);
        assert_eq!(passphrase.chars().filter(|c| c.is_ascii_digit()).count(), 2);
        assert_eq!(passphrase.chars().filter(|c| c.is_uppercase()).count(), 2);
    }
    Ok(())
}

#[test]
fn test_invalid_profile_is_rejected_before_generation() -> Result<()> {
    let config = TomlConfig::from_toml_str("[passphrase]\nwords = 2\nnum_digits = 4\n")?;
    assert_eq!(config.generation_options().words, 2);
    assert!(config.validate().is_err());
    Ok(())
}
