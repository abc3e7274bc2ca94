use crate::domain::model::{GenerationOptions, DEFAULT_COUNT};
use crate::domain::ports::OptionsProvider;
use crate::utils::error::{ApwgenError, Result};
use crate::utils::validation::{validate_options, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 密碼設定檔，所有欄位皆可省略，省略時使用預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub passphrase: PassphraseConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassphraseConfig {
    pub words: Option<usize>,
    pub syllables: Option<usize>,
    pub num_digits: Option<usize>,
    pub upper: Option<usize>,
    pub all_nums: Option<bool>,
    pub vowels: Option<String>,
    pub consonants: Option<String>,
    pub numerics: Option<String>,
    pub delimiters: Option<String>,
    pub count: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ApwgenError::ConfigError {
            message: format!("cannot read profile '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ApwgenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${APWGEN_DELIMITERS})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ApwgenError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl OptionsProvider for TomlConfig {
    fn generation_options(&self) -> GenerationOptions {
        let p = &self.passphrase;
        let defaults = GenerationOptions::default();
        GenerationOptions {
            words: p.words.unwrap_or(defaults.words),
            syllables: p.syllables.unwrap_or(defaults.syllables),
            num_digits: p.num_digits.unwrap_or(defaults.num_digits),
            upper: p.upper.unwrap_or(defaults.upper),
            all_nums: p.all_nums.unwrap_or(defaults.all_nums),
            vowels: p.vowels.clone().unwrap_or(defaults.vowels),
            consonants: p.consonants.clone().unwrap_or(defaults.consonants),
            numerics: p.numerics.clone().unwrap_or(defaults.numerics),
            delimiters: p.delimiters.clone().unwrap_or(defaults.delimiters),
        }
    }

    fn count(&self) -> usize {
        self.passphrase.count.unwrap_or(DEFAULT_COUNT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_options(&self.generation_options(), self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_profile() {
        let toml_content = r#"
[passphrase]
words = 4
syllables = 3
num_digits = 2
upper = 3
all_nums = true
vowels = "aeiou"
consonants = "bcdfg"
numerics = "13579"
delimiters = "-_"
count = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let options = config.generation_options();

        assert_eq!(options.words, 4);
        assert_eq!(options.syllables, 3);
        assert_eq!(options.num_digits, 2);
        assert_eq!(options.upper, 3);
        assert!(options.all_nums);
        assert_eq!(options.numerics, "13579");
        assert_eq!(options.delimiters, "-_");
        assert_eq!(config.count(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = TomlConfig::from_toml_str("[passphrase]\nwords = 5\n").unwrap();
        let options = config.generation_options();

        assert_eq!(options.words, 5);
        assert_eq!(options.syllables, 2);
        assert_eq!(options.delimiters, "-");
        assert_eq!(config.count(), 1);

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(empty.generation_options(), GenerationOptions::default());
    }

    #[test]
    fn test_empty_delimiters_in_profile() {
        let config = TomlConfig::from_toml_str("[passphrase]\ndelimiters = \"\"\n").unwrap();
        assert!(!config.generation_options().uses_delimiters());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = TomlConfig::from_toml_str("[passphrase]\nwordz = 5\n").unwrap_err();
        assert!(matches!(err, ApwgenError::ConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("APWGEN_TEST_DELIMITERS", "+=");

        let toml_content = r#"
[passphrase]
delimiters = "${APWGEN_TEST_DELIMITERS}"
vowels = "${APWGEN_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.passphrase.delimiters.as_deref(), Some("+="));
        assert_eq!(
            config.passphrase.vowels.as_deref(),
            Some("${APWGEN_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("APWGEN_TEST_DELIMITERS");
    }

    #[test]
    fn test_profile_validation() {
        let config = TomlConfig::from_toml_str("[passphrase]\nnum_digits = 9\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[passphrase]\nwords = 2\ncount = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.generation_options().words, 2);
        assert_eq!(config.count(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/nonexistent/apwgen.toml").unwrap_err();
        assert!(matches!(err, ApwgenError::ConfigError { .. }));
        assert!(err.to_string().contains("/nonexistent/apwgen.toml"));
    }
}
