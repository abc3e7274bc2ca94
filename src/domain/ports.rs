use crate::domain::model::GenerationOptions;

/// A source of generation settings (command line, TOML profile, ...).
pub trait OptionsProvider {
    fn generation_options(&self) -> GenerationOptions;
    fn count(&self) -> usize;
}
