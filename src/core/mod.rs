pub mod assembler;
pub mod generator;
pub mod positions;
pub mod substitution;
pub mod syllable;

pub use crate::domain::model::GenerationOptions;
pub use crate::domain::ports::OptionsProvider;
pub use crate::utils::error::Result;
