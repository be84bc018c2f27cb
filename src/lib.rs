pub mod case;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod input;

pub use case::{
    convert, convert_all, to_camel_case, to_dot_case, to_kebab_case, CaseStyle, Conversion,
};
pub use config::Config;
pub use converter::Converter;
pub use error::CaseError;

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(Conversion),
    Rejected { input: String, error: String },
}

impl BatchResult {
    pub fn converted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Converted(_)))
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }

    pub fn extend(&mut self, other: BatchResult) {
        self.outcomes.extend(other.outcomes);
    }
}
