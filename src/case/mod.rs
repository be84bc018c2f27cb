pub mod tokenizer;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use tokenizer::tokenize;

/// Target case style for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `helloWorld`
    #[default]
    Camel,
    /// `hello-world`
    Kebab,
    /// `hello.world`
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Dot];

    /// String placed between tokens.
    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Camel => "",
            CaseStyle::Kebab => "-",
            CaseStyle::Dot => ".",
        }
    }

    /// Convert `input` into this style.
    pub fn apply(self, input: &str) -> String {
        let tokens = tokenize(input);
        match self {
            CaseStyle::Camel => join_camel(&tokens),
            CaseStyle::Kebab | CaseStyle::Dot => join_lowercase(&tokens, self.separator()),
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dot => write!(f, "dot"),
        }
    }
}

/// One input together with its converted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub style: CaseStyle,
}

/// Convert to camelCase: `"hello world"` becomes `"helloWorld"`.
pub fn to_camel_case(input: &str) -> String {
    CaseStyle::Camel.apply(input)
}

/// Convert to kebab-case: `"hello world"` becomes `"hello-world"`.
pub fn to_kebab_case(input: &str) -> String {
    CaseStyle::Kebab.apply(input)
}

/// Convert to dot.case: `"hello world"` becomes `"hello.world"`.
pub fn to_dot_case(input: &str) -> String {
    CaseStyle::Dot.apply(input)
}

/// Convert `input` into `style`.
pub fn convert(input: &str, style: CaseStyle) -> String {
    style.apply(input)
}

/// Convert every input independently, keeping input order.
pub fn convert_all(inputs: &[String], style: CaseStyle) -> Vec<Conversion> {
    inputs
        .par_iter()
        .map(|input| Conversion {
            input: input.clone(),
            output: style.apply(input),
            style,
        })
        .collect()
}

fn join_camel(tokens: &[String]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(String::len).sum());

    for (index, token) in tokens.iter().enumerate() {
        if index == 0 {
            result.push_str(&token.to_ascii_lowercase());
        } else {
            push_capitalized(&mut result, token);
        }
    }

    result
}

fn push_capitalized(out: &mut String, token: &str) {
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(&chars.as_str().to_ascii_lowercase());
    }
}

fn join_lowercase(tokens: &[String], separator: &str) -> String {
    tokens
        .iter()
        .map(|token| token.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
