use crate::case::CaseStyle;
use crate::{BatchResult, Outcome};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Converted { input: String, output: String },
    Rejected { input: String, error: String },
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: CaseStyle,
    converted: usize,
    rejected: usize,
    results: Vec<JsonEntry>,
}

pub fn print_results(result: &BatchResult, style: CaseStyle, colored: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            let (stdout, stderr) = render_text(result, colored);
            for line in stdout {
                println!("{}", line);
            }
            for line in stderr {
                eprintln!("{}", line);
            }
        }
        OutputFormat::Json => match render_json(result, style) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: failed to serialize results: {}", e),
        },
    }
}

/// Text rendering: converted outputs for stdout, rejections for stderr.
pub fn render_text(result: &BatchResult, colored_output: bool) -> (Vec<String>, Vec<String>) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    for outcome in &result.outcomes {
        match outcome {
            Outcome::Converted(conversion) => stdout.push(conversion.output.clone()),
            Outcome::Rejected { input, error } => {
                if colored_output {
                    stderr.push(format!("{} {} {}", "✗".red().bold(), input.yellow(), error));
                } else {
                    stderr.push(format!("✗ {} {}", input, error));
                }
            }
        }
    }

    (stdout, stderr)
}

pub fn render_json(result: &BatchResult, style: CaseStyle) -> serde_json::Result<String> {
    let results = result
        .outcomes
        .iter()
        .map(|outcome| match outcome {
            Outcome::Converted(c) => JsonEntry::Converted {
                input: c.input.clone(),
                output: c.output.clone(),
            },
            Outcome::Rejected { input, error } => JsonEntry::Rejected {
                input: input.clone(),
                error: error.clone(),
            },
        })
        .collect();

    let output = JsonOutput {
        style,
        converted: result.converted_count(),
        rejected: result.rejected_count(),
        results,
    };

    serde_json::to_string_pretty(&output)
}

pub fn print_summary(result: &BatchResult, colored: bool) {
    if let Some(summary) = summary_line(result, colored) {
        eprintln!();
        eprintln!("{}", summary);
    }
}

fn summary_line(result: &BatchResult, colored: bool) -> Option<String> {
    let rejected = result.rejected_count();
    if rejected == 0 {
        return None;
    }

    let input_word = if rejected == 1 { "input" } else { "inputs" };
    let total = result.outcomes.len();
    if colored {
        Some(format!(
            "{} {} {} rejected out of {}",
            "✗".red().bold(),
            rejected.to_string().red().bold(),
            input_word,
            total
        ))
    } else {
        Some(format!("✗ {} {} rejected out of {}", rejected, input_word, total))
    }
}
