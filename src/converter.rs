use crate::case::{convert_all, CaseStyle, Conversion};
use crate::input::convert_json_line;
use crate::{BatchResult, Config, Outcome};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Converts batches of raw or JSON-encoded inputs with one configured style.
pub struct Converter {
    style: CaseStyle,
    json: bool,
    skip_empty: bool,
}

impl Converter {
    pub fn new(config: &Config, json: bool) -> Self {
        Self {
            style: config.style,
            json,
            skip_empty: config.skip_empty,
        }
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn convert_inputs(&self, inputs: &[String]) -> BatchResult {
        let outcomes: Vec<Outcome> = if self.json {
            inputs
                .par_iter()
                .map(|line| match convert_json_line(line, self.style) {
                    Ok(output) => Outcome::Converted(Conversion {
                        input: line.clone(),
                        output,
                        style: self.style,
                    }),
                    Err(e) => {
                        log::warn!("rejected input {:?}: {}", line, e);
                        Outcome::Rejected {
                            input: line.clone(),
                            error: e.to_string(),
                        }
                    }
                })
                .collect()
        } else {
            convert_all(inputs, self.style)
                .into_iter()
                .map(Outcome::Converted)
                .collect()
        };

        let outcomes = if self.skip_empty {
            outcomes
                .into_iter()
                .filter(|o| !matches!(o, Outcome::Converted(c) if c.output.is_empty()))
                .collect()
        } else {
            outcomes
        };

        BatchResult { outcomes }
    }

    /// Convert every line of a file.
    pub fn convert_file(&self, file_path: &Path) -> Result<BatchResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        log::debug!("read {} lines from {}", lines.len(), file_path.display());

        Ok(self.convert_inputs(&lines))
    }

    /// Like [`Converter::convert_file`], but a file that cannot be read
    /// becomes a single rejected outcome instead of an error.
    pub fn convert_path(&self, file_path: &Path) -> BatchResult {
        match self.convert_file(file_path) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("skipping {}: {:#}", file_path.display(), e);
                BatchResult {
                    outcomes: vec![Outcome::Rejected {
                        input: file_path.display().to_string(),
                        error: format!("{:#}", e),
                    }],
                }
            }
        }
    }
}
