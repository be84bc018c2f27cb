use anyhow::{Context, Result};
use caseconv::cli::output::{self, OutputFormat};
use caseconv::config::Overrides;
use caseconv::{BatchResult, CaseStyle, Config, Converter};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert text to camelCase, kebab-case or dot.case", long_about = None)]
struct Cli {
    /// Strings to convert (reads stdin lines when none are given)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case style (camel, kebab, dot)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Convert each line of a file
    #[arg(short, long, value_name = "PATH")]
    file: Vec<PathBuf>,

    /// Treat each input as a JSON value; non-strings are rejected
    #[arg(long)]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs were rejected
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        style: cli.style,
        format: cli.format,
        no_color: cli.no_color,
    })?;
    log::debug!("effective config: {:?}", config);

    let converter = Converter::new(&config, cli.json);
    let mut result = BatchResult::default();

    if !cli.inputs.is_empty() {
        result.extend(converter.convert_inputs(&cli.inputs));
    }

    for file_path in &cli.file {
        result.extend(converter.convert_path(file_path));
    }

    if cli.inputs.is_empty() && cli.file.is_empty() {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?;
        result.extend(converter.convert_inputs(&lines));
    }

    output::print_results(&result, converter.style(), config.color, &config.format);
    if config.format == OutputFormat::Text {
        output::print_summary(&result, config.color);
    }

    if result.rejected_count() > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
