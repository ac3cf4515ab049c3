use crate::{CaseError, CaseStyle, ConversionReport, Tokens};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STYLE_SAMPLE: &str = "mobile number 2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
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
pub struct JsonEntry {
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub style: CaseStyle,
    pub converted: usize,
    pub failed: usize,
    pub results: Vec<JsonEntry>,
}

pub fn print_report(
    report: &ConversionReport,
    style: CaseStyle,
    colored_output: bool,
    format: OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => print_text_report(report, colored_output),
        OutputFormat::Json => println!("{}", json_report(report, style)?),
    }
    Ok(())
}

fn print_text_report(report: &ConversionReport, colored_output: bool) {
    for entry in &report.entries {
        match &entry.output {
            Ok(output) => println!("{}", output),
            Err(err) => print_rejection(&entry.input, err, colored_output),
        }
    }
}

/// Report one rejected input on stderr.
pub fn print_rejection(input: &str, err: &CaseError, colored_output: bool) {
    let input = format!("{:?}", input);
    if colored_output {
        eprintln!("{} {} {}", "✗".red().bold(), input.yellow(), err.to_string().dimmed());
    } else {
        eprintln!("✗ {} {}", input, err);
    }
}

pub fn json_report(report: &ConversionReport, style: CaseStyle) -> serde_json::Result<String> {
    let results = report
        .entries
        .iter()
        .map(|e| match &e.output {
            Ok(output) => JsonEntry {
                input: e.input.clone(),
                output: Some(output.clone()),
                error: None,
                kind: None,
            },
            Err(err) => JsonEntry {
                input: e.input.clone(),
                output: None,
                error: Some(err.to_string()),
                kind: Some(err.kind().to_string()),
            },
        })
        .collect();

    let output = JsonOutput {
        style,
        converted: report.converted,
        failed: report.failed,
        results,
    };

    serde_json::to_string_pretty(&output)
}

/// Summary goes to stderr so stdout stays a clean stream of converted lines.
pub fn print_summary(report: &ConversionReport, colored: bool) {
    if !report.has_failures() {
        return;
    }

    let input_word = if report.failed == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "\n{} {} {} rejected, {} converted",
            "✗".red().bold(),
            report.failed.to_string().red().bold(),
            input_word,
            report.converted.to_string().green()
        );
    } else {
        eprintln!(
            "\n✗ {} {} rejected, {} converted",
            report.failed, input_word, report.converted
        );
    }
}

pub fn print_tokens(input: &str, tokens: &Tokens, colored: bool) {
    if tokens.is_empty() {
        if colored {
            println!("{} {:?}", "No tokens in".yellow(), input);
        } else {
            println!("No tokens in {:?}", input);
        }
        return;
    }

    for (i, token) in tokens.iter().enumerate() {
        let kind = if token.is_numeric() { "numeric" } else { "word" };
        if colored {
            println!(
                "  {} {} {}",
                format!("{:>2}", i + 1).blue(),
                token.as_str().bold(),
                format!("({})", kind).dimmed()
            );
        } else {
            println!("  {:>2} {} ({})", i + 1, token, kind);
        }
    }
}

pub fn print_styles(colored: bool) {
    let tokens = crate::tokenize(STYLE_SAMPLE);
    for style in CaseStyle::ALL {
        let sample = crate::case::formatter::format(&tokens, style);
        if colored {
            println!("  {:<9} {}", style.name().cyan().bold(), sample.green());
        } else {
            println!("  {:<9} {}", style.name(), sample);
        }
    }
}
