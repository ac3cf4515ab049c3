use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::OutputFormat;
use recase::config::Overrides;
use recase::{cli, CaseStyle, Config, ConversionReport};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert text to camelCase, kebab-case, dot.case and more", long_about = None)]
struct Cli {
    /// Strings to convert (reads lines from stdin when none are given).
    /// A first input named `tokens` or `styles` runs that subcommand; put
    /// such an input after another one or in a --file to convert it.
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case style (camel, kebab, dot, snake, pascal, constant)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Read inputs line by line from a file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Skip empty and whitespace-only lines from files or stdin
    #[arg(long)]
    skip_blank: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs are rejected
    #[arg(long)]
    no_fail: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Show how an input is split into tokens
    Tokens {
        /// Text to tokenize
        input: String,
    },
    /// List supported case styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli::logging::init(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        style: cli.style,
        skip_blank: cli.skip_blank,
        no_color: cli.no_color,
    })?;
    tracing::debug!(?config, "configuration loaded");

    if let Some(command) = &cli.command {
        handle_command(command, &config);
        return Ok(());
    }

    let inputs = collect_inputs(&cli, &config)?;
    let report = ConversionReport::build(inputs, config.style);

    cli::output::print_report(&report, config.style, config.color, cli.format)?;
    if cli.format == OutputFormat::Text {
        cli::output::print_summary(&report, config.color);
    }

    if report.has_failures() && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn collect_inputs(cli: &Cli, config: &Config) -> Result<Vec<String>> {
    // Arguments are taken verbatim; only streamed lines are subject to --skip-blank
    let mut inputs = cli.inputs.clone();

    let mut lines = Vec::new();
    for path in &cli.files {
        lines.extend(cli::read_lines(path)?);
    }
    if cli.inputs.is_empty() && cli.files.is_empty() {
        lines = cli::read_stdin_lines()?;
    }

    if config.skip_blank {
        lines = cli::drop_blank(lines);
    }
    inputs.extend(lines);

    Ok(inputs)
}

fn handle_command(command: &Commands, config: &Config) {
    match command {
        Commands::Tokens { input } => match recase::validate(input.as_str()) {
            Ok(text) => {
                let tokens = recase::tokenize(text);
                cli::output::print_tokens(input, &tokens, config.color);
            }
            Err(err) => {
                cli::output::print_rejection(input, &err, config.color);
                std::process::exit(1);
            }
        },
        Commands::Styles => {
            cli::output::print_styles(config.color);
        }
    }
}
