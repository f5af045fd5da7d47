use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use case_style::cli::{Cli, Commands};
use case_style::config::Config;
use case_style::models::CaseStyle;
use case_style::pipeline::{Operation, Pipeline};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    case_style::logging::init(cli.verbose);

    match cli.command {
        Commands::Detect { text } => {
            run_lines(&Config::default_config(), Operation::Detect, text, cli.verbose)?;
        }
        Commands::Convert {
            style,
            config,
            text,
        } => {
            let config = Config::load_or_default(&config)?;
            let style = style.unwrap_or(config.convert.style);
            run_lines(&config, Operation::Convert(style), text, cli.verbose)?;
        }
        Commands::Flip { text } => {
            run_lines(&Config::default_config(), Operation::Flip, text, cli.verbose)?;
        }
        Commands::Styles { sample } => {
            run_styles(&sample)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Apply `op` to the given texts, or to stdin when there are none
fn run_lines(config: &Config, op: Operation, text: Vec<String>, verbose: bool) -> Result<()> {
    let pipeline = Pipeline::new(verbose);
    let stdout = io::stdout();

    if text.is_empty() {
        return pipeline.run_io(config, op, io::stdin().lock(), stdout.lock());
    }

    let mut out = stdout.lock();
    for line in pipeline.run(config, op, text.as_slice()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Run the styles command
fn run_styles(sample: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    for style in CaseStyle::ALL.into_iter().skip(1) {
        writeln!(out, "{:<10} {}", style, style.apply(sample))?;
    }
    Ok(())
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - convert.style: default target style");
    println!("  - convert.fill: word separator for lower, upper and capital");
    println!("  - sentence.names: proper names kept capitalized in sentence case");
    println!("  - sentence.abbreviations: abbreviations that do not end a sentence");

    Ok(())
}

