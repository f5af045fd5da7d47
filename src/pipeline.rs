use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::case;
use crate::config::Config;
use crate::models::CaseStyle;

/// What the pipeline does to each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Report the style of each line
    Detect,
    /// Convert each line to the given style
    Convert(CaseStyle),
    /// Invert letter case
    Flip,
}

/// Applies one operation to a batch of lines
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Apply `op` to every line, in order
    pub fn run<S: AsRef<str>>(&self, config: &Config, op: Operation, lines: &[S]) -> Vec<String> {
        tracing::debug!(?op, lines = lines.len(), "running pipeline");

        let out: Vec<String> = lines
            .iter()
            .map(|line| self.apply(config, op, line.as_ref()))
            .collect();

        if self.verbose {
            eprintln!("Processed {} line(s)", out.len());
        }

        out
    }

    /// Read lines from `input`, apply `op`, and write one result per line to `output`
    pub fn run_io<R: BufRead, W: Write>(
        &self,
        config: &Config,
        op: Operation,
        input: R,
        mut output: W,
    ) -> Result<()> {
        let lines = input
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read input")?;

        for line in self.run(config, op, lines.as_slice()) {
            writeln!(output, "{}", line).context("Failed to write output")?;
        }

        Ok(())
    }

    fn apply(&self, config: &Config, op: Operation, line: &str) -> String {
        match op {
            Operation::Detect => case::of(line).to_string(),
            Operation::Flip => case::flip(line),
            Operation::Convert(style) => convert(config, style, line),
        }
    }
}

/// Convert with the configured fill and sentence exceptions
fn convert(config: &Config, style: CaseStyle, text: &str) -> String {
    let fill = config.convert.fill.as_str();
    let strip = config.convert.strip_apostrophes;
    let sentence = &config.sentence;

    match style {
        CaseStyle::Lower => case::to_lower_with(text, fill, strip),
        CaseStyle::Upper => case::to_upper_with(text, fill, strip),
        CaseStyle::Capital => case::to_capital_with(text, fill, strip),
        CaseStyle::Sentence => case::to_sentence_with(
            text,
            sentence.names.as_slice(),
            sentence.abbreviations.as_slice(),
        ),
        other => case::to_case(text, other),
    }
}
