//! Output formatting for completion results

use crate::index::types::Score;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One ranked completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub phrase: String,
    pub score: Score,
}

/// Completions for a single prefix, best first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub prefix: String,
    pub completions: Vec<Completion>,
}

impl QueryResult {
    pub fn new(prefix: &str, scored: Vec<(&str, Score)>) -> Self {
        Self {
            prefix: prefix.to_string(),
            completions: scored
                .into_iter()
                .map(|(phrase, score)| Completion {
                    phrase: phrase.to_string(),
                    score,
                })
                .collect(),
        }
    }
}

/// Print results as JSON lines, one object per prefix
pub fn print_json(results: &[QueryResult]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for result in results {
        serde_json::to_writer(&mut out, result)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print results for humans, highlighting the matched prefix
pub fn print_results(results: &[QueryResult], color: bool, scores: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let heading = results.len() > 1;

    for (i, result) in results.iter().enumerate() {
        if heading {
            if i > 0 {
                // Blank line between prefixes
                writeln!(stdout)?;
            }
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(stdout, "{:?}", result.prefix)?;
            stdout.reset()?;
        }

        write_completions(&mut stdout, result, scores)?;
    }

    Ok(())
}

/// Write the completions of one result
pub fn write_completions(
    out: &mut impl WriteColor,
    result: &QueryResult,
    scores: bool,
) -> io::Result<()> {
    if result.completions.is_empty() {
        out.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(out, "(no completions)")?;
        out.reset()?;
        return Ok(());
    }

    for completion in &result.completions {
        if scores {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "{:>8}", completion.score)?;
            out.reset()?;
            write!(out, "  ")?;
        }

        // Every completion starts with the prefix
        let split = result.prefix.len().min(completion.phrase.len());
        let (matched, rest) = completion.phrase.split_at(split);
        if !matched.is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "{}", matched)?;
            out.reset()?;
        }
        writeln!(out, "{}", rest)?;
    }

    Ok(())
}
