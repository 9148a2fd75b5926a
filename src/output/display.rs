//! Display functions for rules and candidates

use super::formatters::{CandidateSample, remaining_bar};
use crate::core::{Mask, Rule, Word};
use colored::Colorize;
use std::io::{self, Write};

/// Print one rule as a bullet line
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_rule<W: Write>(out: &mut W, rule: &Rule) -> io::Result<()> {
    writeln!(
        out,
        "  {} {}",
        rule.letter().to_string().bright_blue().bold(),
        rule.describe().green()
    )
}

/// Print the active rule list, or a "no rules" notice when it is empty
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_rules<W: Write>(out: &mut W, rules: &[Rule]) -> io::Result<()> {
    if rules.is_empty() {
        return writeln!(out, "{}", "No rules entered yet".red());
    }

    writeln!(out, "{}", format!("Active rules ({}):", rules.len()).cyan())?;
    for rule in rules {
        write_rule(out, rule)?;
    }
    Ok(())
}

/// Print the rules that a guess just added
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_added_rules<W: Write>(
    out: &mut W,
    word: &str,
    mask: &str,
    added: &[Rule],
) -> io::Result<()> {
    let emoji = Mask::parse(mask.trim()).map(Mask::to_emoji).unwrap_or_default();
    writeln!(
        out,
        "{} {} {}",
        word.trim().to_uppercase().bright_white().bold(),
        mask.trim().to_uppercase().bright_black(),
        emoji
    )?;
    writeln!(out, "{}", "Added rules:".cyan())?;
    for rule in added {
        write_rule(out, rule)?;
    }
    Ok(())
}

/// Print a sample of the remaining candidates
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_candidates<W: Write>(
    out: &mut W,
    sample: &CandidateSample<'_>,
    dictionary_size: usize,
) -> io::Result<()> {
    if sample.total == 0 {
        return writeln!(
            out,
            "{}",
            "No candidates remain - the feedback may be inconsistent".red()
        );
    }

    writeln!(
        out,
        "{} [{}] {}/{}",
        "Possible words (random order):".cyan(),
        remaining_bar(sample.total, dictionary_size, 20).green(),
        sample.total,
        dictionary_size
    )?;
    for word in &sample.shown {
        writeln!(out, "  • {}", word.text().bright_blue())?;
    }

    if sample.is_truncated() {
        writeln!(
            out,
            "{} {} {} {}",
            "Total".red(),
            sample.total.to_string().bright_blue(),
            "words, showing".red(),
            sample.shown.len().to_string().bright_blue()
        )?;
    }
    Ok(())
}

/// Print every candidate in dictionary order, one per line, without decoration
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_plain_candidates<W: Write>(out: &mut W, candidates: &[&Word]) -> io::Result<()> {
    for word in candidates {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Print a user-facing error line
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red().bold(), message.red())
}

/// Print a user-facing confirmation line
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), message.green())
}
