//! Simple interactive CLI mode
//!
//! Numbered menu loop without TUI: enter guesses with their masks, list the
//! remaining words, inspect or reset the rules.

use crate::core::Word;
use crate::engine::Session;
use crate::output::{
    sample_candidates, write_added_rules, write_candidates, write_error, write_rules,
    write_success,
};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Menu entries of the simple mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddWord,
    ListCandidates,
    ListRules,
    ClearRules,
    UndoLast,
    Quit,
}

impl MenuChoice {
    /// Parse a menu selection (`1`-`5`, or `q`/`quit`/`0` to exit)
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::AddWord),
            "2" => Some(Self::ListCandidates),
            "3" => Some(Self::ListRules),
            "4" => Some(Self::ClearRules),
            "5" => Some(Self::UndoLast),
            "0" | "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Reads commands from `input` until the user quits or input ends. Candidate
/// lists are shuffled with `rng` and cut to `limit` words.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Invalid
/// guesses and menu selections are reported to the user and never end the
/// loop.
pub fn run_simple<R, W, G>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
    limit: usize,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Wordle Filter - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝")?;
    writeln!(
        out,
        "Dictionary: {} words\n",
        session.words().len().to_string().bright_blue()
    )?;

    loop {
        print_menu(out)?;

        let Some(line) = read_line(input, out, "Choice")? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            debug!(selection = %line, "unknown menu selection");
            write_error(out, &format!("Unknown selection '{}'", line.trim()))?;
            continue;
        };

        match choice {
            MenuChoice::AddWord => {
                if !add_word(session, input, out)? {
                    break;
                }
            }
            MenuChoice::ListCandidates => {
                let sample = sample_candidates(session.candidates(), limit, rng);
                write_candidates(out, &sample, session.words().len())?;
            }
            MenuChoice::ListRules => write_rules(out, session.rules().rules())?,
            MenuChoice::ClearRules => {
                session.clear();
                write_success(out, "Rule list cleared")?;
            }
            MenuChoice::UndoLast => match session.undo_last() {
                Some(removed) => {
                    write_success(out, &format!("Removed {} rules", removed.len()))?;
                }
                None => write_error(out, "Nothing to undo")?,
            },
            MenuChoice::Quit => break,
        }
    }

    writeln!(out, "\nBye!")?;
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    let rule = "====================================".green();
    writeln!(out, "{rule}")?;
    for (key, label) in [
        ("1", "Add a word"),
        ("2", "List possible words"),
        ("3", "List entered rules"),
        ("4", "Clear entered rules"),
        ("5", "Undo last word"),
        ("q", "Quit"),
    ] {
        writeln!(out, "{} {}", format!("[{key}]").bright_blue(), label.green())?;
    }
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Prompt for a word and mask and add the derived rules
///
/// Returns `false` when input ended mid-prompt.
fn add_word<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(word) = read_line(input, out, "Enter a five-letter word")? else {
        return Ok(false);
    };
    let word = first_token(&word);

    // Check the word before asking for its mask
    if let Err(err) = Word::new(word) {
        write_error(out, &err.to_string())?;
        return Ok(true);
    }

    writeln!(out, "{}", "Enter the mask, five characters:".green())?;
    writeln!(out, "  {} - letter is absent", "N".bright_blue())?;
    writeln!(out, "  {} - letter is exactly in this position", "E".bright_blue())?;
    writeln!(out, "  {} - letter is somewhere else in the word", "M".bright_blue())?;

    let Some(mask) = read_line(input, out, "Mask")? else {
        return Ok(false);
    };
    let mask = first_token(&mask);

    match session.add_guess(word, mask) {
        Ok(added) => write_added_rules(out, word, mask, added)?,
        Err(err) => write_error(out, &err.to_string())?,
    }
    Ok(true)
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or_default()
}

/// Get user input with a prompt; `None` at end of input
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
