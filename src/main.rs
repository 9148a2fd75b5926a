//! Wordle Filter - CLI
//!
//! Narrows a five-letter dictionary from guess feedback, in TUI, menu or
//! one-shot mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::Path;
use wordle_filter::{
    commands::{FilterConfig, run_filter, run_simple},
    core::Word,
    engine::Session,
    logging,
    output::{
        sample_candidates, write_added_rules, write_candidates, write_plain_candidates,
        write_rules,
    },
    wordlists::{
        WORDS,
        loader::{DictionaryFormat, load_delimited, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Wordle assistant: turn guess feedback into rules and list the words that remain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Field delimiter of the wordlist file ('tab' or '\t' for a tab)
    #[arg(short, long, global = true, default_value = "tab", value_parser = parse_delimiter)]
    delimiter: char,

    /// Header column holding the words (e.g. 'bare'); first field if omitted
    #[arg(short, long, global = true)]
    column: Option<String>,

    /// Maximum number of candidates to display
    #[arg(short, long, global = true, default_value = "20")]
    limit: usize,

    /// Seed for the display shuffle
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple numbered-menu mode without TUI
    Simple,

    /// Apply guesses given on the command line and print what remains
    Filter {
        /// Guess with its mask, e.g. CRANE:NNEEM (bare words with --answer)
        #[arg(short, long = "guess", required = true)]
        guesses: Vec<String>,

        /// Score bare guesses against this answer
        #[arg(short, long)]
        answer: Option<String>,

        /// Print every candidate in dictionary order, one per line
        #[arg(short, long)]
        plain: bool,
    },
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    match value {
        "tab" | "\\t" => Ok('\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ch),
                _ => Err(format!("delimiter must be a single character, got '{value}'")),
            }
        }
    }
}

/// Load the dictionary selected by the -w flag
fn load_words(cli: &Cli) -> Result<Vec<Word>> {
    match cli.wordlist.as_str() {
        "all" => Ok(words_from_slice(WORDS)),
        path => {
            let format = DictionaryFormat {
                delimiter: cli.delimiter,
                column: cli.column.clone(),
            };
            load_delimited(Path::new(path), &format)
                .with_context(|| format!("could not load wordlist '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let words = load_words(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, cli.limit, cli.seed),
        Commands::Simple => run_simple_command(&words, cli.limit, cli.seed),
        Commands::Filter {
            guesses,
            answer,
            plain,
        } => run_filter_command(&words, guesses, answer, plain, cli.limit, cli.seed),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn run_play_command(words: &[Word], limit: usize, seed: Option<u64>) -> Result<()> {
    use wordle_filter::interactive::{App, run_tui};

    let app = App::new(words, limit, seed);
    run_tui(app)
}

fn run_simple_command(words: &[Word], limit: usize, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(words);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    run_simple(&mut session, &mut input, &mut out, &mut make_rng(seed), limit)
}

fn run_filter_command(
    words: &[Word],
    guesses: Vec<String>,
    answer: Option<String>,
    plain: bool,
    limit: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = FilterConfig::new(guesses);
    if let Some(answer) = answer {
        config = config.with_answer(answer);
    }

    let mut session = Session::new(words);
    let result = run_filter(&mut session, &config)?;
    let mut out = io::stdout().lock();

    if plain {
        write_plain_candidates(&mut out, &result.candidates)?;
        return Ok(());
    }

    for step in &result.steps {
        write_added_rules(&mut out, &step.word, &step.mask, &step.rules)?;
        writeln!(
            out,
            "{}\n",
            format!("{} candidates remaining", step.candidates_after).bright_black()
        )?;
    }

    write_rules(&mut out, &result.rules)?;
    writeln!(out)?;

    let sample = sample_candidates(result.candidates, limit, &mut make_rng(seed));
    write_candidates(&mut out, &sample, words.len())?;
    Ok(())
}
