//! Word Pattern Filter - CLI
//!
//! Interactive and one-shot dictionary filtering by wildcard pattern and
//! letter-count constraints.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use word_pattern_filter::{
    commands::{QueryConfig, run_query, run_simple},
    output::{Tone, say},
    wordlists::{DEFAULT_WORDS_URL, Dictionary, Source, default_words_path},
};

#[derive(Parser)]
#[command(
    name = "wordfilter",
    about = "Filter a dictionary by wildcard pattern and exact-count letter constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file; downloaded here when missing (default: words.txt next to the executable)
    #[arg(short = 'w', long, global = true, env = "WORDS_FILE")]
    words_file: Option<PathBuf>,

    /// URL to download the dictionary from
    #[arg(long, global = true, env = "WORDS_URL", default_value = DEFAULT_WORDS_URL)]
    words_url: String,

    /// Pattern length for interactive modes
    #[arg(short, long, global = true, default_value = "5", value_parser = clap::value_parser!(u16).range(1..=64))]
    length: u16,

    /// Keep a dictionary downloaded during this session instead of deleting it on exit
    #[arg(long, global = true)]
    keep_dictionary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt-driven filter loop (default)
    Simple,

    /// Full-screen live filter
    Play,

    /// Print matches for a single pattern and exit
    Query {
        /// Pattern of a-z and '?' wildcards; its length selects candidate words
        pattern: String,

        /// Letters that must appear (repeat a letter to require more)
        #[arg(short, long, default_value = "")]
        include: String,

        /// Letters that must not appear; also in include means an exact count
        #[arg(short, long, default_value = "")]
        exclude: String,

        /// Print at most this many matches
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", word_pattern_filter::output::paint(&format!("{err:#}"), Tone::Error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = Source::new(
        cli.words_file.unwrap_or_else(default_words_path),
        cli.words_url,
    );
    let dictionary = Dictionary::open(&source)?;
    tracing::info!(
        words = dictionary.len(),
        path = %dictionary.path().display(),
        "dictionary ready"
    );

    let length = usize::from(cli.length);
    let interactive = !matches!(cli.command, Some(Commands::Query { .. }));

    let result = match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&dictionary, length),
        Commands::Play => run_play_command(&dictionary, length),
        Commands::Query {
            pattern,
            include,
            exclude,
            limit,
        } => {
            let config = QueryConfig {
                pattern,
                include,
                exclude,
                limit,
            };
            run_query(&dictionary, &config).map(|_| ())
        }
    };

    if cli.keep_dictionary {
        if dictionary.was_downloaded() {
            tracing::info!(path = %dictionary.path().display(), "keeping downloaded dictionary");
            if interactive {
                say(
                    &format!("Keeping downloaded dictionary: {}", dictionary.path().display()),
                    Tone::Info,
                );
            }
        }
    } else {
        cleanup(&dictionary, interactive);
    }
    if interactive {
        say("Goodbye!", Tone::Success);
    }

    result
}

fn run_play_command(dictionary: &Dictionary, length: usize) -> Result<()> {
    use word_pattern_filter::interactive::{App, run_tui};

    let app = App::new(dictionary, length);
    run_tui(app)
}

/// Remove a dictionary downloaded this session, reporting the outcome
fn cleanup(dictionary: &Dictionary, verbose: bool) {
    match dictionary.remove_downloaded() {
        Ok(Some(path)) if verbose => {
            say(
                &format!("Deleted cached dictionary: {}", path.display()),
                Tone::Info,
            );
        }
        Ok(_) => {}
        Err(err) => {
            tracing::warn!(%err, path = %dictionary.path().display(), "could not delete dictionary");
            if verbose {
                say(
                    &format!("Could not delete {}: {err}", dictionary.path().display()),
                    Tone::Error,
                );
            }
        }
    }
}
