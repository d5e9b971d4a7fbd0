use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;

mod menu;
mod prompts;
mod report;
mod table;

/// Generate passwords and passphrases, and score their strength. Without a
/// subcommand, starts an interactive session.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a single random password and print it.
    Generate {
        #[arg(long, default_value_t = 16)]
        length: usize,
        /// Leave uppercase letters out of the pool.
        #[arg(long)]
        no_uppercase: bool,
        /// Leave digits out of the pool.
        #[arg(long)]
        no_digits: bool,
        /// Leave symbols out of the pool.
        #[arg(long)]
        no_symbols: bool,
        /// Drop characters that are easy to misread (il1Lo0O).
        #[arg(long)]
        exclude_ambiguous: bool,
    },
    /// Generate a word-based passphrase and print it.
    Passphrase {
        #[arg(long, default_value_t = 4)]
        words: usize,
        #[arg(long, default_value = "-")]
        separator: String,
    },
    /// Score a password's strength. The password is read from the terminal
    /// without echo.
    Analyze {
        /// Print the report as JSON instead of the human-readable form.
        #[arg(long)]
        json: bool,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args.command {
        None => menu::run()?,
        Some(Command::Generate {
            length,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
        }) => {
            let request = pwkit::generation::PasswordRequest {
                length,
                uppercase: !no_uppercase,
                digits: !no_digits,
                symbols: !no_symbols,
                exclude_ambiguous,
            };
            let secret = pwkit::generation::generate_password(&mut rand::thread_rng(), &request)?;
            println!("{}", secret.as_str());
        }
        Some(Command::Passphrase { words, separator }) => {
            let request = pwkit::generation::PassphraseRequest {
                word_count: words,
                separator,
            };
            let secret = pwkit::generation::generate_passphrase(&mut rand::thread_rng(), &request)?;
            println!("{}", secret.as_str());
        }
        Some(Command::Analyze { json }) => {
            let password = rpassword::prompt_password("Password to score: ")
                .context("failed to read password from TTY")?;
            if password.is_empty() {
                return Err(ProgError::NothingToScore);
            }
            let strength = pwkit::analyze(&password);
            if json {
                let stdout = io::stdout().lock();
                serde_json::to_writer_pretty(stdout, &strength)
                    .context("failed to write report as JSON to stdout")?;
                println!();
            } else {
                report::show(&strength);
            }
        }
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("No password entered; nothing to score.")]
    NothingToScore,
    #[error("Invalid settings: {0}")]
    Request(pwkit::RequestError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<pwkit::RequestError> for ProgError {
    fn from(err: pwkit::RequestError) -> ProgError {
        ProgError::Request(err)
    }
}
