//! The interactive session: a menu looping over the four actions, holding
//! the session history.

use std::io;

use anyhow::Context;
use console::style;
use rand::rngs::ThreadRng;

use crate::{prompts, report, ProgError};
use pwkit::{EntryKind, History};

pub(crate) fn run() -> Result<(), ProgError> {
    eprintln!("{}", style("pwkit").bold());
    eprintln!("Generate passwords and passphrases, and score their strength.");
    eprintln!();

    let mut rng = rand::thread_rng();
    let mut history = History::default();

    static ACTIONS: &[&str] = &[
        "Generate a password",
        "Generate a passphrase",
        "Score a password",
        "Show recent history",
        "Quit",
    ];

    loop {
        let selection =
            dialoguer::FuzzySelect::with_theme(&dialoguer::theme::ColorfulTheme::default())
                .with_prompt("What would you like to do?")
                .items(ACTIONS)
                .default(0)
                .interact_opt()
                .context("failed to query your selection")?;
        match selection {
            Some(0) => generate_password(&mut rng, &mut history)?,
            Some(1) => generate_passphrase(&mut rng, &mut history)?,
            Some(2) => score_password()?,
            Some(3) => show_history(&history)?,
            // Esc quits, same as the menu entry.
            Some(4) | None => break,
            Some(_) => panic!(),
        }
    }

    eprintln!("Bye.");
    Ok(())
}

fn generate_password(rng: &mut ThreadRng, history: &mut History) -> Result<(), ProgError> {
    let request = pwkit::generation::PasswordRequest {
        length: prompts::positive_number("Password length", 16)?,
        uppercase: prompts::confirm("Include uppercase letters?", true)?,
        digits: prompts::confirm("Include digits?", true)?,
        symbols: prompts::confirm("Include symbols?", true)?,
        exclude_ambiguous: prompts::confirm("Exclude ambiguous characters (il1Lo0O)?", false)?,
    };

    match pwkit::generation::generate_password(rng, &request) {
        Ok(secret) => {
            report::show_generated(&secret);
            history.record(EntryKind::Password, secret);
        }
        Err(err) => eprintln!("{}", style(err).red()),
    }
    Ok(())
}

fn generate_passphrase(rng: &mut ThreadRng, history: &mut History) -> Result<(), ProgError> {
    let request = pwkit::generation::PassphraseRequest {
        word_count: prompts::positive_number("Number of words", 4)?,
        separator: prompts::separator()?,
    };

    match pwkit::generation::generate_passphrase(rng, &request) {
        Ok(secret) => {
            report::show_generated(&secret);
            history.record(EntryKind::Passphrase, secret);
        }
        Err(err) => eprintln!("{}", style(err).red()),
    }
    Ok(())
}

fn score_password() -> Result<(), ProgError> {
    let password = loop {
        let input = rpassword::prompt_password("Password to score: ")
            .context("failed to read password from TTY")?;
        if input.is_empty() {
            eprintln!("Nothing entered; try again.");
            continue;
        }
        break input;
    };
    report::show(&pwkit::analyze(&password));
    Ok(())
}

fn show_history(history: &History) -> Result<(), ProgError> {
    if history.is_empty() {
        eprintln!("Nothing generated yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = history
        .recent(10)
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            vec![
                (index + 1).to_string(),
                entry.kind.to_string(),
                entry.secret.as_str().to_owned(),
                entry.generated_at.format("%H:%M:%S").to_string(),
            ]
        })
        .collect();
    crate::table::display_table(&["#", "Kind", "Value", "Generated"], &rows, io::stdout())
        .context("failed to output table")?;
    Ok(())
}
