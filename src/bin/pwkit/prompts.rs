//! Parameter prompts. Invalid numeric input re-prompts rather than failing.

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;

pub(crate) fn positive_number(prompt: &str, default: usize) -> anyhow::Result<usize> {
    dialoguer::Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .validate_with(|n: &usize| -> Result<(), &str> {
            if *n >= 1 {
                Ok(())
            } else {
                Err("must be at least 1")
            }
        })
        .interact_text()
        .context("failed to read a number from the prompt")
}

pub(crate) fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    dialoguer::Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .context("failed to prompt you, somehow")
}

pub(crate) fn separator() -> anyhow::Result<String> {
    dialoguer::Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Separator")
        .default("-".to_owned())
        .interact_text()
        .context("failed to read the separator from the prompt")
}
