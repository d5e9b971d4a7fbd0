//! Rendering of strength reports.
//!
//! Generated values go to stdout so they can be piped; everything else goes
//! to stderr.

use console::style;

use pwkit::{Rating, Secret, StrengthReport};

pub(crate) fn show_generated(secret: &Secret) {
    println!("{}", secret.as_str());
    show(&pwkit::analyze(secret.as_str()));
}

pub(crate) fn show(strength: &StrengthReport) {
    let rating = match strength.rating {
        Rating::Weak => style(strength.rating).red().bold(),
        Rating::Fair => style(strength.rating).yellow().bold(),
        Rating::Good => style(strength.rating).cyan().bold(),
        Rating::Strong => style(strength.rating).green().bold(),
    };
    eprintln!("Strength: {}/100 ({})", strength.score, rating);
    for suggestion in &strength.suggestions {
        eprintln!("  - {suggestion}");
    }
}
