//! Password strength scoring.
//!
//! The score is a weighted sum: length earns up to 30 points (full marks at
//! 16 characters and beyond), each character class present earns 10-20
//! points, and a high ratio of distinct characters earns 10. Runs of
//! identical or sequential characters and blocklisted common-password
//! fragments subtract points. The result is clamped to 0..=100 and mapped to
//! a rating: below 40 is WEAK, below 60 FAIR, below 80 GOOD, otherwise
//! STRONG.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Fragments of passwords that show up in every leaked-credential dump.
/// Matched case-insensitively as substrings.
static BLOCKLIST: &[&str] = &[
    "password", "qwerty", "letmein", "welcome", "admin", "iloveyou", "monkey", "dragon", "123456",
    "abc123",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Rating {
    fn for_score(score: u8) -> Rating {
        match score {
            0..=39 => Rating::Weak,
            40..=59 => Rating::Fair,
            60..=79 => Rating::Good,
            _ => Rating::Strong,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rating::Weak => "WEAK",
            Rating::Fair => "FAIR",
            Rating::Good => "GOOD",
            Rating::Strong => "STRONG",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub rating: Rating,
    pub suggestions: Vec<&'static str>,
}

/// Score a password. Pure: the same input always produces the same report.
pub fn analyze(password: &str) -> StrengthReport {
    let mut score: i32 = 0;
    let mut suggestions = Vec::new();

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();

    if length >= 16 {
        score += 30;
    } else if length >= 12 {
        score += 20;
        suggestions.push("use 16 or more characters for a stronger password");
    } else if length >= 8 {
        score += 10;
        suggestions.push("password is short, use 12 or more characters");
    } else {
        suggestions.push("use at least 8 characters");
    }

    if chars.iter().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    } else {
        suggestions.push("add lowercase letters");
    }
    if chars.iter().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    } else {
        suggestions.push("add uppercase letters");
    }
    if chars.iter().any(|c| c.is_ascii_digit()) {
        score += 15;
    } else {
        suggestions.push("add digits");
    }
    if chars.iter().any(|c| !c.is_alphanumeric()) {
        score += 20;
    } else {
        suggestions.push("add symbols");
    }

    if length > 0 {
        let distinct = chars.iter().collect::<HashSet<_>>().len();
        let ratio = distinct as f64 / length as f64;
        if ratio > 0.7 {
            score += 10;
        } else if ratio < 0.5 {
            suggestions.push("too many repeated characters");
        }
    }

    if has_identical_run(&chars) {
        score -= 10;
        suggestions.push("avoid repeating the same character");
    }
    if has_sequential_run(&chars) {
        score -= 15;
        suggestions.push("avoid sequential runs like abc or 123");
    }
    if is_blocklisted(password) {
        score -= 20;
        suggestions.push("avoid common words like password or qwerty");
    }

    let score = score.clamp(0, 100) as u8;
    StrengthReport {
        score,
        rating: Rating::for_score(score),
        suggestions,
    }
}

/// Three or more of the same character in a row.
fn has_identical_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Three or more consecutive codepoints in a row, in either direction
/// ("abc", "321").
fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as i64, w[1] as i64, w[2] as i64);
        (b - a == 1 && c - b == 1) || (a - b == 1 && b - c == 1)
    })
}

fn is_blocklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    BLOCKLIST.iter().any(|entry| lowered.contains(entry))
}
