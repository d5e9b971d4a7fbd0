//! Utilities for generating passwords and passphrases.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{RequestError, RequestErrorRepr, Secret};

static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static DIGITS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to misread when copying a password by hand.
static AMBIGUOUS: &str = "il1Lo0O";

/// Settings for a random password. Lowercase letters are always part of the
/// pool; the other classes are opt-out.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRequest {
    pub length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordRequest {
    fn default() -> PasswordRequest {
        PasswordRequest {
            length: 16,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

/// Settings for a word-based passphrase.
#[derive(Debug, Clone)]
pub struct PassphraseRequest {
    pub word_count: usize,
    pub separator: String,
}

impl Default for PassphraseRequest {
    fn default() -> PassphraseRequest {
        PassphraseRequest {
            word_count: 4,
            separator: "-".to_owned(),
        }
    }
}

/// Generate a password by sampling the configured character pool uniformly,
/// one character at a time.
///
/// These are ugly, hard to remember passwords, but perfect if you're just
/// copying them from a password manager.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to
/// prevent bias: if it can't generate a value that is within the given range
/// (or really, a multiple of the range), it re-samples. The `CryptoRng` bound
/// keeps statistical PRNGs out; callers pass something like
/// `rand::thread_rng()`.
pub fn generate_password<R>(rng: &mut R, request: &PasswordRequest) -> Result<Secret, RequestError>
where
    R: Rng + CryptoRng,
{
    if request.length == 0 {
        return Err(RequestErrorRepr::ZeroLength.into());
    }
    let pool = character_pool(request);
    if pool.is_empty() {
        return Err(RequestErrorRepr::EmptyPool.into());
    }

    let mut secret = String::with_capacity(request.length);
    for _ in 0..request.length {
        secret.push(*pool.choose(rng).unwrap());
    }
    Ok(Secret::from(secret))
}

/// Generate a passphrase by sampling the embedded word list uniformly.
/// Each word is drawn independently, so a word can appear twice.
pub fn generate_passphrase<R>(
    rng: &mut R,
    request: &PassphraseRequest,
) -> Result<Secret, RequestError>
where
    R: Rng + CryptoRng,
{
    if request.word_count == 0 {
        return Err(RequestErrorRepr::ZeroWordCount.into());
    }

    let mut words = Vec::with_capacity(request.word_count);
    for _ in 0..request.word_count {
        words.push(*crate::wordlist::WORDS.choose(rng).unwrap());
    }
    Ok(Secret::from(words.join(&request.separator)))
}

fn character_pool(request: &PasswordRequest) -> Vec<char> {
    let mut pool: Vec<char> = LOWERCASE.chars().collect();
    if request.uppercase {
        pool.extend(UPPERCASE.chars());
    }
    if request.digits {
        pool.extend(DIGITS.chars());
    }
    if request.symbols {
        pool.extend(SYMBOLS.chars());
    }
    if request.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(*c));
    }
    pool
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn password_has_requested_length_and_stays_in_pool() {
        let mut rng = rng();
        let request = PasswordRequest::default();
        let pool = character_pool(&request);
        for length in [1, 8, 16, 64] {
            let secret = generate_password(&mut rng, &PasswordRequest { length, ..request }).unwrap();
            assert_eq!(secret.as_str().chars().count(), length);
            assert!(secret.as_str().chars().all(|c| pool.contains(&c)));
        }
    }

    #[test]
    fn lowercase_only_request_yields_lowercase() {
        let mut rng = rng();
        let request = PasswordRequest {
            length: 48,
            uppercase: false,
            digits: false,
            symbols: false,
            exclude_ambiguous: false,
        };
        let secret = generate_password(&mut rng, &request).unwrap();
        assert!(secret.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn ambiguous_characters_never_appear_when_excluded() {
        let mut rng = rng();
        let request = PasswordRequest {
            length: 16,
            exclude_ambiguous: true,
            ..PasswordRequest::default()
        };
        for _ in 0..200 {
            let secret = generate_password(&mut rng, &request).unwrap();
            assert!(
                secret.as_str().chars().all(|c| !AMBIGUOUS.contains(c)),
                "ambiguous character leaked into {:?}",
                secret.as_str()
            );
        }
    }

    #[test]
    fn all_enabled_classes_show_up_over_repeated_trials() {
        let mut rng = rng();
        let request = PasswordRequest {
            exclude_ambiguous: true,
            ..PasswordRequest::default()
        };
        let mut trials_with_all_classes = 0;
        for _ in 0..200 {
            let secret = generate_password(&mut rng, &request).unwrap();
            let s = secret.as_str();
            let all_present = s.chars().any(|c| c.is_ascii_lowercase())
                && s.chars().any(|c| c.is_ascii_uppercase())
                && s.chars().any(|c| c.is_ascii_digit())
                && s.chars().any(|c| SYMBOLS.contains(c));
            if all_present {
                trials_with_all_classes += 1;
            }
        }
        // With 8 of 81 pool characters being digits, a 16-character draw
        // misses the digit class roughly one time in five; every other class
        // is near-certain. Expect all four classes in ~80% of trials.
        assert!(trials_with_all_classes >= 140);
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = rng();
        let request = PasswordRequest {
            length: 0,
            ..PasswordRequest::default()
        };
        let err = generate_password(&mut rng, &request).unwrap_err();
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn passphrase_joins_words_from_the_list() {
        let mut rng = rng();
        let request = PassphraseRequest {
            word_count: 5,
            separator: "..".to_owned(),
        };
        let secret = generate_passphrase(&mut rng, &request).unwrap();
        let words: Vec<&str> = secret.as_str().split("..").collect();
        assert_eq!(words.len(), 5);
        for word in words {
            assert!(crate::wordlist::WORDS.contains(&word), "unknown word {word:?}");
        }
    }

    #[test]
    fn zero_word_count_is_rejected() {
        let mut rng = rng();
        let request = PassphraseRequest {
            word_count: 0,
            separator: "-".to_owned(),
        };
        assert!(generate_passphrase(&mut rng, &request).is_err());
    }
}
