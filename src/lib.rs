use serde::{Deserialize, Serialize};

pub mod generation;
mod history;
mod strength;
mod wordlist;

pub use history::{EntryKind, History, HistoryEntry};
pub use strength::{analyze, Rating, StrengthReport};

/// A generated credential (password or passphrase).
///
/// The `Debug` representation is redacted, so a `Secret` embedded in a larger
/// structure never ends up in debug output by accident.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct RequestError(RequestErrorRepr);

impl From<RequestErrorRepr> for RequestError {
    fn from(err: RequestErrorRepr) -> RequestError {
        RequestError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum RequestErrorRepr {
    #[error("the character pool is empty; enable at least one character class")]
    EmptyPool,
    #[error("password length must be at least 1")]
    ZeroLength,
    #[error("word count must be at least 1")]
    ZeroWordCount,
}
