//! The fixed word list passphrases are drawn from.

pub(crate) static WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot",
    "golf", "hotel", "india", "juliet", "kilo", "lima",
    "tiger", "ocean", "mountain", "river", "forest", "desert",
    "thunder", "lightning", "sunrise", "sunset", "moon", "star",
    "piano", "guitar", "violin", "drum", "flute", "trumpet",
    "ruby", "emerald", "sapphire", "diamond", "pearl", "amber",
];
