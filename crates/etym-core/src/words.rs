//! Built-in word pool for "surprise me" requests and suggestion chips.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Headword;

pub const RANDOM_WORDS: &[&str] = &[
    "helicopter", "jumbo", "sarcasm", "decimate", "lemur", "sideburn", "loophole", "nice",
    "muscle", "pamphlet", "mortgage", "electric", "alcohol", "manticore", "journal", "dunce",
    "nightmare", "sandwich", "malaria", "quarantine", "clue", "genuine", "palace", "ketchup",
    "ostracize", "robot", "assassin", "nimrod", "ampersand", "boycott", "hearse", "gymnasium",
    "peninsula", "vaccine", "nostalgia", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday", "January", "February", "April", "June", "July", "August", "September",
    "hysteric", "goodbye", "plumber", "serendipity", "mastodon", "cretin", "apron", "cobalt",
    "slave", "influenza", "pandemonium", "walrus", "casino", "noon", "trivia", "checkmate",
    "penguin", "vodka", "cloud", "salad", "supercilious", "freelance", "bully", "female",
    "alcove", "parasite", "disaster", "torpedo", "apostrophe", "pedagogue", "jinx", "oxymoron",
    "booze", "album", "umpire", "nickname", "newt", "stigma", "burrito", "maverick", "dinosaur",
];

/// Headword for a pool word: display as-is, id lowercased with `_` for spaces.
pub fn headword_for(word: &str) -> Headword {
    Headword::new(word, word.to_lowercase().replace(' ', "_"))
}

/// Any pool word.
pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    RANDOM_WORDS.choose(rng).copied().unwrap_or(RANDOM_WORDS[0])
}

pub fn random_headword<R: Rng + ?Sized>(rng: &mut R) -> Headword {
    headword_for(random_word(rng))
}
