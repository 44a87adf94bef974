//! Canned dictionary data shared by the harnesses.

use super::builders::{entries_body, noun_entry, verb_entry, LexicalEntryBuilder};
use serde_json::Value;

pub const BAT_ANIMAL: &str = "late 16th century: alteration of Middle English bakke, of Scandinavian origin";
pub const BAT_CLUB: &str = "Old English batt 'club, stick, staff', perhaps partly from Old French batte";
pub const RUN_VERB: &str = "Old English rinnan, irnan (verb), of Germanic origin";
pub const RUN_NOUN: &str = "Middle English: from the verb run";
pub const LEMUR: &str = "late 18th century: modern Latin, from Latin lemures 'spirits of the dead'";

/// `bat`: a club noun then an animal noun, each with its own etymology.
pub fn bat_entries() -> Value {
    entries_body(
        "bat",
        vec![
            LexicalEntryBuilder::new("Noun")
                .sense(&[BAT_CLUB])
                .definition("an implement with a handle and a solid surface, used for hitting the ball in games")
                .build(),
            LexicalEntryBuilder::new("Noun")
                .sense(&[BAT_ANIMAL])
                .definition("a mainly nocturnal flying mammal with membranous wings")
                .build(),
        ],
    )
}

/// `run`: verb first, then noun.
pub fn run_entries() -> Value {
    entries_body("run", vec![verb_entry(RUN_VERB), noun_entry(RUN_NOUN)])
}

/// `running`: an adjective and noun with no etymology of their own.
pub fn running_entries() -> Value {
    entries_body(
        "running",
        vec![
            LexicalEntryBuilder::new("Noun").bare_sense().build(),
            LexicalEntryBuilder::new("Adjective").bare_sense().build(),
        ],
    )
}

pub fn lemur_entries() -> Value {
    entries_body("lemur", vec![noun_entry(LEMUR)])
}
