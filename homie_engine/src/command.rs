//! Command module
//!
//! Turns a raw input line into a [`Command`]: the first word picks the verb from a fixed
//! table, the remaining words are looked up in the vocabulary.

use std::collections::HashMap;

use homie_data::{Direction, ThingId};
use lazy_static::lazy_static;
use log::debug;
use variantly::Variantly;

use crate::vocabulary::Vocabulary;

/// Every verb the interpreter knows, after synonyms are folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go(Direction),
    Look,
    Read,
    Talk,
    Get,
    Drop,
    Inventory,
    Open,
    Shower,
    Clean,
    Mop,
    Eat,
    Sleep,
    Rinse,
    Checklist,
    Quit,
    Help,
}

lazy_static! {
    /// Verb table. Synonyms are separate keys for the same verb.
    pub static ref VERBS: HashMap<&'static str, Verb> = {
        let mut verbs = HashMap::new();
        let directions = [
            (["north", "n"], Direction::North),
            (["northeast", "ne"], Direction::NorthEast),
            (["east", "e"], Direction::East),
            (["southeast", "se"], Direction::SouthEast),
            (["south", "s"], Direction::South),
            (["southwest", "sw"], Direction::SouthWest),
            (["west", "w"], Direction::West),
            (["northwest", "nw"], Direction::NorthWest),
            (["down", "d"], Direction::Down),
            (["up", "u"], Direction::Up),
        ];
        for (words, direction) in directions {
            for word in words {
                verbs.insert(word, Verb::Go(direction));
            }
        }
        let others: [(&[&'static str], Verb); 16] = [
            (&["l", "look"], Verb::Look),
            (&["read"], Verb::Read),
            (&["talk"], Verb::Talk),
            (&["get", "pick", "take"], Verb::Get),
            (&["drop", "set", "place", "throw"], Verb::Drop),
            (&["i", "inventory"], Verb::Inventory),
            (&["open"], Verb::Open),
            (&["shower"], Verb::Shower),
            (&["clean"], Verb::Clean),
            (&["mop"], Verb::Mop),
            (&["eat"], Verb::Eat),
            (&["sleep"], Verb::Sleep),
            (&["rinse"], Verb::Rinse),
            (&["checklist"], Verb::Checklist),
            (&["end", "quit", "exit"], Verb::Quit),
            (&["help", "?"], Verb::Help),
        ];
        for (words, verb) in others {
            for word in words {
                verbs.insert(*word, verb);
            }
        }
        verbs
    };
}

/// A recognized verb with everything the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub verb: Verb,
    /// All tokens, lowercased, verb first.
    pub words: Vec<String>,
    /// Things named after the verb, in order, duplicates kept.
    pub things: Vec<ThingId>,
}

impl Instruction {
    /// True if nothing followed the verb.
    pub fn is_bare(&self) -> bool {
        self.words.len() == 1
    }

    /// Tokens after the verb.
    pub fn args(&self) -> &[String] {
        self.words.get(1..).unwrap_or_default()
    }
}

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Nothing but whitespace.
    Empty,
    /// The first word isn't a verb we know.
    Unknown(String),
    Instruction(Instruction),
}

/// Parses an input line against the verb table and the current vocabulary.
pub fn parse_command(input: &str, vocabulary: &Vocabulary) -> Command {
    let words: Vec<String> = input.to_lowercase().split_whitespace().map(str::to_string).collect();
    let Some(first) = words.first() else {
        return Command::Empty;
    };
    let Some(verb) = VERBS.get(first.as_str()).copied() else {
        debug!("unknown verb '{first}'");
        return Command::Unknown(first.clone());
    };
    let things = vocabulary.resolve_all(&words[1..]);
    debug!("parsed {verb:?} with things {things:?}");
    Command::Instruction(Instruction { verb, words, things })
}
