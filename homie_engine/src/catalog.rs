//! Fixed allow-lists that give things their gameplay roles.
//!
//! The world file decides where things are and what they are called. What a thing can be
//! used for is engine knowledge, kept here so every handler checks the same lists.

use homie_data::{RoomId, ThingId};

/// Things that can be picked up and dropped.
pub const GETTABLE: [ThingId; 8] = [
    ThingId::Suitcase,
    ThingId::CleanPlate,
    ThingId::DirtyPlate,
    ThingId::RinsedPlate,
    ThingId::Computer,
    ThingId::Mop,
    ThingId::Hair,
    ThingId::Meatballs,
];

pub const READABLE: [ThingId; 2] = [ThingId::Checklist, ThingId::BathroomSign];

pub const TALKABLE: [ThingId; 1] = [ThingId::James];

/// Every identifier that stands for "the plate" in one of its conditions.
pub const PLATES: [ThingId; 3] = [ThingId::DirtyPlate, ThingId::CleanPlate, ThingId::RinsedPlate];

/// Rooms with a sink where plates can be rinsed.
pub const SINK_ROOMS: [RoomId; 3] = [RoomId::Scullery, RoomId::HomiesKitchen, RoomId::NorthWingBathroom];

/// Things the player must not have around when showering, checked in this order.
pub const SHOWER_BLOCKERS: [ThingId; 2] = [ThingId::Suitcase, ThingId::Computer];

/// Words that turn get/drop into an "everything" command.
pub const EVERYTHING_WORDS: [&str; 2] = ["everything", "all"];

pub fn is_gettable(thing: ThingId) -> bool {
    GETTABLE.contains(&thing)
}

pub fn is_readable(thing: ThingId) -> bool {
    READABLE.contains(&thing)
}

pub fn is_talkable(thing: ThingId) -> bool {
    TALKABLE.contains(&thing)
}

pub fn is_plate(thing: ThingId) -> bool {
    PLATES.contains(&thing)
}

pub fn has_sink(room: RoomId) -> bool {
    SINK_ROOMS.contains(&room)
}

/// True if any of the words asks for everything.
pub fn mentions_everything(words: &[String]) -> bool {
    words.iter().any(|w| EVERYTHING_WORDS.contains(&w.as_str()))
}
