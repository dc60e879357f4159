use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingDefinition { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    DuplicateExit { room: String, direction: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingDefinition { kind, id } => {
                write!(f, "{kind} '{id}' is never defined")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::DuplicateExit { room, direction } => {
                write!(f, "room '{room}' declares more than one '{direction}' exit")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// Exits are allowed to be one-way; nothing here forces a matching reverse exit.
///
/// ```
/// use homie_data::{GameDef, RoomDef, RoomId, ValidationError, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         start_room: RoomId::Entrance,
///     },
///     rooms: vec![RoomDef {
///         id: RoomId::Entrance,
///         name: "Entrance".into(),
///         desc: "A doorway.".into(),
///         exits: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// let errors = validate_world(&world);
/// assert!(errors.contains(&ValidationError::MissingDefinition { kind: "room", id: "Lobby".into() }));
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let rooms = track_ids("room", world.rooms.iter().map(|r| r.id), &mut errors);
    let things = track_ids("thing", world.things.iter().map(|t| t.id), &mut errors);
    let goals = track_ids("goal", world.goals.iter().map(|g| g.id), &mut errors);

    require_all("room", &RoomId::ALL, &rooms, &mut errors);
    require_all("thing", &ThingId::ALL, &things, &mut errors);
    require_all("goal", &GoalId::ALL, &goals, &mut errors);

    check_room(
        world.game.start_room,
        &rooms,
        "game start room".to_string(),
        &mut errors,
    );

    for room in &world.rooms {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' has a blank name", room.id),
            });
        }
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction) {
                errors.push(ValidationError::DuplicateExit {
                    room: room.id.to_string(),
                    direction: exit.direction.to_string(),
                });
            }
            check_room(
                exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
    }

    for thing in &world.things {
        if thing.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("thing '{}' has a blank name", thing.id),
            });
        }
        if let LocationRef::Room(room) = thing.location {
            check_room(
                room,
                &rooms,
                format!("thing '{}' starting location", thing.id),
                &mut errors,
            );
        }
    }

    for goal in &world.goals {
        if let GoalConditionDef::ThingAt {
            location: LocationRef::Room(room),
            ..
        } = goal.finished_when
        {
            check_room(room, &rooms, format!("goal '{}' condition", goal.id), &mut errors);
        }
    }

    errors
}

fn track_ids<T>(kind: &'static str, ids: impl Iterator<Item = T>, errors: &mut Vec<ValidationError>) -> HashSet<T>
where
    T: Copy + Eq + std::hash::Hash + fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    seen
}

fn require_all<T>(kind: &'static str, all: &[T], defined: &HashSet<T>, errors: &mut Vec<ValidationError>)
where
    T: Copy + Eq + std::hash::Hash + fmt::Display,
{
    for id in all {
        if !defined.contains(id) {
            errors.push(ValidationError::MissingDefinition {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_room(room: RoomId, rooms: &HashSet<RoomId>, context: String, errors: &mut Vec<ValidationError>) {
    if !rooms.contains(&room) {
        errors.push(ValidationError::MissingReference {
            kind: "room",
            id: room.to_string(),
            context,
        });
    }
}
