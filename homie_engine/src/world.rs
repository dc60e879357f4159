//! Static world catalog.
//!
//! [`HomieWorld`] is built once from a validated [`WorldDef`] and never changes during a
//! session. Everything that moves lives in [`GameState`](crate::state::GameState).

use std::collections::BTreeMap;

use homie_data::{Direction, GoalId, LocationRef, RoomId, ThingId, WorldDef};
use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::goal::Goal;
use crate::loader::LoadError;

/// Places a thing can be: a visitable room or one of the two bookkeeping pseudo-locations.
#[derive(Copy, Debug, Default, Clone, Serialize, Deserialize, Variantly, PartialEq, Eq, Hash)]
pub enum Location {
    /// Removed from play (or not yet in play).
    #[default]
    Nowhere,
    /// Carried by the player.
    Inventory,
    Room(RoomId),
}

impl From<LocationRef> for Location {
    fn from(value: LocationRef) -> Self {
        match value {
            LocationRef::Nowhere => Location::Nowhere,
            LocationRef::Inventory => Location::Inventory,
            LocationRef::Room(room) => Location::Room(room),
        }
    }
}

/// A visitable room with its outgoing exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub exits: BTreeMap<Direction, RoomId>,
}

impl Room {
    /// Destination of the exit in `direction`, if this room has one.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Available exit directions in compass order.
    pub fn directions(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }
}

/// Any interactive noun: item, fixture or NPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thing {
    pub id: ThingId,
    pub name: String,
    pub description: String,
    pub start: Location,
}

/// Immutable catalog of rooms, things and goals.
///
/// Every [`RoomId`] and [`ThingId`] is guaranteed to be present, so lookups cannot fail.
#[derive(Debug, Clone)]
pub struct HomieWorld {
    pub title: String,
    pub intro: String,
    pub start_room: RoomId,
    rooms: Vec<Room>,
    things: Vec<Thing>,
    goals: Vec<Goal>,
}

impl HomieWorld {
    /// Build the catalog from a world definition.
    ///
    /// # Errors
    /// - `LoadError::Incomplete` if any room, thing or goal identifier has no definition.
    pub fn from_def(def: &WorldDef) -> Result<HomieWorld, LoadError> {
        let mut rooms = Vec::with_capacity(RoomId::ALL.len());
        for id in RoomId::ALL {
            let room_def = def
                .rooms
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| LoadError::Incomplete(format!("room {id}")))?;
            rooms.push(Room {
                id,
                name: room_def.name.clone(),
                description: room_def.desc.clone(),
                exits: room_def.exits.iter().map(|exit| (exit.direction, exit.to)).collect(),
            });
        }

        let mut things = Vec::with_capacity(ThingId::ALL.len());
        for id in ThingId::ALL {
            let thing_def = def
                .things
                .iter()
                .find(|t| t.id == id)
                .ok_or_else(|| LoadError::Incomplete(format!("thing {id}")))?;
            things.push(Thing {
                id,
                name: thing_def.name.clone(),
                description: thing_def.desc.clone(),
                start: thing_def.location.into(),
            });
        }

        let goals = def.goals.iter().map(Goal::from_def).collect::<Vec<_>>();
        if let Some(missing) = GoalId::ALL.iter().find(|id| !goals.iter().any(|g| g.id == **id)) {
            return Err(LoadError::Incomplete(format!("goal {missing}")));
        }

        Ok(HomieWorld {
            title: def.game.title.clone(),
            intro: def.game.intro.clone(),
            start_room: def.game.start_room,
            rooms,
            things,
            goals,
        })
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn thing(&self, id: ThingId) -> &Thing {
        &self.things[id.index()]
    }

    /// Display name of a thing, as authored.
    pub fn name(&self, id: ThingId) -> &str {
        &self.thing(id).name
    }

    /// Display name with the first letter capitalized, for sentence starts.
    pub fn title_name(&self, id: ThingId) -> String {
        crate::helpers::capitalize(self.name(id))
    }

    /// Display names for a list of things, in order.
    pub fn names(&self, ids: &[ThingId]) -> Vec<String> {
        ids.iter().map(|id| self.name(*id).to_string()).collect()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Things in catalog order.
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// Goals in checklist order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }
}
