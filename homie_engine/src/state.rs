//! Mutable world state for a running session.
//!
//! A thing's entry in `placements` is the only record of where it is, so "is it here" and
//! "do I have it" are both answered from the same map.

use std::collections::{BTreeMap, BTreeSet};

use homie_data::{GoalId, RoomId, ThingId};
use log::info;

use crate::world::{HomieWorld, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_room: RoomId,
    placements: BTreeMap<ThingId, Location>,
    seen: BTreeSet<RoomId>,
    goals: BTreeMap<GoalId, bool>,
}

impl GameState {
    /// Fresh state: every thing at its starting location, nothing seen, no goal complete.
    pub fn new(world: &HomieWorld) -> GameState {
        GameState {
            current_room: world.start_room,
            placements: world.things().iter().map(|t| (t.id, t.start)).collect(),
            seen: BTreeSet::new(),
            goals: world.goals().iter().map(|g| (g.id, false)).collect(),
        }
    }

    pub fn location_of(&self, thing: ThingId) -> Location {
        self.placements.get(&thing).copied().unwrap_or_default()
    }

    pub fn thing_at(&self, thing: ThingId, location: Location) -> bool {
        self.location_of(thing) == location
    }

    /// The player's current room as a [`Location`].
    pub fn here(&self) -> Location {
        Location::Room(self.current_room)
    }

    /// True if the thing is in the room the player is standing in.
    pub fn is_here(&self, thing: ThingId) -> bool {
        self.thing_at(thing, self.here())
    }

    /// True if the player is carrying the thing.
    pub fn has(&self, thing: ThingId) -> bool {
        self.thing_at(thing, Location::Inventory)
    }

    /// True if the thing is either here or carried.
    pub fn available(&self, thing: ThingId) -> bool {
        self.is_here(thing) || self.has(thing)
    }

    pub fn move_thing(&mut self, thing: ThingId, location: Location) {
        info!("{thing} moved to {location:?}");
        self.placements.insert(thing, location);
    }

    /// Exchange the locations of two things.
    pub fn swap_things(&mut self, first: ThingId, second: ThingId) {
        let first_location = self.location_of(first);
        let second_location = self.location_of(second);
        self.move_thing(first, second_location);
        self.move_thing(second, first_location);
    }

    /// Things at a location, in catalog order.
    pub fn things_at(&self, location: Location) -> Vec<ThingId> {
        self.placements
            .iter()
            .filter(|(_, loc)| **loc == location)
            .map(|(thing, _)| *thing)
            .collect()
    }

    pub fn has_seen(&self, room: RoomId) -> bool {
        self.seen.contains(&room)
    }

    pub fn mark_seen(&mut self, room: RoomId) {
        self.seen.insert(room);
    }

    pub fn goal_complete(&self, goal: GoalId) -> bool {
        self.goals.get(&goal).copied().unwrap_or(false)
    }

    pub fn set_goal(&mut self, goal: GoalId, complete: bool) {
        if self.goal_complete(goal) != complete {
            info!("goal {goal} is now {}", if complete { "complete" } else { "incomplete" });
        }
        self.goals.insert(goal, complete);
    }

    pub fn all_goals_complete(&self) -> bool {
        self.goals.values().all(|done| *done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_session;

    #[test]
    fn starts_from_catalog() {
        let session = test_session();
        let state = &session.state;
        assert_eq!(state.current_room, RoomId::Entrance);
        assert_eq!(state.location_of(ThingId::Suitcase), Location::Room(RoomId::Lobby));
        assert!(state.has(ThingId::Checklist));
        assert!(!state.has_seen(RoomId::Entrance));
        assert!(!state.all_goals_complete());
    }

    #[test]
    fn swap_exchanges_locations() {
        let mut state = test_session().state;
        state.move_thing(ThingId::DirtyPlate, Location::Inventory);
        state.swap_things(ThingId::DirtyPlate, ThingId::RinsedPlate);
        assert!(state.has(ThingId::RinsedPlate));
        assert!(state.thing_at(ThingId::DirtyPlate, Location::Nowhere));
    }

    #[test]
    fn every_thing_has_exactly_one_location() {
        let mut state = test_session().state;
        state.move_thing(ThingId::Mop, Location::Inventory);
        state.swap_things(ThingId::EmptyDesk, ThingId::YourDesk);
        let mut total = 0;
        for location in [Location::Nowhere, Location::Inventory]
            .into_iter()
            .chain(RoomId::ALL.into_iter().map(Location::Room))
        {
            total += state.things_at(location).len();
        }
        assert_eq!(total, ThingId::ALL.len());
    }

    #[test]
    fn available_covers_room_and_inventory() {
        let mut state = test_session().state;
        state.current_room = RoomId::Lobby;
        assert!(state.available(ThingId::Suitcase));
        state.move_thing(ThingId::Suitcase, Location::Inventory);
        assert!(state.available(ThingId::Suitcase));
        state.current_room = RoomId::Reception;
        assert!(state.available(ThingId::Suitcase));
        assert!(!state.is_here(ThingId::James));
    }
}
