//! module: goal
//!
//! Checklist goals. A goal is either derived from where things are, or latched by a scripted event.

use homie_data::{GoalConditionDef, GoalDef, GoalId, ThingId};
use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::world::Location;

/// What decides whether a goal is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalCondition {
    ThingAt { thing: ThingId, location: Location },
    Scripted,
}

impl GoalCondition {
    /// Evaluates a derived condition against current placement.
    ///
    /// Returns `None` for scripted goals, whose flag only an event handler may set.
    pub fn derive(&self, state: &GameState) -> Option<bool> {
        match self {
            GoalCondition::ThingAt { thing, location } => Some(state.thing_at(*thing, *location)),
            GoalCondition::Scripted => None,
        }
    }
}

/// A checklist entry for the player to achieve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub description: String,
    pub finished_when: GoalCondition,
}

impl Goal {
    pub fn from_def(def: &GoalDef) -> Goal {
        let finished_when = match def.finished_when {
            GoalConditionDef::ThingAt { thing, location } => GoalCondition::ThingAt {
                thing,
                location: location.into(),
            },
            GoalConditionDef::Scripted => GoalCondition::Scripted,
        };
        Goal {
            id: def.id,
            description: def.description.clone(),
            finished_when,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homie_data::{LocationRef, RoomId};

    use crate::testing::test_session;

    #[test]
    fn thing_at_goal_follows_placement() {
        let mut session = test_session();
        let cond = GoalCondition::ThingAt {
            thing: ThingId::Suitcase,
            location: Location::Room(RoomId::YourRoom),
        };
        assert_eq!(cond.derive(&session.state), Some(false));
        session
            .state
            .move_thing(ThingId::Suitcase, Location::Room(RoomId::YourRoom));
        assert_eq!(cond.derive(&session.state), Some(true));
    }

    #[test]
    fn scripted_goal_is_not_derived() {
        let session = test_session();
        assert_eq!(GoalCondition::Scripted.derive(&session.state), None);
    }

    #[test]
    fn def_conversion_maps_location() {
        let def = GoalDef {
            id: GoalId::DinnerEaten,
            description: "Eat dinner.".into(),
            finished_when: GoalConditionDef::ThingAt {
                thing: ThingId::Meatballs,
                location: LocationRef::Nowhere,
            },
        };
        let goal = Goal::from_def(&def);
        assert_eq!(
            goal.finished_when,
            GoalCondition::ThingAt {
                thing: ThingId::Meatballs,
                location: Location::Nowhere
            }
        );
    }
}
