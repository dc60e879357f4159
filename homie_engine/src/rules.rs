//! Per-turn world rules.
//!
//! Runs after every dispatched command. Steps are order-sensitive: the desk claim and the
//! plate change can feed into the goal check at the end of the same pass.

use homie_data::{RoomId, ThingId};
use log::info;

use crate::session::Session;
use crate::view::{View, ViewItem};
use crate::world::Location;

const SLEEP_HINT: &str = "Congratulations! You've completed all four goals. It's been a long day, so when you're ready to be evaluated, go to sleep in your room. Now is the chance for any last actions.";

/// Apply every rule once.
pub fn apply(session: &mut Session, view: &mut View) {
    derive_goals(session);
    claim_desk(session);
    dirty_plate(session);
    sleep_hint(session, view);
}

/// Recompute placement-derived goals. Scripted goals keep whatever their event set.
pub fn derive_goals(session: &mut Session) {
    for goal in session.world.goals() {
        if let Some(done) = goal.finished_when.derive(&session.state) {
            session.state.set_goal(goal.id, done);
        }
    }
}

/// Leaving the computer in the office takes the empty desk.
fn claim_desk(session: &mut Session) {
    let office = Location::Room(RoomId::LoudOffice);
    let state = &mut session.state;
    if state.thing_at(ThingId::Computer, office) && state.thing_at(ThingId::EmptyDesk, office) {
        state.swap_things(ThingId::EmptyDesk, ThingId::YourDesk);
        session.vocabulary.rebind("desk", ThingId::YourDesk);
        info!("desk claimed in the loud office");
    }
}

/// Carrying meatballs on the clean plate makes it the dirty plate.
fn dirty_plate(session: &mut Session) {
    let state = &mut session.state;
    if state.has(ThingId::Meatballs) && state.has(ThingId::CleanPlate) {
        state.swap_things(ThingId::CleanPlate, ThingId::DirtyPlate);
        session.vocabulary.rebind("plate", ThingId::DirtyPlate);
    }
}

fn sleep_hint(session: &mut Session, view: &mut View) {
    if session.state.all_goals_complete() && !session.sleep_hint_given {
        view.push(ViewItem::Hint(SLEEP_HINT.to_string()));
        session.sleep_hint_given = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_session;
    use homie_data::GoalId;

    #[test]
    fn derived_goals_follow_placement_both_ways() {
        let mut session = test_session();
        session
            .state
            .move_thing(ThingId::Suitcase, Location::Room(RoomId::YourRoom));
        derive_goals(&mut session);
        assert!(session.state.goal_complete(GoalId::SuitcaseInRoom));

        session.state.move_thing(ThingId::Suitcase, Location::Inventory);
        derive_goals(&mut session);
        assert!(!session.state.goal_complete(GoalId::SuitcaseInRoom));
    }

    #[test]
    fn scripted_goal_survives_recompute() {
        let mut session = test_session();
        session.state.set_goal(GoalId::ShowerTaken, true);
        derive_goals(&mut session);
        assert!(session.state.goal_complete(GoalId::ShowerTaken));
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut session = test_session();
        session
            .state
            .move_thing(ThingId::Computer, Location::Room(RoomId::LoudOffice));
        session.state.move_thing(ThingId::Meatballs, Location::Inventory);
        session.state.move_thing(ThingId::CleanPlate, Location::Inventory);
        let mut view = View::default();
        apply(&mut session, &mut view);
        let after_first = session.state.clone();
        apply(&mut session, &mut view);
        assert_eq!(session.state, after_first);
    }

    #[test]
    fn computer_claims_desk_once() {
        let mut session = test_session();
        let office = Location::Room(RoomId::LoudOffice);
        session.state.move_thing(ThingId::Computer, office);
        let mut view = View::default();
        apply(&mut session, &mut view);
        assert!(session.state.thing_at(ThingId::YourDesk, office));
        assert!(session.state.location_of(ThingId::EmptyDesk).is_nowhere());
        assert_eq!(session.vocabulary.resolve("desk"), Some(ThingId::YourDesk));
        assert!(session.state.goal_complete(GoalId::ComputerInOffice));
    }

    #[test]
    fn meatballs_dirty_the_clean_plate() {
        let mut session = test_session();
        session.state.move_thing(ThingId::Meatballs, Location::Inventory);
        session.state.move_thing(ThingId::CleanPlate, Location::Inventory);
        let mut view = View::default();
        apply(&mut session, &mut view);
        assert!(session.state.has(ThingId::DirtyPlate));
        assert!(session.state.location_of(ThingId::CleanPlate).is_nowhere());
        assert_eq!(session.vocabulary.resolve("plate"), Some(ThingId::DirtyPlate));
    }

    #[test]
    fn hint_fires_once() {
        let mut session = test_session();
        session
            .state
            .move_thing(ThingId::Suitcase, Location::Room(RoomId::YourRoom));
        session
            .state
            .move_thing(ThingId::Computer, Location::Room(RoomId::LoudOffice));
        session.state.move_thing(ThingId::Meatballs, Location::Nowhere);
        session.state.set_goal(GoalId::ShowerTaken, true);

        let mut view = View::default();
        apply(&mut session, &mut view);
        assert_eq!(view.items.iter().filter(|i| i.is_hint()).count(), 1);

        let mut view = View::default();
        apply(&mut session, &mut view);
        assert!(view.items.is_empty());
    }
}
