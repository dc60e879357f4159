//! End-of-day evaluation.
//!
//! A read-only pass over final placement. Feedback comes in sections the player pages
//! through, and any mistake switches the closing message.

use homie_data::{RoomId, ThingId};

use crate::state::GameState;
use crate::view::{View, ViewItem};
use crate::world::Location;

const BATHROOM: Location = Location::Room(RoomId::NorthWingBathroom);
const SCULLERY: Location = Location::Room(RoomId::Scullery);

/// Outcome of the evaluation: feedback sections in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub sections: Vec<Vec<String>>,
    pub mistakes: bool,
}

impl Verdict {
    /// Push every section, pausing after each one.
    pub fn show(&self, view: &mut View) {
        for section in &self.sections {
            for text in section {
                view.push(ViewItem::Evaluation(text.clone()));
            }
            view.push(ViewItem::Pause);
        }
    }
}

pub fn evaluate(state: &GameState) -> Verdict {
    let mut mistakes = false;
    let mut sections = vec![vec![
        "Exhausted at the end of your first day, you doze off to sleep. You've completed all four goals, but … have you been a good homie at doing it?"
            .to_string(),
    ]];
    sections.push(judge_shower(state, &mut mistakes));
    sections.push(vec![judge_dinner(state, &mut mistakes)]);

    let closing = if mistakes {
        "We hope you've learned something today. It's not always easy to live in a house full of other people, but we can make it very enjoyable if we all take care of the place and keep things in the same condition as we found them."
    } else {
        "You've shown that you can get things done and be mindful of your fellow homies at the same time. You are a shining example of how to behave in a coliving environment. Have a wonderful night!"
    };
    sections.push(vec![closing.to_string()]);

    Verdict { sections, mistakes }
}

fn judge_shower(state: &GameState, mistakes: &mut bool) -> Vec<String> {
    let mut lines = Vec::new();
    let hair_in_drain = state.thing_at(ThingId::Hair, BATHROOM);

    let mut hair_feedback = if state.location_of(ThingId::Puddle).is_nowhere() {
        lines.push("You took a shower and you mopped the floor afterwards. Awesome!".to_string());
        if !state.thing_at(ThingId::Mop, BATHROOM) {
            lines.push(
                "It would be nice if you also left the mop back in the bathroom for other homies to use afterwards."
                    .to_string(),
            );
            *mistakes = true;
        }
        if hair_in_drain {
            let opener = if *mistakes { "You also" } else { "However, you" };
            *mistakes = true;
            format!("{opener} left a ball of hair in the drain after you.")
        } else {
            "Thank you for picking up your hair from the drain as well.".to_string()
        }
    } else {
        lines.push(
            "You took a shower and you left a huge puddle of water all over the floor. Please use the mop and clean after yourself next time."
                .to_string(),
        );
        *mistakes = true;
        if hair_in_drain {
            "You also left a ball of hair in the drain after you.".to_string()
        } else {
            "Thank you for picking up your hair from the drain as well.".to_string()
        }
    };

    if hair_in_drain {
        hair_feedback.push_str(
            " Try to be mindful of the homies coming to shower after you and don't leave hairy souvenirs for them.",
        );
    } else if state.has(ThingId::Hair) {
        hair_feedback.push_str(" However, you were a bit gross running around with it in your hands all day.");
        *mistakes = true;
    } else if !state.location_of(ThingId::Hair).is_nowhere() {
        hair_feedback
            .push_str(" However, throwing it somewhere else is not a nice thing to do. Next time dispose of it in the trash.");
        *mistakes = true;
    }

    lines.push(hair_feedback);
    lines
}

fn judge_dinner(state: &GameState, mistakes: &mut bool) -> String {
    let mut feedback = String::from("We hope the meatballs were delicious.");
    if state.location_of(ThingId::DirtyPlate).is_nowhere() {
        feedback.push_str(" Thank you for rinsing the plate after you");
        if state.thing_at(ThingId::RinsedPlate, SCULLERY) {
            feedback.push_str(" and leaving it by the dishwasher to get it super clean. Great job!");
        } else {
            feedback.push_str(". Next time also leave it by the dishwasher so it gets thoroughly cleaned as well.");
            *mistakes = true;
        }
    } else {
        feedback.push_str(" It would be nice, however, if you rinsed the dirty plate");
        *mistakes = true;
        if state.thing_at(ThingId::DirtyPlate, SCULLERY) {
            feedback.push_str(". It's nice that you dropped it off at the dishwasher, but if thick layers of food are left on it, they sometimes don't get cleaned. Remember, nobody would like to eat your leftovers!");
        } else {
            feedback.push_str(" and placed it next to the dishwasher.");
        }
    }
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_session;

    /// Final placement of a model homie.
    fn tidy_state() -> GameState {
        let mut state = test_session().state;
        state.move_thing(ThingId::Puddle, Location::Nowhere);
        state.move_thing(ThingId::Hair, Location::Nowhere);
        state.move_thing(ThingId::Mop, BATHROOM);
        state.move_thing(ThingId::DirtyPlate, Location::Nowhere);
        state.move_thing(ThingId::RinsedPlate, SCULLERY);
        state
    }

    #[test]
    fn tidy_homie_gets_praise() {
        let verdict = evaluate(&tidy_state());
        assert!(!verdict.mistakes);
        assert_eq!(verdict.sections.len(), 4);
        assert!(verdict.sections[3][0].starts_with("You've shown"));
        assert_eq!(
            verdict.sections[1],
            vec![
                "You took a shower and you mopped the floor afterwards. Awesome!",
                "Thank you for picking up your hair from the drain as well.",
            ]
        );
    }

    #[test]
    fn hair_left_in_drain_after_mopping() {
        let mut state = tidy_state();
        state.move_thing(ThingId::Hair, BATHROOM);
        let verdict = evaluate(&state);
        assert!(verdict.mistakes);
        assert!(verdict.sections[1][1].starts_with("However, you left a ball of hair"));
        assert!(verdict.sections[1][1].ends_with("don't leave hairy souvenirs for them."));
    }

    #[test]
    fn mop_not_returned_changes_hair_opener() {
        let mut state = tidy_state();
        state.move_thing(ThingId::Mop, Location::Inventory);
        state.move_thing(ThingId::Hair, BATHROOM);
        let verdict = evaluate(&state);
        assert_eq!(verdict.sections[1].len(), 3);
        assert!(verdict.sections[1][2].starts_with("You also left a ball of hair"));
    }

    #[test]
    fn hair_carried_or_dropped_elsewhere_is_a_mistake() {
        let mut state = tidy_state();
        state.move_thing(ThingId::Hair, Location::Inventory);
        let verdict = evaluate(&state);
        assert!(verdict.mistakes);
        assert!(verdict.sections[1][1].ends_with("running around with it in your hands all day."));

        state.move_thing(ThingId::Hair, Location::Room(RoomId::Lobby));
        let verdict = evaluate(&state);
        assert!(verdict.sections[1][1].contains("as well. However, throwing it somewhere else"));
    }

    #[test]
    fn puddle_left_behind() {
        let mut state = tidy_state();
        state.move_thing(ThingId::Puddle, BATHROOM);
        let verdict = evaluate(&state);
        assert!(verdict.mistakes);
        assert!(verdict.sections[1][0].contains("huge puddle"));
        assert!(verdict.sections[3][0].starts_with("We hope you've learned"));
    }

    #[test]
    fn dinner_plate_outcomes() {
        let mut state = tidy_state();
        state.move_thing(ThingId::RinsedPlate, Location::Room(RoomId::DiningRoom));
        let verdict = evaluate(&state);
        assert!(verdict.mistakes);
        assert!(verdict.sections[2][0].ends_with("so it gets thoroughly cleaned as well."));

        let mut state = tidy_state();
        state.move_thing(ThingId::RinsedPlate, Location::Nowhere);
        state.move_thing(ThingId::DirtyPlate, SCULLERY);
        let verdict = evaluate(&state);
        assert!(verdict.sections[2][0].contains("nobody would like to eat your leftovers!"));

        state.move_thing(ThingId::DirtyPlate, Location::Inventory);
        let verdict = evaluate(&state);
        assert!(verdict.sections[2][0].ends_with("rinsed the dirty plate and placed it next to the dishwasher."));
    }

    #[test]
    fn show_pauses_between_sections() {
        let verdict = evaluate(&tidy_state());
        let mut view = View::default();
        verdict.show(&mut view);
        let pauses = view.items.iter().filter(|item| item.is_pause()).count();
        assert_eq!(pauses, verdict.sections.len());
        assert!(view.items[0].is_evaluation());
    }
}
