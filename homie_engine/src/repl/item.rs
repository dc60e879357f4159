//! `repl::item` module
//!
//! Handlers for verbs that act on one particular kind of thing. Each routes to an event
//! when a suitable thing is mentioned anywhere in the command.

use homie_data::ThingId;

use crate::catalog::is_plate;
use crate::command::Instruction;
use crate::events;
use crate::session::Session;
use crate::view::View;

pub fn open_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("What do you want to open?");
        return;
    }
    if instruction.things.is_empty() {
        view.reply("I don't know which thing you want to open.");
        return;
    }
    if instruction.things.contains(&ThingId::Suitcase) {
        events::open_suitcase(session, view);
    } else {
        view.reply("You can't open that.");
    }
}

/// Puddles get mopped, plates get rinsed, hair goes in the trash.
pub fn clean_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("What do you want to clean?");
        return;
    }
    let things = &instruction.things;
    if things.is_empty() {
        view.reply("I don't know which thing you want to clean.");
    } else if things.contains(&ThingId::Puddle) {
        events::mop_puddle(session, view);
    } else if things.contains(&ThingId::Hair) {
        view.reply("You should pick it up and throw it in the trash.");
    } else if things.iter().any(|thing| is_plate(*thing)) {
        events::rinse_plate(session, view);
    } else {
        view.reply("You can't clean that.");
    }
}

/// A bare "eat" means dinner.
pub fn eat_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        events::eat_meatballs(session, view);
        return;
    }
    if instruction.things.is_empty() {
        view.reply("I don't know which thing you want to eat.");
    } else if instruction.things.contains(&ThingId::Meatballs) {
        events::eat_meatballs(session, view);
    } else {
        view.reply("You can't eat that.");
    }
}

pub fn rinse_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("What do you want to rinse?");
        return;
    }
    if instruction.things.iter().any(|thing| is_plate(*thing)) {
        events::rinse_plate(session, view);
    } else {
        view.reply("You can't rinse that.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Verb, parse_command};
    use crate::testing::test_session;
    use crate::world::Location;
    use homie_data::RoomId;

    fn run(session: &mut Session, line: &str) -> Vec<String> {
        let mut view = View::default();
        let instruction = parse_command(line, &session.vocabulary).unwrap_instruction();
        match instruction.verb {
            Verb::Open => open_handler(session, &mut view, &instruction),
            Verb::Clean => clean_handler(session, &mut view, &instruction),
            Verb::Eat => eat_handler(session, &mut view, &instruction),
            Verb::Rinse => rinse_handler(session, &mut view, &instruction),
            other => panic!("unexpected verb {other:?}"),
        }
        view.replies().into_iter().map(String::from).collect()
    }

    #[test]
    fn open_routes_only_suitcase() {
        let mut session = test_session();
        assert_eq!(run(&mut session, "open"), vec!["What do you want to open?"]);
        assert_eq!(run(&mut session, "open door"), vec!["I don't know which thing you want to open."]);
        assert_eq!(run(&mut session, "open checklist"), vec!["You can't open that."]);

        session.state.current_room = RoomId::Lobby;
        assert_eq!(
            run(&mut session, "open the suitcase"),
            vec!["You open the suitcase and see your computer in it."]
        );
        assert!(session.state.is_here(ThingId::Computer));
    }

    #[test]
    fn clean_routes_by_category() {
        let mut session = test_session();
        assert_eq!(run(&mut session, "clean"), vec!["What do you want to clean?"]);
        assert_eq!(run(&mut session, "clean floor"), vec!["I don't know which thing you want to clean."]);
        assert_eq!(run(&mut session, "clean puddle"), vec!["There aren't any puddles of water here."]);
        assert_eq!(
            run(&mut session, "clean hair"),
            vec!["You should pick it up and throw it in the trash."]
        );
        assert_eq!(run(&mut session, "clean dirty plate"), vec!["There is no sink here."]);
        assert_eq!(run(&mut session, "clean suitcase"), vec!["You can't clean that."]);
    }

    #[test]
    fn eat_accepts_bare_verb() {
        let mut session = test_session();
        assert_eq!(run(&mut session, "eat"), vec!["You don't have anything to eat."]);
        assert_eq!(run(&mut session, "eat mop"), vec!["You can't eat that."]);
        assert_eq!(run(&mut session, "eat cake"), vec!["I don't know which thing you want to eat."]);

        session.state.move_thing(ThingId::Meatballs, Location::Inventory);
        let replies = run(&mut session, "eat meatballs");
        assert!(replies[0].starts_with("You eat the delicious meatballs"));
    }

    #[test]
    fn rinse_only_plates() {
        let mut session = test_session();
        assert_eq!(run(&mut session, "rinse"), vec!["What do you want to rinse?"]);
        assert_eq!(run(&mut session, "rinse mop"), vec!["You can't rinse that."]);
        assert_eq!(run(&mut session, "rinse hands"), vec!["You can't rinse that."]);
        assert_eq!(run(&mut session, "rinse plate"), vec!["There is no sink here."]);
    }
}
