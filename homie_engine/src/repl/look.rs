//! `repl::look` module
//!
//! Handlers for looking around and reading.

use homie_data::ThingId;

use crate::catalog::is_readable;
use crate::command::Instruction;
use crate::repl::{checklist_handler, show_location};
use crate::session::Session;
use crate::view::{View, ViewItem};

/// Look around, or at each named thing that is here or carried.
pub fn look_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        show_location(session, view, true);
        return;
    }
    if instruction.things.is_empty() {
        view.reply("I don't see it.");
        return;
    }
    for thing in &instruction.things {
        if !session.state.available(*thing) {
            view.reply(format!("{} is not here.", session.world.title_name(*thing)));
            continue;
        }
        show_thing(session, view, *thing);
    }
}

/// Like look, but only for things with writing on them.
pub fn read_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("What do you want to read?");
        return;
    }
    if instruction.things.is_empty() {
        view.reply("I don't know which thing you want to read.");
        return;
    }
    for thing in &instruction.things {
        if !is_readable(*thing) {
            view.reply(format!("{} can't be read.", session.world.title_name(*thing)));
            continue;
        }
        if !session.state.available(*thing) {
            view.reply(format!("{} is not here.", session.world.title_name(*thing)));
            continue;
        }
        show_thing(session, view, *thing);
    }
}

/// Describe a thing. The checklist shows the goal list instead of a description.
pub fn show_thing(session: &Session, view: &mut View, thing: ThingId) {
    if thing == ThingId::Checklist {
        checklist_handler(session, view);
        return;
    }
    view.push(ViewItem::ThingDescription(session.world.thing(thing).description.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_command;
    use crate::testing::test_session;
    use homie_data::RoomId;

    fn run(session: &mut Session, line: &str) -> View {
        let mut view = View::default();
        let Some(instruction) = parse_command(line, &session.vocabulary).instruction() else {
            panic!("'{line}' should parse");
        };
        match instruction.verb {
            crate::command::Verb::Read => read_handler(session, &mut view, &instruction),
            _ => look_handler(session, &mut view, &instruction),
        }
        view
    }

    #[test]
    fn look_with_unknown_words() {
        let mut session = test_session();
        let view = run(&mut session, "look at the ceiling");
        assert_eq!(view.replies(), vec!["I don't see it."]);
    }

    #[test]
    fn look_at_absent_and_present_things() {
        let mut session = test_session();
        session.state.current_room = RoomId::Lobby;
        let view = run(&mut session, "look mop suitcase");
        assert_eq!(view.replies(), vec!["Mop is not here."]);
        assert!(view.items[1].is_thing_description());
    }

    #[test]
    fn checklist_thing_shows_goals() {
        let mut session = test_session();
        let view = run(&mut session, "l checklist");
        assert!(view.items[0].is_checklist());
    }

    #[test]
    fn read_refuses_unreadable_things() {
        let mut session = test_session();
        session.state.current_room = RoomId::Lobby;
        let view = run(&mut session, "read suitcase");
        assert_eq!(view.replies(), vec!["Suitcase can't be read."]);

        let view = run(&mut session, "read");
        assert_eq!(view.replies(), vec!["What do you want to read?"]);

        let view = run(&mut session, "read it");
        assert_eq!(view.replies(), vec!["I don't know which thing you want to read."]);
    }

    #[test]
    fn read_needs_the_sign_nearby() {
        let mut session = test_session();
        let view = run(&mut session, "read sign");
        assert_eq!(view.replies(), vec!["Bathroom sign is not here."]);

        session.state.current_room = RoomId::NorthWingBathroom;
        let view = run(&mut session, "read sign");
        assert!(view.items[0].is_thing_description());
    }
}
