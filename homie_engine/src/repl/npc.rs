//! `repl::npc` module

use homie_data::ThingId;

use crate::catalog::is_talkable;
use crate::command::Instruction;
use crate::events;
use crate::session::Session;
use crate::view::View;

/// Talk to the first person named. Anyone else mentioned is ignored.
pub fn talk_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("Talk to who?");
        return;
    }
    let Some(person) = instruction.things.first().copied() else {
        view.reply("I don't know who you mean.");
        return;
    };
    if !is_talkable(person) {
        view.reply("You can't talk to that.");
        return;
    }
    if !session.state.is_here(person) {
        view.reply(format!("{} is not here.", session.world.title_name(person)));
        return;
    }
    if person == ThingId::James {
        events::talk_to_james(session, view);
    }
}
