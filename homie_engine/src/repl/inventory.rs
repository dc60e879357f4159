//! `repl::inventory` module
//!
//! Handlers for picking things up, putting them down and listing what the player carries.
//! Both get and drop accept several things at once and report in the same way: nothing
//! extra when everything failed, "OK." when everything worked, otherwise the names of the
//! things that did.

use homie_data::ThingId;
use log::info;

use crate::catalog::{PLATES, is_gettable, is_plate, mentions_everything};
use crate::command::Instruction;
use crate::events;
use crate::helpers::comma_list;
use crate::session::Session;
use crate::view::{View, ViewItem};
use crate::world::Location;

/// Pick up the named things, or everything gettable in the room.
pub fn get_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("What do you want to get?");
        return;
    }

    let requested = if mentions_everything(instruction.args()) {
        let gettable: Vec<ThingId> = session
            .state
            .things_at(session.state.here())
            .into_iter()
            .filter(|thing| is_gettable(*thing))
            .collect();
        if gettable.is_empty() {
            view.reply("There is nothing here to be picked up.");
            return;
        }
        gettable
    } else {
        instruction.things.clone()
    };
    if requested.is_empty() {
        view.reply("I don't know which thing you want to get.");
        return;
    }

    let mut picked_up = Vec::new();
    for thing in &requested {
        let name = session.world.title_name(*thing);
        if !is_gettable(*thing) {
            // "take shower" is a figure of speech
            if *thing == ThingId::Shower {
                events::take_shower(session, view);
            } else {
                view.reply(format!("{name} can't be picked up."));
            }
            continue;
        }
        if session.state.has(*thing) {
            view.reply(format!("{name} is already in your possession."));
            continue;
        }
        if !session.state.is_here(*thing) {
            view.reply(format!("{name} is not here."));
            continue;
        }
        if *thing == ThingId::Meatballs && !PLATES.iter().any(|plate| session.state.has(*plate)) {
            view.reply("You should get a plate first.");
            continue;
        }
        session.state.move_thing(*thing, Location::Inventory);
        picked_up.push(*thing);
    }
    info!("picked up {picked_up:?}");
    report(session, view, &requested, &picked_up, "You picked up");
}

/// Put down the named things, or everything droppable. Mentioning the trash bin throws the
/// other things away instead.
pub fn drop_handler(session: &mut Session, view: &mut View, instruction: &Instruction) {
    if instruction.is_bare() {
        view.reply("What do you want to drop?");
        return;
    }

    if instruction.things.contains(&ThingId::TrashBin) {
        let rest: Vec<ThingId> = instruction
            .things
            .iter()
            .copied()
            .filter(|thing| *thing != ThingId::TrashBin)
            .collect();
        events::throw_in_trash(session, view, &rest);
        return;
    }

    let requested = if mentions_everything(instruction.args()) {
        let carried = session.state.things_at(Location::Inventory);
        if carried.is_empty() {
            view.reply("You aren't carrying anything.");
            return;
        }
        let droppable: Vec<ThingId> = carried.into_iter().filter(|thing| is_gettable(*thing)).collect();
        if droppable.is_empty() {
            view.reply("You don't have anything you could drop.");
            return;
        }
        droppable
    } else {
        instruction.things.clone()
    };
    if requested.is_empty() {
        view.reply("I don't know which thing you want to drop.");
        return;
    }

    let mut dropped = Vec::new();
    for thing in &requested {
        if !session.state.has(*thing) {
            view.reply(format!("{} is not in your inventory.", session.world.title_name(*thing)));
            continue;
        }
        if *thing == ThingId::Meatballs {
            view.reply("You shouldn't be throwing food away!");
            continue;
        }
        if is_plate(*thing) && session.state.has(ThingId::Meatballs) {
            view.reply("You still have meatballs to eat!");
            continue;
        }
        let here = session.state.here();
        session.state.move_thing(*thing, here);
        dropped.push(*thing);
    }
    info!("dropped {dropped:?}");
    report(session, view, &requested, &dropped, "You dropped");
}

/// List carried things.
pub fn inventory_handler(session: &Session, view: &mut View) {
    let carried = session.state.things_at(Location::Inventory);
    view.push(ViewItem::Inventory(session.world.names(&carried)));
}

fn report(session: &Session, view: &mut View, requested: &[ThingId], done: &[ThingId], lead: &str) {
    if done.is_empty() {
        return;
    }
    if done.len() == requested.len() {
        view.reply("OK.");
    } else {
        view.reply(format!("{lead} {}.", comma_list(&session.world.names(done))));
    }
}
