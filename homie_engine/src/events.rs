//! Narrative set-pieces.
//!
//! Each event checks its guards before touching state, so a refusal never leaves a partial
//! change behind. Verb handlers call these once their own argument checks pass.

use homie_data::{GoalId, RoomId, ThingId};
use log::info;

use crate::catalog::{SHOWER_BLOCKERS, has_sink};
use crate::evaluation::evaluate;
use crate::session::{Session, SessionStatus};
use crate::view::View;
use crate::world::Location;

/// Welcome talk from the house host. Only happens once, while he's still in the lobby.
pub fn talk_to_james(session: &mut Session, view: &mut View) {
    let state = &mut session.state;
    if !state.thing_at(ThingId::James, Location::Room(RoomId::Lobby)) {
        view.reply("James looks busy and you don't want to bother him.");
        return;
    }
    view.reply(
        "James says \"Welcome to Spelkollektivet! You'll first want to get settled in. Your room is on the west side of the north wing.\"",
    );
    view.reply(
        "James points to the east where the north wing starts. He adds \"If you have any questions, I'll be in the reception.\"",
    );
    view.reply("James leaves southeast.");
    state.move_thing(ThingId::James, Location::Room(RoomId::Reception));
    info!("James welcomed the player");
}

/// Reveal the computer packed in the suitcase.
pub fn open_suitcase(session: &mut Session, view: &mut View) {
    let state = &mut session.state;
    if !state.available(ThingId::Suitcase) {
        view.reply("Hmm … Where did you put your suitcase?");
        return;
    }
    if !state.location_of(ThingId::Computer).is_nowhere() {
        view.reply("The suitcase is empty.");
        return;
    }
    let location = state.location_of(ThingId::Suitcase);
    state.move_thing(ThingId::Computer, location);
    view.reply("You open the suitcase and see your computer in it.");
}

/// Shower in the current room, leaving hair and a puddle behind.
pub fn take_shower(session: &mut Session, view: &mut View) {
    let world = &session.world;
    let state = &mut session.state;
    if !state.is_here(ThingId::Shower) {
        view.reply("I don't see a shower here. Maybe try a bathroom?");
        return;
    }
    if let Some(blocker) = SHOWER_BLOCKERS.iter().find(|thing| state.available(**thing)) {
        view.reply(format!("You shouldn't shower with your {} around.", world.name(*blocker)));
        return;
    }

    view.reply("You turn on the water and enjoy a long, hot shower.");
    view.reply("After you're done, there's water all over the floor. You also left a souvenir of hair in the drain.");
    let here = state.here();
    state.move_thing(ThingId::Hair, here);
    state.move_thing(ThingId::Puddle, here);
    state.set_goal(GoalId::ShowerTaken, true);
}

pub fn mop_puddle(session: &mut Session, view: &mut View) {
    let state = &mut session.state;
    if !state.is_here(ThingId::Puddle) {
        view.reply("There aren't any puddles of water here.");
        return;
    }
    if !state.has(ThingId::Mop) {
        view.reply("Try grabbing a mop first.");
        return;
    }
    view.reply("You grip the mop firmly and drag it tightly across the floor towards the drain.");
    view.reply("The floor is now dry and you feel good about yourself.");
    state.move_thing(ThingId::Puddle, Location::Nowhere);
}

/// Dispose of each candidate. Only hair belongs in the trash.
pub fn throw_in_trash(session: &mut Session, view: &mut View, things: &[ThingId]) {
    if things.is_empty() {
        view.reply("I don't know what you want to throw in the trash.");
        return;
    }
    let world = &session.world;
    let state = &mut session.state;
    for thing in things {
        if !state.has(*thing) {
            view.reply(format!("{} is not in your inventory.", world.title_name(*thing)));
            continue;
        }
        if *thing != ThingId::Hair {
            view.reply(format!("I don't want to throw the {} away!", world.name(*thing)));
            continue;
        }
        view.reply("You dispose your hair into the trash bin. Humanity thanks you!");
        state.move_thing(ThingId::Hair, Location::Nowhere);
    }
}

pub fn eat_meatballs(session: &mut Session, view: &mut View) {
    let state = &mut session.state;
    if !state.has(ThingId::Meatballs) {
        view.reply("You don't have anything to eat.");
        return;
    }
    view.reply(
        "You eat the delicious meatballs and are immediately content with the decision of moving into this house. The food will be one of the unexpected highlights of living here.",
    );
    state.move_thing(ThingId::Meatballs, Location::Nowhere);
    state.set_goal(GoalId::DinnerEaten, true);
}

/// Rinse the dirty plate at a sink. "plate" means the rinsed plate afterwards.
pub fn rinse_plate(session: &mut Session, view: &mut View) {
    let state = &mut session.state;
    if !has_sink(state.current_room) {
        view.reply("There is no sink here.");
        return;
    }
    if state.available(ThingId::CleanPlate) {
        view.reply("The plate is already clean.");
        return;
    }
    if state.available(ThingId::RinsedPlate) {
        view.reply("The plate is already rinsed.");
        return;
    }
    if !state.available(ThingId::DirtyPlate) {
        view.reply("You don't have a plate to rinse.");
        return;
    }
    view.reply(
        "As a good future homie, you rinse the plate so that the dishwasher will have an easier time getting it super clean.",
    );
    state.swap_things(ThingId::DirtyPlate, ThingId::RinsedPlate);
    session.vocabulary.rebind("plate", ThingId::RinsedPlate);
}

/// Go to bed. Ends the session with an evaluation once every goal is done.
pub fn sleep(session: &mut Session, view: &mut View) {
    if session.state.current_room != RoomId::YourRoom {
        view.reply("Maybe try sleeping in your room?");
        return;
    }
    if !session.state.all_goals_complete() {
        view.reply("You still have things to do today. Look at your checklist!");
        return;
    }
    let verdict = evaluate(&session.state);
    info!(
        "session ended with {}",
        if verdict.mistakes { "mistakes" } else { "a clean record" }
    );
    verdict.show(view);
    session.status = SessionStatus::Ended;
}
