//! `repl::movement` module
//!
//! Handlers that change the player's room, and the room display they trigger.

use homie_data::Direction;
use log::info;

use crate::session::Session;
use crate::view::{View, ViewItem};

/// Move the player through the exit in `direction`, if the current room has one.
pub fn move_to_handler(session: &mut Session, view: &mut View, direction: Direction) {
    let Some(destination) = session.world.room(session.state.current_room).exit(direction) else {
        view.reply("You cannot go there.");
        return;
    };
    info!(
        "player moved {direction} from {} to {destination}",
        session.state.current_room
    );
    session.state.current_room = destination;
    show_location(session, view, false);
}

/// Show the current room: full description on the first visit or when forced, otherwise
/// just its name. Exits and things present always follow.
pub fn show_location(session: &mut Session, view: &mut View, force_description: bool) {
    let room = session.world.room(session.state.current_room);
    if session.state.has_seen(room.id) && !force_description {
        view.push(ViewItem::RoomName(room.name.clone()));
    } else {
        view.push(ViewItem::RoomDescription(room.description.clone()));
        session.state.mark_seen(room.id);
    }
    view.push(ViewItem::RoomExits(
        room.directions().into_iter().map(|d| d.as_str().to_string()).collect(),
    ));
    let things = session.state.things_at(session.state.here());
    view.push(ViewItem::RoomThings(session.world.names(&things)));
}
