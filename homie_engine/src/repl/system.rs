//! `repl::system` module
//!
//! Handlers for commands about the game itself rather than the house.

use log::info;

use crate::session::{Session, SessionStatus};
use crate::view::{ChecklistLine, View, ViewItem};
use crate::world::Location;

/// Show every goal in checklist order, marking the finished ones.
pub fn checklist_handler(session: &Session, view: &mut View) {
    let lines = session
        .world
        .goals()
        .iter()
        .map(|goal| ChecklistLine {
            description: goal.description.clone(),
            completed: session.state.goal_complete(goal.id),
        })
        .collect();
    view.push(ViewItem::Checklist(lines));
}

/// Quit the game.
pub fn quit_handler(session: &mut Session, view: &mut View) {
    info!("player quit in {}", session.state.current_room);
    info!("ending inventory: {:?}", session.state.things_at(Location::Inventory));
    view.reply("Goodbye!");
    session.status = SessionStatus::Quit;
}

pub fn help_handler(session: &Session, view: &mut View) {
    view.push(ViewItem::Help(session.help.clone()));
}
