//! REPL and command handling.
//!
//! The game runs in a read-eval-print loop. A turn is: parse the line, route the verb to its
//! handler, then run the world rules. The submodules hold the verb handlers.

mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod npc;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use npc::*;
pub use system::*;

use anyhow::Result;
use log::info;

use crate::command::{Command, Instruction, Verb, parse_command};
use crate::events;
use crate::loader::settings::Settings;
use crate::rules;
use crate::session::Session;
use crate::style::GameStyle;
use crate::view::View;

use input::{InputEvent, InputManager};

/// Run the main read-eval-print loop until the session reaches a terminal status.
///
/// # Errors
/// - if input can't be read even after falling back to plain stdin
pub fn run_repl(session: &mut Session, settings: &Settings) -> Result<()> {
    let mut view = View::new(settings);
    let mut input_manager = InputManager::new(session.vocabulary.words());

    show_location(session, &mut view, false);
    view.flush();

    let mut turn = 0_usize;
    while !session.is_over() {
        let prompt = format!("{}\n\n{}", "What now?".narrative_style(), "> ".prompt_style());
        let line = match input_manager.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.reply("Command canceled.");
                view.flush();
                continue;
            },
        };
        println!();

        turn += 1;
        info!("================> TURN {turn} <================");
        take_turn(session, &mut view, &line);
        view.flush();
    }
    info!("session finished after {turn} turns ({:?})", session.status);
    Ok(())
}

/// Process one line of input: dispatch it, then apply the world rules.
pub fn take_turn(session: &mut Session, view: &mut View, line: &str) {
    match parse_command(line, &session.vocabulary) {
        Command::Empty => view.reply("Try typing something."),
        Command::Unknown(_) => view.reply("I do not understand you."),
        Command::Instruction(instruction) => dispatch(session, view, &instruction),
    }
    rules::apply(session, view);
}

/// Route an instruction to its handler.
pub fn dispatch(session: &mut Session, view: &mut View, instruction: &Instruction) {
    match instruction.verb {
        Verb::Go(direction) => move_to_handler(session, view, direction),
        Verb::Look => look_handler(session, view, instruction),
        Verb::Read => read_handler(session, view, instruction),
        Verb::Talk => talk_handler(session, view, instruction),
        Verb::Get => get_handler(session, view, instruction),
        Verb::Drop => drop_handler(session, view, instruction),
        Verb::Inventory => inventory_handler(session, view),
        Verb::Open => open_handler(session, view, instruction),
        Verb::Shower => events::take_shower(session, view),
        Verb::Clean => clean_handler(session, view, instruction),
        Verb::Mop => events::mop_puddle(session, view),
        Verb::Eat => eat_handler(session, view, instruction),
        Verb::Sleep => events::sleep(session, view),
        Verb::Rinse => rinse_handler(session, view, instruction),
        Verb::Checklist => checklist_handler(session, view),
        Verb::Quit => quit_handler(session, view),
        Verb::Help => help_handler(session, view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_session;

    #[test]
    fn empty_and_unknown_lines_still_run_rules() {
        let mut session = test_session();
        let mut view = View::default();
        take_turn(&mut session, &mut view, "   ");
        take_turn(&mut session, &mut view, "xyzzy");
        assert_eq!(view.replies(), vec!["Try typing something.", "I do not understand you."]);
    }

    #[test]
    fn quit_sets_terminal_status() {
        let mut session = test_session();
        let mut view = View::default();
        take_turn(&mut session, &mut view, "exit");
        assert!(session.is_over());
        assert_eq!(view.replies(), vec!["Goodbye!"]);
    }
}
