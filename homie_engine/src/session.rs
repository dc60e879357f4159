//! The explicit per-game context every handler works on.

use variantly::Variantly;

use crate::loader::help::{HelpCommand, default_help};
use crate::state::GameState;
use crate::vocabulary::Vocabulary;
use crate::world::HomieWorld;

/// Whether the host loop should keep asking for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Variantly)]
pub enum SessionStatus {
    #[default]
    Active,
    /// The player quit.
    Quit,
    /// The player slept and was evaluated.
    Ended,
}

/// Everything that belongs to one play-through.
#[derive(Debug, Clone)]
pub struct Session {
    pub world: HomieWorld,
    pub state: GameState,
    pub vocabulary: Vocabulary,
    pub help: Vec<HelpCommand>,
    pub status: SessionStatus,
    /// One-shot: the "go to sleep" hint has been shown.
    pub sleep_hint_given: bool,
}

impl Session {
    pub fn new(world: HomieWorld) -> Session {
        let state = GameState::new(&world);
        let vocabulary = Vocabulary::from_world(&world);
        Session {
            world,
            state,
            vocabulary,
            help: default_help(),
            status: SessionStatus::Active,
            sleep_hint_given: false,
        }
    }

    /// Replace the built-in help listing.
    #[must_use]
    pub fn with_help(mut self, help: Vec<HelpCommand>) -> Session {
        self.help = help;
        self
    }

    pub fn is_over(&self) -> bool {
        !self.status.is_active()
    }
}
