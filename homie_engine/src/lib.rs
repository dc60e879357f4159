#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const HOMIE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod catalog;
pub mod command;
pub mod data_paths;
pub mod evaluation;
pub mod events;
pub mod goal;
pub mod helpers;
pub mod loader;
pub mod repl;
pub mod rules;
pub mod session;
pub mod state;
pub mod style;
pub mod view;
pub mod vocabulary;
pub mod world;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use loader::load_world;
pub use repl::{run_repl, take_turn};
pub use session::{Session, SessionStatus};
pub use view::{View, ViewItem};
pub use world::{HomieWorld, Location};
