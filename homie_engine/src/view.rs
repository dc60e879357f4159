//! View module.
//!
//! Handlers never print. They push semantic [`ViewItem`]s, and the host loop flushes the
//! aggregated view once per turn, applying wrapping, color and pacing.

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::ColoredString;
use log::warn;
use variantly::Variantly;

use crate::loader::help::HelpCommand;
use crate::loader::settings::Settings;
use crate::style::GameStyle;

const CHECK_MARK: &str = "\u{2714}"; // ✔
const INDENT: &str = "    ";

/// One row of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLine {
    pub description: String,
    pub completed: bool,
}

/// Something a handler wants the player to see.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Plain narrative reply to the command.
    Reply(String),
    /// Full description of the current room.
    RoomDescription(String),
    /// Short form for rooms already seen.
    RoomName(String),
    RoomExits(Vec<String>),
    RoomThings(Vec<String>),
    ThingDescription(String),
    Inventory(Vec<String>),
    Checklist(Vec<ChecklistLine>),
    Hint(String),
    Evaluation(String),
    /// Wait for the player before continuing.
    Pause,
    Help(Vec<HelpCommand>),
}

/// Category of a rendered line, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Narrative,
    Room,
    Exits,
    Thing,
    Success,
    Hint,
    Evaluation,
    HelpCommand,
}

/// A rendered, unstyled output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn blank() -> Self {
        Self::new("", Tone::Narrative)
    }

    fn styled(&self) -> ColoredString {
        match self.tone {
            Tone::Narrative => self.text.narrative_style(),
            Tone::Room => self.text.room_style(),
            Tone::Exits => self.text.exits_style(),
            Tone::Thing => self.text.thing_style(),
            Tone::Success => self.text.success_style(),
            Tone::Hint => self.text.hint_style(),
            Tone::Evaluation => self.text.evaluation_style(),
            Tone::HelpCommand => self.text.help_command_style(),
        }
    }
}

/// View aggregates everything to be displayed on one pass through the REPL.
#[derive(Debug, Clone)]
pub struct View {
    pub items: Vec<ViewItem>,
    width: usize,
    pause: Duration,
}

impl Default for View {
    fn default() -> Self {
        Self::new(&Settings::plain())
    }
}

impl View {
    pub fn new(settings: &Settings) -> Self {
        Self {
            items: Vec::new(),
            width: settings.width(),
            pause: Duration::from_millis(settings.print_pause_ms),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Shorthand for pushing a [`ViewItem::Reply`].
    pub fn reply(&mut self, text: impl Into<String>) {
        self.push(ViewItem::Reply(text.into()));
    }

    /// Text of every `Reply` pushed this turn, in order.
    pub fn replies(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ViewItem::Reply(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render all pending items to plain lines.
    pub fn lines(&self) -> Vec<Line> {
        self.items.iter().flat_map(|item| self.render(item)).collect()
    }

    /// Display everything aggregated this turn, then clear the buffer.
    pub fn flush(&mut self) {
        let items = std::mem::take(&mut self.items);
        for item in &items {
            if item.is_pause() {
                wait_for_enter();
                continue;
            }
            for line in self.render(item) {
                println!("{}", line.styled());
                if !self.pause.is_zero() {
                    thread::sleep(self.pause);
                }
            }
        }
    }

    fn wrap(&self, text: &str, tone: Tone) -> Vec<Line> {
        textwrap::wrap(text, self.width)
            .into_iter()
            .map(|piece| Line::new(piece.into_owned(), tone))
            .collect()
    }

    fn render(&self, item: &ViewItem) -> Vec<Line> {
        let mut lines = match item {
            ViewItem::Reply(text) | ViewItem::ThingDescription(text) => self.wrap(text, Tone::Narrative),
            ViewItem::RoomDescription(text) => self.wrap(text, Tone::Room),
            ViewItem::RoomName(name) => vec![Line::new(format!("{name}."), Tone::Room)],
            ViewItem::RoomExits(directions) => {
                let listed = if directions.is_empty() {
                    " none".to_string()
                } else {
                    directions.iter().map(|d| format!(" {d}")).collect()
                };
                // exits and things are one block, so no trailing blank here
                return self.wrap(&format!("Possible exits are:{listed}."), Tone::Exits);
            },
            ViewItem::RoomThings(names) => listing("You see:", names),
            ViewItem::Inventory(names) => listing("You are carrying:", names),
            ViewItem::Checklist(goals) => {
                let mut lines = vec![Line::new(
                    "You go over the mental checklist of things you're supposed to do today:",
                    Tone::Narrative,
                )];
                for goal in goals {
                    if goal.completed {
                        lines.push(Line::new(
                            format!("{INDENT}{} {CHECK_MARK}", goal.description),
                            Tone::Success,
                        ));
                    } else {
                        lines.push(Line::new(format!("{INDENT}{}", goal.description), Tone::Narrative));
                    }
                }
                lines
            },
            ViewItem::Hint(text) => self.wrap(text, Tone::Hint),
            ViewItem::Evaluation(text) => self.wrap(text, Tone::Evaluation),
            ViewItem::Pause => return Vec::new(),
            ViewItem::Help(commands) => {
                let mut lines = Vec::new();
                for command in commands {
                    lines.push(Line::new(command.command.clone(), Tone::HelpCommand));
                    let wrapped = textwrap::wrap(&command.description, self.width.saturating_sub(INDENT.len()).max(1));
                    for piece in wrapped {
                        lines.push(Line::new(format!("{INDENT}{piece}"), Tone::Narrative));
                    }
                }
                lines
            },
        };
        lines.push(Line::blank());
        lines
    }
}

fn listing(heading: &str, names: &[String]) -> Vec<Line> {
    let mut lines = vec![Line::new(heading, Tone::Narrative)];
    if names.is_empty() {
        lines.push(Line::new(format!("{INDENT}nothing."), Tone::Narrative));
    } else {
        lines.extend(names.iter().map(|name| Line::new(format!("{INDENT}{name}."), Tone::Thing)));
    }
    lines
}

/// Block until the player presses Enter. Piped input is not consumed.
fn wait_for_enter() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    let _ = io::stdout().flush();
    let mut discard = String::new();
    if let Err(e) = stdin.lock().read_line(&mut discard) {
        warn!("could not wait for Enter: {e}");
    }
}
