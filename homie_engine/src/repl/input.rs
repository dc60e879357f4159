//! Terminal input handling for the REPL.
//!
//! Uses rustyline with persistent history and completion of verbs (first word) and
//! vocabulary words (later words). Falls back to plain stdin when not on a terminal.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::VERBS;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

type ReplEditor = rustyline::Editor<HomieHelper, DefaultHistory>;

/// Completion source: verbs for the first word, thing words after it.
#[derive(Debug, Default)]
struct HomieHelper {
    verbs: Vec<String>,
    nouns: Vec<String>,
}

impl HomieHelper {
    fn new(nouns: Vec<String>) -> Self {
        let mut verbs: Vec<String> = VERBS.keys().filter(|v| v.len() > 2).map(|v| (*v).to_string()).collect();
        verbs.sort_unstable();
        Self { verbs, nouns }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let (start, prefix) = current_word(line, pos);
        if prefix.is_empty() {
            return (start, Vec::new());
        }
        let lower = prefix.to_lowercase();
        let pool = if line[..start].trim().is_empty() {
            &self.verbs
        } else {
            &self.nouns
        };
        let pairs = pool
            .iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect();
        (start, pairs)
    }
}

impl Helper for HomieHelper {}

impl Completer for HomieHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for HomieHelper {
    type Hint = String;
}

impl Highlighter for HomieHelper {}

impl Validator for HomieHelper {}

/// Start offset and text of the word under the cursor.
fn current_word(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let start = slice.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
    (start, slice[start..].to_string())
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    /// `nouns` are the words offered for completion after the verb.
    pub fn new(nouns: Vec<String>) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new(HomieHelper::new(nouns)) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) if self.backend.is_rustyline() => {
                warn!("rustyline input failed: {err} -- switching to basic stdin");
                self.backend = Backend::plain();
                self.backend.read_line(prompt)
            },
            Err(err) => Err(err),
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new(helper: HomieHelper) -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(map_io_err)?;
        editor.set_helper(Some(helper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("homie_engine").join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> HomieHelper {
        HomieHelper::new(vec!["mop".into(), "meatballs".into(), "suitcase".into()])
    }

    fn replacements(line: &str) -> Vec<String> {
        helper()
            .candidates(line, line.len())
            .1
            .into_iter()
            .map(|p| p.replacement)
            .collect()
    }

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert_eq!(result, InputEvent::Eof);
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/homie-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("homie_engine/history.txt")));
    }

    #[test]
    fn first_word_completes_verbs() {
        let found = replacements("sh");
        assert_eq!(found, vec!["shower"]);
        assert!(replacements("ch").contains(&"checklist".to_string()));
    }

    #[test]
    fn later_words_complete_nouns() {
        let (start, pairs) = helper().candidates("get m", 5);
        assert_eq!(start, 4);
        let words: Vec<_> = pairs.into_iter().map(|p| p.replacement).collect();
        assert_eq!(words, vec!["mop", "meatballs"]);
    }

    #[test]
    fn empty_prefix_offers_nothing() {
        assert!(replacements("get ").is_empty());
    }
}
