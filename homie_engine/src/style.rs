//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait applies ANSI styling via the `colored` crate. Implementations for
//! `&str` and `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn narrative_style(&self) -> ColoredString;
    fn title_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn exits_style(&self) -> ColoredString;
    fn thing_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn hint_style(&self) -> ColoredString;
    fn evaluation_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn help_command_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn narrative_style(&self) -> ColoredString {
        self.truecolor(200, 200, 200)
    }
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().bold().underline()
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn exits_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn thing_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn success_style(&self) -> ColoredString {
        self.green()
    }
    fn hint_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn evaluation_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bright_white().bold()
    }
    fn help_command_style(&self) -> ColoredString {
        self.bold().green()
    }
}

impl GameStyle for String {
    fn narrative_style(&self) -> ColoredString {
        self.as_str().narrative_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn exits_style(&self) -> ColoredString {
        self.as_str().exits_style()
    }
    fn thing_style(&self) -> ColoredString {
        self.as_str().thing_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn hint_style(&self) -> ColoredString {
        self.as_str().hint_style()
    }
    fn evaluation_style(&self) -> ColoredString {
        self.as_str().evaluation_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn help_command_style(&self) -> ColoredString {
        self.as_str().help_command_style()
    }
}
