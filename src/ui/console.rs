//! Console renderer for battle messages

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::game::{BattleMessage, MessageCategory};

/// Writes battle messages to a terminal, colored by category
pub struct Console<W: Write> {
    out: W,
    /// Emit ANSI colors
    colored: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        use crossterm::tty::IsTty;
        let out = io::stdout();
        let colored = out.is_tty();
        Self::new(out, colored)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Render a single message on its own line
    pub fn render(&mut self, message: &BattleMessage) -> io::Result<()> {
        if !self.colored {
            return writeln!(self.out, "{}", message.text);
        }

        let text = message.text.as_str();
        match message.category {
            MessageCategory::Round => writeln!(self.out, "{}", text.green()),
            MessageCategory::Status => writeln!(self.out, "{}", text.blue()),
            MessageCategory::Elimination => writeln!(self.out, "{}", text.red()),
            MessageCategory::Announcement => writeln!(self.out, "{}", text.yellow().bold()),
            MessageCategory::System => writeln!(self.out, "{}", text.dark_grey()),
            MessageCategory::Action => writeln!(self.out, "{}", text),
        }
    }

    /// Render messages in order and flush
    pub fn render_all<'a>(&mut self, messages: impl IntoIterator<Item = &'a BattleMessage>) -> io::Result<()> {
        for message in messages {
            self.render(message)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MessageLog;

    #[test]
    fn test_plain_output() {
        let mut log = MessageLog::new();
        log.add("Round 1", MessageCategory::Round);
        log.action("John attacks Evan and Evan takes 3 damage");

        let mut console = Console::new(Vec::new(), false);
        console.render_all(log.messages()).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "Round 1\nJohn attacks Evan and Evan takes 3 damage\n");
    }

    #[test]
    fn test_colored_output_wraps_text() {
        let mut log = MessageLog::new();
        log.add("Stacy has been eliminated", MessageCategory::Elimination);

        let mut console = Console::new(Vec::new(), true);
        console.render_all(log.messages()).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.contains("Stacy has been eliminated"));
        assert!(text.ends_with('\n'));
    }
}
