use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// A pop-up surfacing a recoverable error.  It is rendered over whatever
/// screen is current, and input goes to it until it is dismissed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_TEXT_WIDTH: u16 = 48;

    /// Handle an input command.  Returns `Some` once the user is done with
    /// the pop-up.
    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Esc => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn from_error_messages(msgs: Vec<String>) -> Warning {
        if msgs.is_empty() {
            return Warning {
                lines: vec![String::from("You should never see this.")],
            };
        }
        let mut lines = Vec::new();
        let opts = textwrap::Options::new(usize::from(Warning::MAX_TEXT_WIDTH)).break_words(true);
        lines.extend(
            textwrap::wrap(msgs[0].as_str(), opts)
                .into_iter()
                .map(Cow::into_owned),
        );
        if msgs.len() > 1 {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            for m in msgs.iter().skip(1) {
                let opts = textwrap::Options::new(usize::from(Warning::MAX_TEXT_WIDTH))
                    .break_words(true)
                    .initial_indent("    ")
                    .subsequent_indent("    ");
                lines.extend(textwrap::wrap(m, opts).into_iter().map(Cow::into_owned));
            }
        }
        Warning { lines }
    }

    fn text_width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| u16::try_from(line.as_str().width()).unwrap_or(u16::MAX))
            .max()
            .unwrap_or(1)
            .min(Warning::MAX_TEXT_WIDTH)
    }
}

impl<E: std::error::Error> From<E> for Warning {
    fn from(e: E) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        Warning::from_error_messages(msgs)
    }
}

impl Widget for &Warning {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: self.text_width().saturating_add(4),
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_no_cause() {
        let warning = Warning::from_error_messages(vec![String::from("Terminal broke")]);
        let area = Rect::new(0, 0, 82, 24);
        let mut buffer = Buffer::empty(area);
        (&warning).render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                ┌─── WARNING ────┐                                ",
            "                                │ Terminal broke │                                ",
            "                                │                │                                ",
            "                                │      [OK]      │                                ",
            "                                └────────────────┘                                ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
        ]);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn error_chain_is_reported() {
        let warning = Warning::from(crate::highscores::LoadError::Read(std::io::Error::other(
            "disk on fire",
        )));
        assert_eq!(
            warning.lines,
            [
                "failed to read high-score file",
                "",
                "Caused by:",
                "    disk on fire",
            ]
        );
    }

    #[test]
    fn dismissal_commands() {
        let warning = Warning::from_error_messages(vec![String::from("oops")]);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Esc),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
        assert_eq!(warning.handle_command(Command::Up), None);
    }
}
