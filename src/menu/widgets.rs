use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Widget,
};

/// The two-tone banner at the top of the main menu.  Each row is split
/// where "Mouse" ends and "Snake" begins, so the halves can be styled
/// separately.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

static LOGO_LINES: [(&str, &str); 5] = [
    (
        r" __  __                          ",
        r" ____                 _          ",
    ),
    (
        r"|  \/  |  ___   _   _  ___   ___ ",
        r"/ ___|  _ __    __ _ | | __  ___ ",
    ),
    (
        r"| |\/| | / _ \ | | | |/ __| / _ \",
        r"\___ \ | '_ \  / _` || |/ / / _ \",
    ),
    (
        r"| |  | || (_) || |_| |\__ \|  __/",
        r" ___) || | | || (_| ||   < |  __/",
    ),
    (
        r"|_|  |_| \___/  \__,_||___/ \___|",
        r"|____/ |_| |_| \__,_||_|\_\ \___|",
    ),
];

impl Logo {
    pub(super) const HEIGHT: u16 = 5;
    pub(super) const HALF_WIDTH: u16 = 33;
    pub(super) const WIDTH: u16 = Self::HALF_WIDTH * 2;
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for ((mouse, snake), row) in LOGO_LINES.iter().zip(area.rows()) {
            Line::from_iter([
                Span::styled(*mouse, consts::APPLE_STYLE),
                Span::styled(*snake, consts::SNAKE_STYLE),
            ])
            .render(row, buf);
        }
    }
}

/// How-to-play blurb shown under the logo
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

static INSTRUCTIONS: &[&str] = &[
    "Steer the snake with the mouse.",
    "Eat apples to grow your tail,",
    "but never cross it or leave the",
    "board.",
];

impl Instructions {
    /// Kept even so the block centers exactly within the display width
    pub(super) const WIDTH: u16 = 32;
    pub(super) const HEIGHT: u16 = 4;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(INSTRUCTIONS.iter().copied()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_dimensions() {
        assert_eq!(LOGO_LINES.len(), usize::from(Logo::HEIGHT));
        for (mouse, snake) in LOGO_LINES {
            assert_eq!(mouse.chars().count(), usize::from(Logo::HALF_WIDTH));
            assert_eq!(snake.chars().count(), usize::from(Logo::HALF_WIDTH));
        }
    }

    #[test]
    fn instructions_dimensions() {
        assert_eq!(INSTRUCTIONS.len(), usize::from(Instructions::HEIGHT));
        let max_width = INSTRUCTIONS.iter().map(|line| line.len()).max().unwrap();
        assert!(max_width <= usize::from(Instructions::WIDTH));
    }
}
