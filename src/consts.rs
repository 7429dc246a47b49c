//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between simulation ticks
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(5);

/// Width of the play area, in simulation units
pub(crate) const PLAY_WIDTH: f64 = 800.0;

/// Height of the play area, in simulation units
pub(crate) const PLAY_HEIGHT: f64 = 600.0;

/// Side length of the bounding box of every entity (head, trailing
/// segments, apple), in simulation units
pub(crate) const ENTITY_SIZE: f64 = 80.0;

/// Number of path-history entries between consecutive trailing segments'
/// cursors.  The head records one entry per unit moved, so this is one body
/// length.
pub(crate) const SEGMENT_SPACING: i64 = 80;

/// Trailing segments with this ordinal or lower are exempt from
/// self-collision; at one body length of spacing, their boxes graze the
/// head's box on any curved path.
pub(crate) const COLLISION_EXEMPT_SEGMENTS: usize = 2;

/// Number of terminal columns the play area is projected onto
pub(crate) const BOARD_COLS: u16 = 80;

/// Number of terminal rows the play area is projected onto
pub(crate) const BOARD_ROWS: u16 = 20;

/// Simulation units covered by one board column
pub(crate) const CELL_WIDTH: f64 = PLAY_WIDTH / BOARD_COLS as f64;

/// Simulation units covered by one board row
pub(crate) const CELL_HEIGHT: f64 = PLAY_HEIGHT / BOARD_ROWS as f64;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the board plus its border, a score bar above, and a
/// message line below.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: BOARD_COLS + 2,
    height: BOARD_ROWS + 4,
};

/// Glyph for the cells of the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the cells of the snake's trailing segments
pub(crate) const SNAKE_BODY_SYMBOL: char = '▓';

/// Glyph for the cells of the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Style for the snake's head and trailing segments
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the head after a session-ending collision
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
