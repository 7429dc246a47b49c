mod head;
mod history;
mod paused;
mod point;
mod segment;
mod session;
use self::paused::{PauseOpt, Paused};
use self::point::Point;
use self::session::{GameOverCause, Session, TickOutcome};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::highscores;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area, Globals};
use crate::warning::Warning;
use crossterm::event::{poll, read, Event, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// The gameplay screen: owns the simulation, feeds it the latched pointer
/// target once per tick, and projects it onto the terminal.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    globals: Globals,
    state: GameState,

    /// Pointer target in play-area coordinates, overwritten by every mouse
    /// event and read once per tick (last value wins)
    target: Point,

    /// The board interior, in buffer cells, as of the most recent draw;
    /// used to map mouse positions into play-area coordinates
    board: Rect,

    next_tick: Option<Instant>,

    /// A persistence failure waiting to be picked up by the app loop
    warning: Option<Warning>,

    /// Set after a failed high-score write so each session warns at most
    /// once and stops retrying a broken disk
    save_failed: bool,
}

impl Game {
    pub(crate) fn new(globals: Globals) -> Game {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        Game {
            session: Session::new_with_rng(rng),
            globals,
            state: GameState::Running,
            target: Point::ZERO,
            board: Rect::ZERO,
            next_tick: None,
            warning: None,
            save_failed: false,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        match self.session.tick(self.target) {
            TickOutcome::Continue => (),
            TickOutcome::AppleEaten => self.record_score(),
            TickOutcome::GameOver(cause) => self.state = GameState::Over(cause),
        }
    }

    /// After a growth event, push the high score along, persisting it the
    /// moment it is beaten
    fn record_score(&mut self) {
        if self.session.score() > self.globals.high_score {
            self.globals.high_score = self.session.score();
            if !self.save_failed {
                if let Err(e) = highscores::save(&self.globals.config, self.globals.high_score) {
                    self.save_failed = true;
                    self.warning = Some(Warning::from(e));
                }
            }
        }
    }

    fn restart(&mut self) {
        self.session.reset();
        self.target = Point::ZERO;
        self.state = GameState::Running;
        self.next_tick = None;
        self.save_failed = false;
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
            column,
            row,
            ..
        }) = event
        {
            self.target = self.pointer_target(column, row);
            return None;
        }
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Esc => self.pause(),
                        _ => (),
                    }
                }
            }
            GameState::Paused(ref mut paused) => {
                match paused.handle_command(Command::from_key_event(event.as_key_press_event()?)?)?
                {
                    PauseOpt::Resume => self.state = GameState::Running,
                    PauseOpt::Restart => self.restart(),
                    PauseOpt::MainMenu => {
                        return Some(Screen::Main(MainMenu::new(self.globals.clone())))
                    }
                    PauseOpt::Quit => return Some(Screen::Quit),
                }
            }
            GameState::Over(_) => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::R => self.restart(),
                    Command::M => return Some(Screen::Main(MainMenu::new(self.globals.clone()))),
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) {
        self.board = ScreenLayout::new(frame.area()).board_interior();
        frame.render_widget(&*self, frame.area());
    }

    pub(crate) fn take_warning(&mut self) -> Option<Warning> {
        self.warning.take()
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused(Paused::new());
        self.next_tick = None;
    }

    /// Map a terminal cell to the play-area point at that cell's center,
    /// clamped into the play area so that steering keeps working when the
    /// pointer wanders past the border
    fn pointer_target(&self, column: u16, row: u16) -> Point {
        let col = f64::from(column.saturating_sub(self.board.x));
        let row = f64::from(row.saturating_sub(self.board.y));
        Point::new(
            ((col + 0.5) * consts::CELL_WIDTH).clamp(0.0, consts::PLAY_WIDTH - 1.0),
            ((row + 0.5) * consts::CELL_HEIGHT).clamp(0.0, consts::PLAY_HEIGHT - 1.0),
        )
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ScreenLayout::new(area);
        let styles = &self.globals.config.styles;

        Line::styled(
            format!(" Score: {}", self.session.score()),
            styles.score_bar(),
        )
        .render(layout.score_bar, buf);
        Line::styled(
            format!("High score: {} ", self.globals.high_score),
            styles.score_bar(),
        )
        .right_aligned()
        .render(layout.score_bar, buf);

        Block::bordered().render(layout.board, buf);
        let mut canvas = Canvas {
            area: layout.board_interior(),
            buf,
        };
        for segment in self.session.segments() {
            if let Some(pos) = segment.position() {
                canvas.fill_box(pos, consts::SNAKE_BODY_SYMBOL, styles.snake());
            }
        }
        canvas.fill_box(self.session.apple(), consts::APPLE_SYMBOL, styles.apple());
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if matches!(self.state, GameState::Over(_)) {
            canvas.fill_box(
                self.session.head_position(),
                consts::SNAKE_HEAD_SYMBOL,
                styles.collision(),
            );
        } else {
            canvas.fill_box(
                self.session.head_position(),
                consts::SNAKE_HEAD_SYMBOL,
                styles.snake(),
            );
        }

        match self.state {
            GameState::Running => (),
            GameState::Paused(paused) => {
                let pause_area = center_rect(
                    layout.display,
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                paused.render(pause_area, buf);
            }
            GameState::Over(cause) => {
                Line::from_iter([
                    Span::raw(format!(" GAME OVER: {}.  Restart (", cause.label())),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") / Main Menu ("),
                    Span::styled("m", consts::KEY_STYLE),
                    Span::raw(") / Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(layout.message, buf);
            }
        }
    }
}

/// The fixed carve-up of the display area: score bar, bordered board,
/// message line
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ScreenLayout {
    display: Rect,
    score_bar: Rect,
    board: Rect,
    message: Rect,
}

impl ScreenLayout {
    fn new(buffer_area: Rect) -> ScreenLayout {
        let display = get_display_area(buffer_area);
        let [score_bar, board, message] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let board = center_rect(
            board,
            Size {
                width: consts::BOARD_COLS + 2,
                height: consts::BOARD_ROWS + 2,
            },
        );
        ScreenLayout {
            display,
            score_bar,
            board,
            message,
        }
    }

    fn board_interior(self) -> Rect {
        self.board.inner(Margin::new(1, 1))
    }
}

/// Paints play-area boxes onto the board's cell grid
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Fill every cell touched by the `ENTITY_SIZE` box anchored at `pos`,
    /// clipped to the board
    fn fill_box(&mut self, pos: Point, symbol: char, style: Style) {
        let (x0, x1) = cell_span(pos.x, consts::CELL_WIDTH, self.area.width);
        let (y0, y1) = cell_span(pos.y, consts::CELL_HEIGHT, self.area.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let cell_pos = (self.area.x.saturating_add(x), self.area.y.saturating_add(y));
                if let Some(cell) = self.buf.cell_mut(cell_pos) {
                    cell.set_char(symbol);
                    cell.set_style(Style::reset().patch(style));
                }
            }
        }
    }
}

/// Cells `[start, end)` covered by the span `[origin, origin + ENTITY_SIZE)`
/// along one axis at `scale` units per cell, clipped to `limit` cells
fn cell_span(origin: f64, scale: f64, limit: u16) -> (u16, u16) {
    let start = (origin / scale).floor().clamp(0.0, f64::from(limit));
    let end = ((origin + consts::ENTITY_SIZE) / scale)
        .ceil()
        .clamp(start, f64::from(limit));
    (start as u16, end as u16)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    Over(GameOverCause),
}
