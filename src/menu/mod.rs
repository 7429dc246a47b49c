mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::util::{get_display_area, Globals};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

/// The main menu screen
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MainMenu {
    globals: Globals,
    selection: Selection,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> MainMenu {
        MainMenu {
            globals,
            selection: Selection::default(),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit | Command::Q) => return Some(Screen::Quit),
            (_, Command::P) => return Some(Screen::Game(self.play())),
            (Selection::Play, Command::Enter) => return Some(Screen::Game(self.play())),
            (Selection::Quit, Command::Enter) => return Some(Screen::Quit),
            (_, Command::Home) => self.selection = Selection::Play,
            (_, Command::End) => self.selection = Selection::Quit,
            (Selection::Play, Command::Down | Command::Next | Command::Prev) => {
                self.selection = Selection::Quit;
            }
            (Selection::Quit, Command::Up | Command::Next | Command::Prev) => {
                self.selection = Selection::Play;
            }
            _ => (),
        }
        None
    }

    fn play(&self) -> Game {
        Game::new(self.globals.clone())
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, score_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        let play_style = if self.selection == Selection::Play {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from(Span::styled("[Play (p)]", play_style))
            .centered()
            .render(play_area, buf);

        Line::from(format!("High score: {}", self.globals.high_score))
            .centered()
            .render(score_area, buf);

        let quit_style = if self.selection == Selection::Quit {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from(Span::styled("[Quit (q)]", quit_style))
            .centered()
            .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Selection {
    #[default]
    Play,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn draw_initial() {
        let menu = MainMenu::new(Globals::default());
        let area = Rect::new(0, 0, 82, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            r"         __  __                           ____                 _                  ",
            r"        |  \/  |  ___   _   _  ___   ___ / ___|  _ __    __ _ | | __  ___         ",
            r"        | |\/| | / _ \ | | | |/ __| / _ \\___ \ | '_ \  / _` || |/ / / _ \",
            r"        | |  | || (_) || |_| |\__ \|  __/ ___) || | | || (_| ||   < |  __/        ",
            r"        |_|  |_| \___/  \__,_||___/ \___||____/ |_| |_| \__,_||_|\_\ \___|        ",
            "                                                                                  ",
            "                         Steer the snake with the mouse.                          ",
            "                         Eat apples to grow your tail,                            ",
            "                         but never cross it or leave the                          ",
            "                         board.                                                   ",
            "                                                                                  ",
            "                                    [Play (p)]                                    ",
            "                                                                                  ",
            "                                  High score: 0                                   ",
            "                                                                                  ",
            "                                    [Quit (q)]                                    ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
            "                                                                                  ",
        ]);
        expected.set_style(Rect::new(8, 0, 33, 5), consts::APPLE_STYLE);
        expected.set_style(Rect::new(41, 0, 33, 5), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(36, 11, 10, 1), consts::MENU_SELECTION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn enter_plays_then_quit_is_reachable() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu
            .handle_event(Event::Key(KeyCode::Down.into()))
            .is_none());
        assert_eq!(menu.selection, Selection::Quit);
        assert!(matches!(
            menu.handle_event(Event::Key(KeyCode::Enter.into())),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn p_starts_a_game_from_anywhere() {
        let mut menu = MainMenu::new(Globals::default());
        menu.selection = Selection::Quit;
        assert!(matches!(
            menu.handle_event(Event::Key(KeyCode::Char('p').into())),
            Some(Screen::Game(_))
        ));
    }
}
