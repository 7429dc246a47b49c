use crate::command::Command;
use crate::game::Game;
use crate::menu::MainMenu;
use crate::util::Globals;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Top-level screen driver
#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,

    /// A pending pop-up laid over the current screen; it consumes all input
    /// until dismissed
    warning: Option<Warning>,
}

impl App {
    pub(crate) fn new(globals: Globals, warning: Option<Warning>) -> App {
        App {
            screen: Screen::Main(MainMenu::new(globals)),
            warning,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let App { screen, warning } = self;
        match screen {
            Screen::Main(menu) => {
                terminal.draw(|frame| {
                    menu.draw(frame);
                    if let Some(warning) = warning {
                        frame.render_widget(&*warning, frame.area());
                    }
                })?;
            }
            Screen::Game(game) => {
                terminal.draw(|frame| {
                    game.draw(frame);
                    if let Some(warning) = warning {
                        frame.render_widget(&*warning, frame.area());
                    }
                })?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        if self.warning.is_some() {
            let cmd = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event);
            let outcome = self
                .warning
                .as_ref()
                .zip(cmd)
                .and_then(|(warning, cmd)| warning.handle_command(cmd));
            match outcome {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
                None => (),
            }
            return Ok(());
        }
        match self.screen {
            Screen::Main(ref mut menu) => {
                if let Some(screen) = menu.process_input()? {
                    self.screen = screen;
                }
            }
            Screen::Game(ref mut game) => {
                if let Some(screen) = game.process_input()? {
                    self.screen = screen;
                }
                if let Screen::Game(ref mut game) = self.screen {
                    if let Some(warning) = game.take_warning() {
                        self.warning = Some(warning);
                    }
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Game(Game),
    Quit,
}
