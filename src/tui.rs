use crate::app::{App, AppResult};
use crate::event::EventHandler;
use crate::ui;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::panic;

/// Representation of the terminal user interface.
///
/// Owns the terminal and the event handler, and is responsible for setting
/// up and restoring the terminal state on every exit path.
#[derive(Debug)]
pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
    /// Terminal event handler.
    pub events: EventHandler,
}

impl<B: Backend> Tui<B> {
    pub fn new(terminal: Terminal<B>, events: EventHandler) -> Self {
        Self { terminal, events }
    }

    /// Enables raw mode and the alternate screen, and installs a panic
    /// hook that restores the terminal before the default handler runs.
    pub fn init(&mut self) -> AppResult<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            reset().expect("failed to reset the terminal");
            panic_hook(panic);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Draws the current [`App`] state to the terminal.
    pub fn draw(&mut self, app: &App) -> AppResult<()> {
        self.terminal.draw(|frame| ui::render(app, frame))?;
        Ok(())
    }

    /// Restores the terminal on a normal exit.
    pub fn exit(&mut self) -> AppResult<()> {
        reset()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Resets the terminal. Also called from the panic hook, so it does not
/// take `self`.
fn reset() -> AppResult<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
