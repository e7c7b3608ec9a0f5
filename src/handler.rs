use crate::app::{App, AppResult, InputMode, PageMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handles the key events and updates the state of [`App`].
pub fn handle_key_events(key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    if app.input_mode == InputMode::Help {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                app.toggle_help();
            }
            _ => {}
        }
        return Ok(());
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
        }
        KeyCode::Char('?') => {
            app.toggle_help();
        }
        KeyCode::Char('t') | KeyCode::Tab => {
            app.toggle_page();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.increase_tail();
        }
        KeyCode::Char('-') => {
            app.decrease_tail();
        }
        _ => match app.page_mode {
            PageMode::Single => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    app.shrink_container();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    app.grow_container();
                }
                KeyCode::Char('n') => {
                    app.next_sample();
                }
                KeyCode::Char('p') => {
                    app.previous_sample();
                }
                _ => {}
            },
            PageMode::Table => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    app.scroll_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    app.scroll_down();
                }
                _ => {}
            },
        },
    }
    Ok(())
}
