use dotenv::dotenv;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;
use std::fs::File;
use std::io;

use ratatui::{backend::CrosstermBackend, Terminal};

use tailtrim::{
    app::{App, AppResult},
    event::{Event, EventHandler},
    handler::handle_key_events,
    tui::Tui,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load .env file
    dotenv().ok();

    // Setup logging if in debug mode
    if env::var("TAILTRIM_ENV").unwrap_or_default() == "DEBUG" {
        let log_path = App::get_log_path();
        println!("Log file location: {}", log_path.display());
        let file = File::create(log_path)?;

        Builder::new()
            .target(Target::Pipe(Box::new(file)))
            .filter_level(LevelFilter::Debug)
            .init();
    }

    // Create an application.
    let mut app = App::new();

    // Initialize the terminal user interface.
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(50);
    let mut tui = Tui::new(terminal, events);
    tui.init()?;

    // Start the main loop.
    while app.running {
        // Render the user interface.
        tui.draw(&app)?;
        // Handle events.
        match tui.events.next().await? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => handle_key_events(key_event, &mut app)?,
            Event::Mouse(_) => {}
            Event::Resize(width, height) => app.on_resize(width, height),
        }
    }

    // Exit the user interface.
    tui.exit()?;
    Ok(())
}
