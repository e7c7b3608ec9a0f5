use crate::app::AppResult;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Terminal events.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// Terminal tick.
    Tick,
    /// Key press.
    Key(KeyEvent),
    /// Mouse click/scroll.
    Mouse(MouseEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Terminal event handler: forwards crossterm events and periodic ticks
/// over a channel from a background task.
#[derive(Debug)]
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] with the given tick
    /// rate in milliseconds.
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (event_sender, receiver) = mpsc::unbounded_channel();
        let handler = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);
            loop {
                let tick_delay = tick.tick();
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    _ = event_sender.closed() => {
                        break;
                    }
                    _ = tick_delay => {
                        if event_sender.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = crossterm_event => {
                        let forwarded = match evt {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                event_sender.send(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => event_sender.send(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(x, y) => event_sender.send(Event::Resize(x, y)),
                            _ => Ok(()),
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                };
            }
        });
        Self { receiver, handler }
    }

    /// Receives the next event from the handler task.
    ///
    /// This function blocks the current task until an event arrives; it
    /// errors only when the sender half has been dropped.
    pub async fn next(&mut self) -> AppResult<Event> {
        self.receiver.recv().await.ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "event channel closed",
            )) as Box<dyn std::error::Error>
        })
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
