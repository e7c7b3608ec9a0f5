use crossterm::terminal;
use log::debug;
use std::{
    error, fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::ellipsis::{truncate_with_tail, Truncation};
use crate::measure::{CellMeasurer, MeasuredText};

pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

/// Delay that collapses a burst of resize/input events into one recompute.
pub const DEBOUNCE: Duration = Duration::from_millis(100);

/// Cells the container width moves per keypress.
const WIDTH_STEP: u16 = 5;

/// Narrowest container the demo allows; keeps the border drawable.
const MIN_CONTAINER_WIDTH: u16 = 4;

const TABLE_ROWS: usize = 200;

#[derive(Debug, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, PartialEq)]
pub enum PageMode {
    Single,
    Table,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub page_mode: PageMode,
    pub samples: Vec<String>,
    pub sample_index: usize,
    pub tail_len: usize,
    pub title: String,
    pub container_width: u16,
    pub scroll: u16,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub truncation: Truncation,
    pub table_rows: Vec<String>,
    measured: MeasuredText,
    pending_recompute: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        let samples = vec![
            "feature/create-new-text-ellipsis-component-TC2018.02".to_string(),
            "/home/user/projects/tailtrim/src/very/deeply/nested/module/ellipsis.rs".to_string(),
            "backup-2024-11-30T23-59-59.tar.gz".to_string(),
            "ディレクトリ/長い日本語のファイル名-2024.md".to_string(),
            "short.txt".to_string(),
        ];
        let table_rows = (0..TABLE_ROWS)
            .map(|i| format!("A long long long long long long looooooong text in a {} row", i))
            .collect();

        Self {
            running: true,
            input_mode: InputMode::Normal,
            page_mode: PageMode::Single,
            samples,
            sample_index: 0,
            tail_len: 5,
            title: "A new amazing feature!".to_string(),
            container_width: 30,
            scroll: 0,
            terminal_width: 80,
            terminal_height: 24,
            truncation: Truncation::default(),
            table_rows,
            measured: MeasuredText::new(),
            pending_recompute: None,
        }
    }
}

impl App {
    pub fn new() -> Self {
        let mut app = Self::default();

        // Get initial terminal size
        if let Ok((width, height)) = terminal::size() {
            app.terminal_width = width;
            app.terminal_height = height;
        }

        // Initial pass runs synchronously so the first frame is populated.
        app.recompute();
        app
    }

    /// Handles the tick event of the terminal: runs a pending recompute
    /// once its debounce deadline has passed.
    pub fn tick(&mut self) {
        self.flush_recompute(Instant::now());
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn get_log_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tailtrim");
        path.push("logs");
        fs::create_dir_all(&path).unwrap_or_default();
        path.push("tailtrim.log");
        path
    }

    pub fn current_text(&self) -> &str {
        &self.samples[self.sample_index]
    }

    /// Inner width of the demo container, minus its two border cells.
    pub fn available_width(&self) -> u16 {
        self.container_width.saturating_sub(2)
    }

    /// Tooltip to surface under the container, present only while the text
    /// overflows it.
    pub fn tooltip(&self) -> Option<&str> {
        self.truncation.tooltip(&self.title)
    }

    /// Cached display width of the most recently measured sample.
    pub fn measured_width(&self) -> Option<u16> {
        self.measured.cached_width()
    }

    pub fn recompute_pending(&self) -> bool {
        self.pending_recompute.is_some()
    }

    /// Schedules a recompute, replacing any pending deadline so only the
    /// most recently scheduled one ever fires.
    pub fn schedule_recompute(&mut self) {
        self.pending_recompute = Some(Instant::now() + DEBOUNCE);
    }

    /// Runs the pending recompute if its deadline has passed at `now`.
    pub fn flush_recompute(&mut self, now: Instant) {
        if let Some(deadline) = self.pending_recompute {
            if now >= deadline {
                self.pending_recompute = None;
                self.recompute();
            }
        }
    }

    /// Measures the current sample (cached across resizes) and recomputes
    /// the truncation for the current container width.
    pub fn recompute(&mut self) {
        let available = self.available_width();
        let tail_len = self.tail_len;
        let text = &self.samples[self.sample_index];
        let measured = self.measured.width(text, &CellMeasurer);
        self.truncation = truncate_with_tail(text, tail_len, measured, available);
        debug!(
            "recomputed: measured={} available={} tail_len={} overflow={}",
            measured, available, tail_len, self.truncation.overflow
        );
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        if self.container_width > width {
            self.container_width = width.max(MIN_CONTAINER_WIDTH);
        }
        self.schedule_recompute();
    }

    pub fn grow_container(&mut self) {
        let max = self.terminal_width.saturating_sub(2).max(MIN_CONTAINER_WIDTH);
        self.container_width = (self.container_width + WIDTH_STEP).min(max);
        self.schedule_recompute();
    }

    pub fn shrink_container(&mut self) {
        self.container_width = self
            .container_width
            .saturating_sub(WIDTH_STEP)
            .max(MIN_CONTAINER_WIDTH);
        self.schedule_recompute();
    }

    pub fn increase_tail(&mut self) {
        self.tail_len += 1;
        self.schedule_recompute();
    }

    pub fn decrease_tail(&mut self) {
        self.tail_len = self.tail_len.saturating_sub(1);
        self.schedule_recompute();
    }

    pub fn next_sample(&mut self) {
        self.sample_index = (self.sample_index + 1) % self.samples.len();
        self.schedule_recompute();
    }

    pub fn previous_sample(&mut self) {
        self.sample_index = if self.sample_index > 0 {
            self.sample_index - 1
        } else {
            self.samples.len() - 1
        };
        self.schedule_recompute();
    }

    pub fn toggle_page(&mut self) {
        self.page_mode = match self.page_mode {
            PageMode::Single => PageMode::Table,
            PageMode::Table => PageMode::Single,
        };
        self.scroll = 0;
    }

    pub fn toggle_help(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Normal => InputMode::Help,
            InputMode::Help => InputMode::Normal,
        };
    }

    /// Table rows visible at once. Terminal layout: 3 lines title bar +
    /// 3 lines command bar + 2 lines of table borders.
    pub fn rows_per_page(&self) -> usize {
        (self.terminal_height.saturating_sub(8) as usize).max(1)
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max_scroll = self.table_rows.len().saturating_sub(self.rows_per_page()) as u16;
        if self.scroll < max_scroll {
            self.scroll += 1;
        }
    }
}
