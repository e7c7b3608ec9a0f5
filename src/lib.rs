//! Terminal text ellipsis that keeps the tail of long strings visible.
//!
//! Long single-line text (branch names, file paths, archive names) usually
//! carries its most identifying part at the end. [`ellipsis::TailEllipsis`]
//! truncates overflowing text in the middle instead of at the end, so the
//! last `tail_len` characters stay on screen. The split itself is available
//! as [`ellipsis::truncate_with_tail`] for callers that render by other
//! means. The remaining modules form the interactive demo binary.

pub mod app;
pub mod ellipsis;
pub mod event;
pub mod handler;
pub mod measure;
pub mod tui;
pub mod ui;
