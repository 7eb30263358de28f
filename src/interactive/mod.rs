//! Full-screen live filter
//!
//! Results update on every keystroke in the pattern, include and exclude fields.

mod app;
mod rendering;

pub use app::{App, Field, Message, MessageStyle, SearchState, run_tui};
