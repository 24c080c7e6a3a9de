//! Bridge between the UI thread and the contact worker.

pub mod commands;
pub mod runtime;
