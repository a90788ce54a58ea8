pub mod app;
pub mod commands;
pub mod draft_file;

pub use app::{Cli, Commands};
