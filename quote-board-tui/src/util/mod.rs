//! Util 层：终端与日志等基础设施

pub mod logging;
mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
