//! Navigation module.
//!
//! The page state machine that drives a shopping session, and the console
//! it talks through.

mod console;
mod engine;
mod page;

pub use console::{parse_choice, Console, LineConsole};
pub use engine::{NavigationEngine, FAREWELL, INVALID_CHOICE, WELCOME};
pub use page::Page;
