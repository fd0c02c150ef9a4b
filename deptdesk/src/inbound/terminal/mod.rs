//! Line-oriented terminal adapter.
//!
//! [`Shell`] owns the screen loop and maps typed commands onto the domain
//! components; [`Prompter`] abstracts the keyboard so tests can script it.

mod command;
mod prompt;
mod render;
mod shell;

pub use command::{FormCommand, HELP, MainCommand, parse_form, parse_main};
#[cfg(any(test, feature = "test-support"))]
pub use prompt::ScriptedPrompter;
pub use prompt::{DialoguerPrompter, Prompter};
pub use render::{department_table, notice};
pub use shell::Shell;
