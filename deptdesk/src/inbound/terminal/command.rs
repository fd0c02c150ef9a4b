//! Command lines typed at the main and form screens, parsed with clap.

use clap::{Parser, Subcommand};

use crate::domain::FormProfile;

/// Commands accepted on the main screen.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum MainCommand {
    /// Highlight a department by id.
    Search {
        /// Department id; omitted means do nothing. Ids may be negative.
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },
    /// Reload every row and clear the highlight.
    Refresh,
    /// Open the manage form.
    Manage,
    /// Open the editor for a new department.
    New,
    /// Open the editor for an existing department.
    Edit {
        /// Department id.
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// List the commands.
    Help,
    /// Log out and leave.
    #[command(alias = "exit")]
    Quit,
}

/// Actions accepted on the form screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum FormCommand {
    /// Add a department.
    Insert,
    /// Replace a department.
    Update,
    /// Remove a department after confirmation.
    Delete,
    /// Insert or update, depending on the form.
    Save,
    /// Blank the inputs.
    Clear,
    /// Leave the form.
    #[command(alias = "cancel")]
    Close,
}

impl FormCommand {
    /// Whether the action is offered under `profile`.
    pub fn available_in(self, profile: FormProfile) -> bool {
        match self {
            Self::Insert | Self::Update => profile == FormProfile::Manage,
            Self::Save => profile != FormProfile::Manage,
            Self::Delete => profile.allows_delete(),
            Self::Clear | Self::Close => true,
        }
    }

    /// Prompt listing the actions offered under `profile`.
    pub fn prompt_for(profile: FormProfile) -> String {
        let names: Vec<&str> = [
            (Self::Insert, "insert"),
            (Self::Update, "update"),
            (Self::Save, "save"),
            (Self::Delete, "delete"),
            (Self::Clear, "clear"),
            (Self::Close, if profile == FormProfile::Manage { "close" } else { "cancel" }),
        ]
        .into_iter()
        .filter(|(command, _)| command.available_in(profile))
        .map(|(_, name)| name)
        .collect();
        format!("Action ({})", names.join("/"))
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "command",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct MainLine {
    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Debug, Parser)]
#[command(
    name = "action",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct FormLine {
    #[command(subcommand)]
    command: FormCommand,
}

/// Text printed for `help`.
pub const HELP: &str = "\
Commands:
  search <id>   highlight a department (blank id does nothing)
  refresh       reload all departments and clear the highlight
  manage        insert, update or delete any department
  new           add a department with a chosen id
  edit <id>     change an existing department
  help          show this list
  quit          log out and exit (also: exit)";

/// Parse a main-screen line. Blank lines yield `Ok(None)`; a rejected line
/// yields the reason.
pub fn parse_main(line: &str) -> Result<Option<MainCommand>, String> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    MainLine::try_parse_from(line.split_whitespace())
        .map(|parsed| Some(parsed.command))
        .map_err(|err| first_line(&err))
}

/// Parse a form-screen action line.
pub fn parse_form(line: &str) -> Result<Option<FormCommand>, String> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    FormLine::try_parse_from(line.split_whitespace())
        .map(|parsed| Some(parsed.command))
        .map_err(|err| first_line(&err))
}

fn first_line(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_owned()
}
