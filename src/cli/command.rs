use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug, Clone)]
#[command(name = "address-book", version, about = "Simple Address Book")]
pub struct Cli {
    /// Start without the sample persons
    #[arg(long, env = "ADDRESS_BOOK_EMPTY")]
    pub empty: bool,

    /// Window title shown above the person table
    #[arg(long, env = "ADDRESS_BOOK_TITLE", default_value_t = String::from("AddressApp"))]
    pub title: String,
}

/// Menu actions of the person overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a table row (0-based)
    Select(usize),
    ClearSelection,
    New,
    Edit,
    Delete,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, AppError> {
    let action = input.trim().to_lowercase();

    if let Ok(row) = action.parse::<usize>() {
        return Ok(match row {
            0 => Command::ClearSelection,
            row => Command::Select(row - 1),
        });
    }

    match action.as_str() {
        "n" | "new" => Ok(Command::New),
        "e" | "edit" => Ok(Command::Edit),
        "d" | "delete" => Ok(Command::Delete),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => Err(AppError::ParseCommand(input.trim().to_string())),
    }
}

pub fn menu() -> &'static str {
    "\n[1..] select row   [0] clear selection   [n]ew   [e]dit   [d]elete   [q]uit"
}
