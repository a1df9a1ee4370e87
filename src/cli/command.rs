use std::str::FromStr;

use crate::errors::AppError;

/// Menu entries, each bound to one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Find,
    Edit,
    Delete,
    Quit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::Find,
        Command::Edit,
        Command::Delete,
        Command::Quit,
    ];

    pub fn letter(self) -> char {
        match self {
            Command::Add => 'A',
            Command::Find => 'F',
            Command::Edit => 'E',
            Command::Delete => 'D',
            Command::Quit => 'Q',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Add => "Add new contact",
            Command::Find => "Find existing contact",
            Command::Edit => "Edit existing contact",
            Command::Delete => "Delete existing contact",
            Command::Quit => "Quit",
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    // Case-insensitive, surrounding whitespace ignored
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let action = input.trim().to_uppercase();

        Command::ALL
            .into_iter()
            .find(|command| action.len() == 1 && action.starts_with(command.letter()))
            .ok_or(AppError::ParseCommand(action))
    }
}
