use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::cli::console::Console;
use crate::errors::AppError;

pub const MAX_ATTEMPTS: usize = 3;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("phone pattern compiles"));

/// An input field and the pattern its whole value must match.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub label: &'static str,
    pattern: &'static LazyLock<Regex>,
}

// Letters and whitespace, at least one character
pub static NAME: Field = Field {
    label: "name",
    pattern: &NAME_PATTERN,
};

// Digits only, may be empty
pub static PHONE: Field = Field {
    label: "phone number",
    pattern: &PHONE_PATTERN,
};

impl Field {
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// Prompts for `field` until a reply matches, giving up after
/// [`MAX_ATTEMPTS`] tries with [`AppError::Validation`].
pub fn validate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    field: &Field,
) -> Result<String, AppError> {
    for attempt in 1..=MAX_ATTEMPTS {
        let input = console.ask(&format!("Insert {}: ", field.label))?;

        if field.matches(&input) {
            return Ok(input);
        }

        debug!(field = field.label, attempt, "rejected input");
        console.say(format!("Invalid {}, try again", field.label))?;
    }

    warn!(field = field.label, "retries exhausted");
    console.say(format!(
        "Failed to insert valid {}.\nExiting to main menu",
        field.label
    ))?;
    Err(AppError::Validation(field.label.to_string()))
}

pub fn validate_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, AppError> {
    validate(console, &NAME)
}

pub fn validate_phone<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, AppError> {
    validate(console, &PHONE)
}
