use std::io::{BufRead, Write};

use tracing::{debug, error, info, warn};

use crate::cli::command::Command;
use crate::cli::console::Console;
use crate::config::Config;
use crate::domain::store::ContactStore;
use crate::errors::AppError;
use crate::storage::{JsonStorage, PersistenceProvider};

pub const MENU_PROMPT: &str = "Please insert option from the menu: ";

pub fn run_app(config: &Config) -> Result<(), AppError> {
    let storage = JsonStorage::new(&config.contacts_path);
    let mut store = ContactStore::load(&storage)?;
    let mut console = Console::stdio();

    run(&mut store, &storage, &mut console)
}

pub fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    for command in Command::ALL {
        console.say(format!("{}: {}", command.letter(), command.description()))?;
    }
    Ok(())
}

/// Reads commands until `Q` or end of input, saving the book either way.
pub fn run<R: BufRead, W: Write>(
    store: &mut ContactStore,
    storage: &dyn PersistenceProvider,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    show_menu(console)?;

    loop {
        let action = match console.ask(MENU_PROMPT) {
            Ok(action) => action,
            Err(AppError::InputClosed) => {
                warn!("input closed, saving before exit");
                return close(store, storage, console);
            }
            Err(e) => return abort(store, storage, e),
        };

        let command = match action.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "rejected menu input");
                console.say("Invalid option, please try again.")?;
                continue;
            }
        };

        debug!(?command, "dispatching");
        let outcome = match command {
            Command::Add => store.add(console),
            Command::Find => store.find(console),
            Command::Edit => store.edit(console),
            Command::Delete => store.delete(console),
            Command::Quit => return close(store, storage, console),
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                info!(?command, error = %e, "operation abandoned");
                show_menu(console)?;
            }
            Err(AppError::InputClosed) => {
                warn!(?command, "input closed mid-operation, saving before exit");
                return close(store, storage, console);
            }
            Err(e) => return abort(store, storage, e),
        }
    }
}

fn close<R: BufRead, W: Write>(
    store: &ContactStore,
    storage: &dyn PersistenceProvider,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    store.save(storage)?;
    console.say("Database Saved.")
}

// Keeps the session's changes when the console itself fails
fn abort(
    store: &ContactStore,
    storage: &dyn PersistenceProvider,
    error: AppError,
) -> Result<(), AppError> {
    match store.save(storage) {
        Ok(()) => warn!(error = %error, "console failed, book saved"),
        Err(save_error) => error!(error = %error, %save_error, "console failed, book not saved"),
    }
    Err(error)
}
