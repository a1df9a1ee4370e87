pub use crate::cli::{command::Command, console::Console, run, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    contact::{Contact, ContactBook},
    store::{ContactStore, Presence, check_contact},
};
pub use crate::errors::AppError;
pub use crate::storage::{JsonStorage, MemStorage, PersistenceProvider};
pub use crate::validation::{validate_name, validate_phone};
