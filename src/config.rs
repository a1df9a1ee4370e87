use dotenv::dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_CONTACTS_PATH: &str = "./.instance/contacts.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the JSON snapshot holding the contact book
    pub contacts_path: PathBuf,
}

impl Config {
    /// Reads `CONTACTS_PATH`, loading a `.env` file first when one exists.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; unset or blank
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("CONTACTS_PATH").filter(|path| !path.trim().is_empty()) {
            config.contacts_path = PathBuf::from(path);
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts_path: PathBuf::from(DEFAULT_CONTACTS_PATH),
        }
    }
}
