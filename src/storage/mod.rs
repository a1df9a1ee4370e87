pub mod json;
pub mod memory;

use std::fs;
use std::path::Path;

use crate::domain::contact::ContactBook;
use crate::errors::AppError;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Whole-snapshot persistence: `save` overwrites whatever `load` would
/// have returned before.
pub trait PersistenceProvider {
    /// Missing or empty backing data yields an empty book.
    fn load(&self) -> Result<ContactBook, AppError>;

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
