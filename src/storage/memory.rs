use std::cell::RefCell;

use super::*;

/// Keeps the snapshot in process memory; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemStorage {
    data: RefCell<ContactBook>,
}

impl MemStorage {
    pub fn new(contacts: ContactBook) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl PersistenceProvider for MemStorage {
    fn load(&self) -> Result<ContactBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
