use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

/// Every contact keyed by name. Values are checked on the way in by the
/// interactive layer, never on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    entries: HashMap<String, String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn phone(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn find(&self, name: &str) -> Result<Contact, AppError> {
        self.phone(name)
            .map(|phone| Contact::new(name, phone))
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    pub fn insert(&mut self, contact: Contact) -> Result<(), AppError> {
        if self.contains(&contact.name) {
            return Err(AppError::AlreadyExists(contact.name));
        }
        self.entries.insert(contact.name, contact.phone);
        Ok(())
    }

    /// Replaces the phone of an existing contact, returning the old one.
    pub fn update(&mut self, name: &str, phone: String) -> Result<String, AppError> {
        match self.entries.get_mut(name) {
            Some(current) => Ok(std::mem::replace(current, phone)),
            None => Err(AppError::NotFound(name.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Result<Contact, AppError> {
        self.entries
            .remove_entry(name)
            .map(|(name, phone)| Contact { name, phone })
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        ContactBook {
            entries: iter
                .into_iter()
                .map(|contact| (contact.name, contact.phone))
                .collect(),
        }
    }
}
