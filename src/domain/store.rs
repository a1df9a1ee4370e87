use std::io::{BufRead, Write};

use tracing::info;

use super::contact::{Contact, ContactBook};
use crate::cli::console::Console;
use crate::errors::AppError;
use crate::storage::PersistenceProvider;
use crate::validation::{validate_name, validate_phone};

pub const ALREADY_EXISTS: &str = "Contact already exists";
pub const DOES_NOT_EXIST: &str = "Contact doesn't exist";

/// Whether an operation needs its contact to be in the book or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Absent,
    Present,
}

impl Presence {
    fn holds(self, book: &ContactBook, name: &str) -> bool {
        match self {
            Presence::Absent => !book.contains(name),
            Presence::Present => book.contains(name),
        }
    }
}

/// Wraps `action` so it only runs for a validated name meeting `required`.
/// Otherwise `message` is printed and the book is left untouched.
pub fn check_contact<R, W, F>(
    required: Presence,
    message: &'static str,
    action: F,
) -> impl Fn(&mut ContactBook, &mut Console<R, W>) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    F: Fn(&mut ContactBook, &mut Console<R, W>, String) -> Result<(), AppError>,
{
    move |book: &mut ContactBook, console: &mut Console<R, W>| {
        let name = validate_name(console)?;

        if required.holds(book, &name) {
            action(book, console, name)
        } else {
            info!(%name, ?required, "precondition not met");
            console.say(message)
        }
    }
}

/// The in-memory contact book and the interactive operations over it.
#[derive(Debug, Default)]
pub struct ContactStore {
    book: ContactBook,
}

impl ContactStore {
    pub fn new(book: ContactBook) -> Self {
        Self { book }
    }

    pub fn load(provider: &dyn PersistenceProvider) -> Result<Self, AppError> {
        let book = provider.load()?;
        info!(contacts = book.len(), medium = provider.get_medium(), "loaded");
        Ok(Self::new(book))
    }

    pub fn save(&self, provider: &dyn PersistenceProvider) -> Result<(), AppError> {
        provider.save(&self.book)?;
        info!(contacts = self.book.len(), medium = provider.get_medium(), "saved");
        Ok(())
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn add<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), AppError> {
        let add = check_contact::<R, W, _>(
            Presence::Absent,
            ALREADY_EXISTS,
            |book, console, name| {
                let phone = validate_phone(console)?;
                book.insert(Contact::new(name.clone(), phone))?;
                console.say(format!("User {name} added to contacts."))
            },
        );
        add(&mut self.book, console)
    }

    pub fn find<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), AppError> {
        let find = check_contact::<R, W, _>(
            Presence::Present,
            DOES_NOT_EXIST,
            |book, console, name| console.say(book.find(&name)?),
        );
        find(&mut self.book, console)
    }

    pub fn edit<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), AppError> {
        let edit = check_contact::<R, W, _>(
            Presence::Present,
            DOES_NOT_EXIST,
            |book, console, name| {
                let phone = validate_phone(console)?;
                book.update(&name, phone)?;
                console.say(format!("User {name} was updated."))
            },
        );
        edit(&mut self.book, console)
    }

    pub fn delete<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), AppError> {
        let delete = check_contact::<R, W, _>(
            Presence::Present,
            DOES_NOT_EXIST,
            |book, console, name| {
                book.remove(&name)?;
                console.say(format!("User {name} was deleted."))
            },
        );
        delete(&mut self.book, console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<String>, Vec<u8>>;
    type Operation = fn(&mut ContactStore, &mut TestConsole) -> Result<(), AppError>;

    fn run<F>(store: &mut ContactStore, input: &str, op: F) -> (Result<(), AppError>, String)
    where
        F: FnOnce(&mut ContactStore, &mut TestConsole) -> Result<(), AppError>,
    {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let result = op(store, &mut console);
        let output = String::from_utf8_lossy(&console.into_writer()).to_string();
        (result, output)
    }

    #[test]
    fn add_then_find_returns_the_new_phone() -> Result<(), AppError> {
        let mut store = ContactStore::default();

        let (result, output) = run(&mut store, "Alice\n12345\n", |s, c| s.add(c));
        result?;
        assert!(output.contains("User Alice added to contacts."));

        let (result, output) = run(&mut store, "Alice\n", |s, c| s.find(c));
        result?;
        assert!(output.contains("Alice: 12345"));
        Ok(())
    }

    #[test]
    fn add_existing_name_reports_conflict() -> Result<(), AppError> {
        let mut store = ContactStore::new([Contact::new("Alice", "12345")].into_iter().collect());

        // The phone line is never consumed
        let (result, output) = run(&mut store, "Alice\n999\n", |s, c| s.add(c));
        result?;

        assert!(output.contains(ALREADY_EXISTS));
        assert!(!output.contains("Insert phone number"));
        assert_eq!(store.book().phone("Alice"), Some("12345"));
        Ok(())
    }

    #[test]
    fn absent_name_reports_missing_contact() -> Result<(), AppError> {
        let mut store = ContactStore::new([Contact::new("Bob", "1")].into_iter().collect());
        let before = store.book().clone();

        let operations: [Operation; 3] =
            [ContactStore::find, ContactStore::edit, ContactStore::delete];
        for op in operations {
            let (result, output) = run(&mut store, "Alice\n", op);
            result?;
            assert!(output.contains(DOES_NOT_EXIST));
        }

        assert_eq!(store.book(), &before);
        Ok(())
    }

    #[test]
    fn invalid_name_abandons_the_operation() {
        let mut store = ContactStore::default();

        let (result, output) = run(&mut store, "A1\nB2\nC3\n", |s, c| s.add(c));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(output.contains("Exiting to main menu"));
        assert!(store.book().is_empty());
    }

    #[test]
    fn invalid_phone_leaves_existing_entry() {
        let mut store = ContactStore::new([Contact::new("Alice", "12345")].into_iter().collect());

        let (result, _) = run(&mut store, "Alice\nx\ny\nz\n", |s, c| s.edit(c));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.book().phone("Alice"), Some("12345"));
    }

    #[test]
    fn add_edit_delete_lifecycle() -> Result<(), AppError> {
        let mut store = ContactStore::default();

        run(&mut store, "Alice\n12345\n", |s, c| s.add(c)).0?;
        let (_, output) = run(&mut store, "Alice\n", |s, c| s.find(c));
        assert!(output.contains("Alice: 12345"));

        let (result, output) = run(&mut store, "Alice\n999\n", |s, c| s.edit(c));
        result?;
        assert!(output.contains("User Alice was updated."));
        let (_, output) = run(&mut store, "Alice\n", |s, c| s.find(c));
        assert!(output.contains("Alice: 999"));

        let (result, output) = run(&mut store, "Alice\n", |s, c| s.delete(c));
        result?;
        assert!(output.contains("User Alice was deleted."));
        let (_, output) = run(&mut store, "Alice\n", |s, c| s.find(c));
        assert!(output.contains(DOES_NOT_EXIST));
        Ok(())
    }
}
