use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn edit_and_delete_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let contacts_path = dir.path().join("contacts.json");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_PATH", &contacts_path)
        .write_stdin("A\nAlice\n12345\nE\nAlice\n999\nF\nAlice\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User Alice was updated."))
        .stdout(predicate::str::contains("Alice: 999"));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_PATH", &contacts_path)
        .write_stdin("D\nAlice\nF\nAlice\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User Alice was deleted."))
        .stdout(predicate::str::contains("Contact doesn't exist"));

    // Deletion was persisted
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_PATH", &contacts_path)
        .write_stdin("F\nAlice\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact doesn't exist"))
        .stdout(predicate::str::contains("Alice:").not());

    Ok(())
}

#[test]
fn missing_contacts_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_PATH", dir.path().join("contacts.json"))
        .write_stdin("E\nNobody\nD\nNobody\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact doesn't exist").count(2));

    Ok(())
}
