//! Command handlers.
//!
//! Each handler checks its argument count, performs one operation on the
//! address book and returns the reply text. Failures are returned as
//! `CommandError` and turned into `Error: ...` lines by the dispatcher.

use super::command::Command;
use crate::domain::{Birthday, ContactName};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

pub fn hello(args: &[&str]) -> CommandResult<String> {
    Command::Hello.expect_args::<0>(args)?;
    Ok("How can I help you?".to_string())
}

/// Add a phone to a contact, creating the contact if needed.
///
/// The phone is validated before a new contact is inserted, so a rejected
/// number never leaves an empty contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = Command::Add.expect_args(args)?;

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::with_name(ContactName::new(name)?);
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }

    Ok(format!(
        "Contact {} added with the phone number {}.",
        name, phone
    ))
}

/// Replace a phone on an existing contact.
///
/// An old number the contact does not have is ignored.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = Command::Change.expect_args(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    if !record.edit_phone(old_phone, new_phone)? {
        tracing::warn!(name, old_phone, "Phone to change not found, contact left unchanged");
    }

    Ok("Contact updated.".to_string())
}

pub fn get_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = Command::Phone.expect_args(args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    Ok(format!("{}'s phone numbers: {}", name, record.phones_display()))
}

pub fn get_all_contacts(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    Command::All.expect_args::<0>(args)?;

    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn add_birthday(
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
) -> CommandResult<String> {
    let [name, date] = Command::AddBirthday.expect_args(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    record.set_birthday(Birthday::parse_as_of(date, today)?);

    Ok(format!("{}'s birthday added as {}.", name, date))
}

/// Show a contact's birthday. A missing contact and a missing birthday get
/// the same reply.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = Command::ShowBirthday.expect_args(args)?;

    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
        None => Ok(format!(
            "Contact {} does not have a birthday recorded.",
            name
        )),
    }
}

pub fn birthdays(
    args: &[&str],
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CommandResult<String> {
    Command::Birthdays.expect_args::<0>(args)?;

    let upcoming = book.get_upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok(match window_days {
            0 => "No birthdays today.".to_string(),
            1 => "No birthdays today or tomorrow.".to_string(),
            7 => "No birthdays in the next week.".to_string(),
            n => format!("No birthdays in the next {} days.", n),
        });
    }

    Ok(upcoming
        .iter()
        .map(|u| {
            format!(
                "{} has a birthday on {}",
                u.name,
                u.date.format(crate::domain::BIRTHDAY_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = Command::RemovePhone.expect_args(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    record.remove_phone(phone);

    Ok(format!("Phone number {} removed from {}.", phone, name))
}

pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = Command::Delete.expect_args(args)?;

    book.delete(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    Ok(format!("Contact {} deleted.", name))
}

pub fn help(args: &[&str]) -> CommandResult<String> {
    Command::Help.expect_args::<0>(args)?;

    let mut lines: Vec<&str> = Command::ALL.iter().map(|c| c.usage()).collect();
    lines.push("close | exit");
    Ok(lines.join("\n"))
}
