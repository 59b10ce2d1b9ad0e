//! Property-style tests for the field validators and the address book.

use chrono::{Duration, Local, NaiveDate};
use contact_assistant::{AddressBook, Birthday, PhoneNumber, Record};

#[test]
fn test_every_ten_digit_string_is_a_phone() {
    let samples = [
        "0000000000",
        "1234567890",
        "9999999999",
        "0501234567",
        "1010101010",
    ];
    for sample in samples {
        let phone = PhoneNumber::new(sample).unwrap();
        assert_eq!(phone.as_str(), sample);
    }

    // every digit in every position
    for digit in '0'..='9' {
        for position in 0..10 {
            let mut text: Vec<char> = "5555555555".chars().collect();
            text[position] = digit;
            let text: String = text.into_iter().collect();
            assert!(PhoneNumber::new(text.as_str()).is_ok(), "{}", text);
        }
    }
}

#[test]
fn test_non_ten_digit_strings_are_rejected() {
    for len in (0..10).chain(11..15) {
        let text = "7".repeat(len);
        assert!(PhoneNumber::new(text.as_str()).is_err(), "length {}", len);
    }

    for bad in ['a', ' ', '-', '+', '.', '(', 'x', '\u{0663}'] {
        for position in 0..10 {
            let mut text: Vec<char> = "1234567890".chars().collect();
            text[position] = bad;
            let text: String = text.into_iter().collect();
            assert!(PhoneNumber::new(text.as_str()).is_err(), "{:?}", text);
        }
    }
}

#[test]
fn test_past_dates_round_trip() {
    let today = Local::now().date_naive();
    let mut date = today;
    // walk back through a few years, stepping by an odd number of days
    for _ in 0..200 {
        date -= Duration::days(37);
        let text = date.format("%d.%m.%Y").to_string();
        let birthday = Birthday::parse(&text).unwrap();
        assert_eq!(birthday.to_string(), text);
        assert_eq!(birthday.date(), date);
    }
}

#[test]
fn test_future_dates_are_rejected() {
    let today = Local::now().date_naive();
    for days in [1, 2, 30, 365, 3650] {
        let date = today + Duration::days(days);
        let text = date.format("%d.%m.%Y").to_string();
        assert!(Birthday::parse(&text).is_err(), "{}", text);
    }
}

#[test]
fn test_add_find_delete() {
    let mut book = AddressBook::new();
    for name in ["Alice", "Bob", "Carol"] {
        book.add_record(Record::new(name, None).unwrap());
        assert_eq!(book.find(name).unwrap().name().as_str(), name);
    }

    book.delete("Bob");
    assert!(book.find("Bob").is_none());
    assert!(book.find("Alice").is_some());
    assert!(book.find("Carol").is_some());
}

#[test]
fn test_edit_phone_changes_first_duplicate_only() {
    let mut record = Record::new("Alice", None).unwrap();
    record.add_phone("1111111111").unwrap();
    record.add_phone("1111111111").unwrap();

    record.edit_phone("1111111111", "2222222222").unwrap();

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["2222222222", "1111111111"]);
}

#[test]
fn test_remove_phone_twice_equals_once() {
    let mut record = Record::new("Alice", None).unwrap();
    record.add_phone("1111111111").unwrap();
    record.add_phone("2222222222").unwrap();

    record.remove_phone("1111111111");
    let after_once = record.clone();
    record.remove_phone("1111111111");

    assert_eq!(record, after_once);
}

#[test]
fn test_upcoming_uses_given_today() {
    let reference = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut book = AddressBook::new();
    let mut record = Record::new("Alice", None).unwrap();
    record.set_birthday(Birthday::parse_as_of("05.05.1970", reference).unwrap());
    book.add_record(record);

    let today = NaiveDate::from_ymd_opt(2031, 5, 1).unwrap();
    let upcoming = book.get_upcoming_birthdays(today, 7);

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Alice");
    assert_eq!(upcoming[0].date, NaiveDate::from_ymd_opt(2031, 5, 5).unwrap());
}
