pub mod commission;
pub mod story;

use keymaker_lib::Person;

/// Human-readable description of what a person is holding.
pub fn describe_key(person: &Person) -> String {
    match person.key() {
        Some(key) => format!("{key} key"),
        None => "no key".to_string(),
    }
}
