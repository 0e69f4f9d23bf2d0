//! Greeting text.

use crate::domain::Person;

/// Template applied by [`format_greeting`]; `{name}` is the person's name.
pub const GREETING_TEMPLATE: &str = "Hello, {name}!";

/// Format the greeting for `person`: `"Hello, {name}!"`.
///
/// ```
/// use greeter_core::domain::{format_greeting, Person};
///
/// let world = Person::create("World").unwrap();
/// assert_eq!(format_greeting(&world), "Hello, World!");
/// ```
pub fn format_greeting(person: &Person) -> String {
    format!("Hello, {}!", person.name())
}
