use crate::model::Contact;

// (id, name, last name, email)
const SEED: [(i64, &str, &str, &str); 4] = [
    (1, "John", "Lennon", "john.lennon@thebeatles.com"),
    (2, "Paul", "McCartney", "paul.mccartney@thebeatles.com"),
    (3, "George", "Harrison", "george.harrison@thebeatles.com"),
    (4, "Ringo", "Starr", "ringo.starr@thebeatles.com"),
];

/// The built-in starting data set. The server passes this explicitly to
/// the store at startup; nothing else depends on it.
pub fn seed_contacts() -> Vec<Contact> {
    SEED.iter()
        .map(|&(id, name, last_name, email)| Contact {
            id,
            name: name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        })
        .collect()
}
