//! Command handling for the client binary.
//!
//! Each subcommand maps to exactly one [`ContactsClient`] call and yields
//! one human-readable line (or one line per found contact). Handlers are
//! written against the facade trait and return strings instead of
//! printing, so they run against the direct binding in tests.

use crate::client::ContactsClient;
use crate::error::Result;
use crate::model::Contact;

pub mod args;

use args::Commands;

pub fn run(client: &dyn ContactsClient, command: Commands) -> Result<String> {
    match command {
        Commands::Add {
            name,
            last_name,
            email,
        } => {
            let created = client.insert_with_new_id(&Contact::new(name, last_name, email))?;
            Ok(format!("Created contact {}", created.id))
        }

        Commands::Delete { id } => {
            let target = Contact {
                id,
                ..Contact::default()
            };
            if client.delete(&target)? {
                Ok(format!("Deleted contact {id}"))
            } else {
                Ok(format!("No contact with id {id}"))
            }
        }

        Commands::Update {
            id,
            name,
            last_name,
            email,
        } => {
            let mut contact = Contact::new(name, last_name, email);
            contact.id = id;
            if client.update(&contact)? {
                Ok(format!("Updated contact {id}"))
            } else {
                Ok(format!("No contact with id {id}"))
            }
        }

        Commands::List => Ok(render_contacts(&client.find_all()?)),

        Commands::FindByEmail { email } => Ok(render_contacts(&client.find_by_email(&email)?)),

        Commands::FindByLastNamePart { part } => {
            Ok(render_contacts(&client.find_by_last_name_contains(&part)?))
        }
    }
}

fn render_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No matching contacts".to_string();
    }

    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by_key(|c| c.id);
    sorted
        .iter()
        .map(|c| format!("{:>4}  {} {} <{}>", c.id, c.name, c.last_name, c.email))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::direct::DirectClient;
    use crate::error::ContactsError;
    use crate::fixtures;
    use crate::store::memory::MemoryDatabase;

    fn seeded_client() -> DirectClient<MemoryDatabase> {
        let mut db = MemoryDatabase::new();
        db.seed(fixtures::seed_contacts());
        DirectClient::new(db)
    }

    #[test]
    fn add_reports_the_assigned_id() {
        let client = seeded_client();
        let output = run(
            &client,
            Commands::Add {
                name: "Billy".into(),
                last_name: "Preston".into(),
                email: "billy.preston@thebeatles.com".into(),
            },
        )
        .unwrap();

        assert_eq!(output, "Created contact 5");
    }

    #[test]
    fn add_with_empty_field_fails_without_side_effects() {
        let client = seeded_client();
        let err = run(
            &client,
            Commands::Add {
                name: String::new(),
                last_name: "Preston".into(),
                email: "billy.preston@thebeatles.com".into(),
            },
        )
        .unwrap_err();

        assert!(matches!(err, ContactsError::Validation(_)));
        assert_eq!(client.find_all().unwrap().len(), 4);
    }

    #[test]
    fn delete_distinguishes_hit_from_miss() {
        let client = seeded_client();

        let hit = run(&client, Commands::Delete { id: 4 }).unwrap();
        assert_eq!(hit, "Deleted contact 4");

        let miss = run(&client, Commands::Delete { id: 4 }).unwrap();
        assert_eq!(miss, "No contact with id 4");
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let client = seeded_client();
        let output = run(
            &client,
            Commands::Update {
                id: 2,
                name: "Paul".into(),
                last_name: "McCartney".into(),
                email: "macca@thebeatles.com".into(),
            },
        )
        .unwrap();

        assert_eq!(output, "Updated contact 2");
        let updated = client.find_by_id(2).unwrap().unwrap();
        assert_eq!(updated.email, "macca@thebeatles.com");
    }

    #[test]
    fn find_by_last_name_part_lists_matches_in_id_order() {
        let client = seeded_client();
        let output = run(
            &client,
            Commands::FindByLastNamePart { part: "arr".into() },
        )
        .unwrap();

        // Harrison (3) before Starr (4)
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Harrison"));
        assert!(lines[1].contains("Starr"));
    }

    #[test]
    fn searches_with_no_match_print_a_friendly_line() {
        let client = seeded_client();
        let output = run(
            &client,
            Commands::FindByEmail {
                email: "nobody@thebeatles.com".into(),
            },
        )
        .unwrap();

        assert_eq!(output, "No matching contacts");
    }
}
