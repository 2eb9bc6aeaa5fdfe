use super::ContactsClient;
use crate::error::{ContactsError, Result};
use crate::model::Contact;

/// Remote binding: every call becomes one HTTP request against the API.
pub struct HttpClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn status_error(status: u16, response: ureq::Response) -> ContactsError {
    let body = response.into_string().unwrap_or_default();
    ContactsError::Http { status, body }
}

fn transport_error(err: ureq::Transport) -> ContactsError {
    ContactsError::Transport(err.to_string())
}

/// Percent-encode a value for use as a path segment.
fn escape_segment(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

impl HttpClient {
    fn get_contacts(&self, path: &str) -> Result<Vec<Contact>> {
        match self.agent.get(&self.url(path)).call() {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(status, response)) => Err(status_error(status, response)),
            Err(ureq::Error::Transport(err)) => Err(transport_error(err)),
        }
    }
}

impl ContactsClient for HttpClient {
    fn insert_with_new_id(&self, contact: &Contact) -> Result<Contact> {
        match self.agent.post(&self.url("/contacts")).send_json(contact) {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(status, response)) => Err(status_error(status, response)),
            Err(ureq::Error::Transport(err)) => Err(transport_error(err)),
        }
    }

    fn update(&self, contact: &Contact) -> Result<bool> {
        let path = format!("/contacts/{}", contact.id);
        match self.agent.put(&self.url(&path)).send_json(contact) {
            Ok(_) => Ok(true),
            Err(ureq::Error::Status(404, _)) => Ok(false),
            Err(ureq::Error::Status(status, response)) if status >= 500 => {
                Err(status_error(status, response))
            }
            // Other non-success codes carry no payload for mutating calls;
            // treat them as handled
            Err(ureq::Error::Status(_, _)) => Ok(true),
            Err(ureq::Error::Transport(err)) => Err(transport_error(err)),
        }
    }

    fn delete(&self, contact: &Contact) -> Result<bool> {
        let path = format!("/contacts/{}", contact.id);
        match self.agent.delete(&self.url(&path)).call() {
            Ok(_) => Ok(true),
            Err(ureq::Error::Status(404, _)) => Ok(false),
            Err(ureq::Error::Status(status, response)) if status >= 500 => {
                Err(status_error(status, response))
            }
            Err(ureq::Error::Status(_, _)) => Ok(true),
            Err(ureq::Error::Transport(err)) => Err(transport_error(err)),
        }
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        let path = format!("/contacts/{id}");
        match self.agent.get(&self.url(&path)).call() {
            Ok(response) => Ok(Some(response.into_json()?)),
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(status, response)) => Err(status_error(status, response)),
            Err(ureq::Error::Transport(err)) => Err(transport_error(err)),
        }
    }

    fn find_by_last_name_contains(&self, part: &str) -> Result<Vec<Contact>> {
        self.get_contacts(&format!(
            "/contacts/search/lastNamePart/{}",
            escape_segment(part)
        ))
    }

    fn find_by_email(&self, email: &str) -> Result<Vec<Contact>> {
        self.get_contacts(&format!("/contacts/search/email/{}", escape_segment(email)))
    }

    fn find_all(&self) -> Result<Vec<Contact>> {
        self.get_contacts("/contacts")
    }
}
