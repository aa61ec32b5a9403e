use super::{ContactStore, StoreReport};
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    exists: bool,
    trailing: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the backing "file" exists; false until the first write and after `remove`.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Make every write fail with an IO error, for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Pretend the store ends with `bytes` of a partial record.
    pub fn set_trailing(&mut self, bytes: usize) {
        self.trailing = bytes;
        self.exists = true;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(ContactsError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write error",
            )));
        }
        Ok(())
    }
}

impl ContactStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn append(&mut self, contact: &Contact) -> Result<()> {
        self.check_writable()?;
        if self.trailing > 0 {
            return Err(ContactsError::PartialRecord {
                trailing: self.trailing,
            });
        }
        self.contacts.push(contact.clone());
        self.exists = true;
        Ok(())
    }

    fn replace_all(&mut self, contacts: &[Contact]) -> Result<()> {
        self.check_writable()?;
        self.contacts = contacts.to_vec();
        self.trailing = 0;
        self.exists = true;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.check_writable()?;
        self.contacts.clear();
        self.trailing = 0;
        self.exists = false;
        Ok(())
    }

    fn inspect(&self) -> Result<StoreReport> {
        if !self.exists {
            return Ok(StoreReport::default());
        }
        let records = self.contacts.len();
        Ok(StoreReport {
            exists: true,
            bytes: (records * super::codec::RECORD_SIZE + self.trailing) as u64,
            records,
            trailing: self.trailing,
        })
    }

    fn truncate_partial(&mut self) -> Result<usize> {
        self.check_writable()?;
        Ok(std::mem::take(&mut self.trailing))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` contacts with ids 1..=count.
        pub fn with_contacts(mut self, count: u32) -> Self {
            for i in 1..=count {
                let draft = ContactDraft::new(
                    format!("Contact {}", i),
                    format!("555-{:04}", i),
                    format!("contact{}@example.com", i),
                    format!("{} Main St", i),
                );
                self.store.append(&Contact::new(i, draft)).unwrap();
            }
            self
        }

        /// Adds a contact with an explicit id, for building gaps.
        pub fn with_contact(mut self, id: u32, name: &str, phone: &str) -> Self {
            let contact = Contact::new(id, ContactDraft::new(name, phone, "", ""));
            self.store.append(&contact).unwrap();
            self
        }
    }
}
