use super::{DoctorReport, SnapshotStore};
use crate::error::Result;
use crate::model::Contact;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        Ok(())
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        Ok(DoctorReport {
            whole_records: self.contacts.len(),
            trailing_bytes_dropped: 0,
        })
    }

    fn data_path(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

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

        pub fn with_contacts(mut self, count: usize) -> Self {
            let mut contacts = self.store.load().unwrap();
            for i in 0..count {
                contacts.push(Contact::new(
                    format!("Contact {}", i + 1),
                    format!("{:010}", i + 1),
                    "NA",
                    "Other",
                ));
            }
            self.store.save(&contacts).unwrap();
            self
        }
    }
}
