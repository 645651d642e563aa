use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

/// Removes **every** contact whose name matches exactly (ignoring case), the
/// way the partition-and-erase removal behaves. A name shared by several
/// records is cleared in one call.
pub fn run<S: SnapshotStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut book = Phonebook::from_contacts(store.load()?);

    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::warning(
            "Phone book is already empty. No contacts to delete.",
        ));
        return Ok(result);
    }

    let removed = book.remove_by_name(name);
    if removed == 0 {
        result.add_message(CmdMessage::warning("No contact found with the given name."));
        return Ok(result);
    }

    store.save(book.contacts())?;
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' has been deleted.",
        name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, ContactDraft};
    use crate::store::memory::InMemoryStore;

    fn seeded(names: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for name in names {
            add::run(
                &mut store,
                ContactDraft {
                    name: (*name).into(),
                    phone: "1234567890".into(),
                    email: "NA".into(),
                    group: "Other".into(),
                },
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn deletes_by_exact_name_ignoring_case() {
        let mut store = seeded(&["Bob"]);
        run(&mut store, "BOB").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn deletes_all_case_variant_matches() {
        let mut store = seeded(&["Amy", "Bob", "amy"]);
        run(&mut store, "Amy").unwrap();
        let contacts = store.load().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Bob");
    }

    #[test]
    fn substring_does_not_match() {
        let mut store = seeded(&["Bobby"]);
        let result = run(&mut store, "Bob").unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn absent_name_leaves_the_store_unchanged() {
        let mut store = seeded(&["Amy"]);
        let result = run(&mut store, "Zoe").unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn empty_book_is_reported() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Amy").unwrap();
        assert_eq!(result.messages.len(), 1);
    }
}
