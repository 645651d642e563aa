use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SearchField;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &S, field: SearchField, term: &str) -> Result<CmdResult> {
    let book = Phonebook::from_contacts(store.load()?);

    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::info("Phone book is empty. No contacts to search."));
        return Ok(result);
    }

    let matches: Vec<_> = book.search(field, term).into_iter().cloned().collect();
    if matches.is_empty() {
        let text = match field {
            SearchField::Name => "No contacts found with the given name.",
            SearchField::Phone => "No contacts found with the given partial phone number.",
            SearchField::Group => "No contacts found in the given group.",
        };
        result.add_message(CmdMessage::info(text));
    }
    Ok(result.with_listed(matches))
}
