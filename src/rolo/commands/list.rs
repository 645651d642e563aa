use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &S) -> Result<CmdResult> {
    let book = Phonebook::from_contacts(store.load()?);

    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::info("Phone book is empty."));
        return Ok(result);
    }
    Ok(result.with_listed(book.into_contacts()))
}
