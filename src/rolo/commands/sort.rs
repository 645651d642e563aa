use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &mut S) -> Result<CmdResult> {
    let mut book = Phonebook::from_contacts(store.load()?);
    book.sort_by_name();
    store.save(book.contacts())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contacts sorted by name."));
    Ok(result.with_listed(book.into_contacts()))
}
