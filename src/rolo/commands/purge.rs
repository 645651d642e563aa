use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::store::SnapshotStore;
use std::io::{self, Write};

pub fn run<S: SnapshotStore>(store: &mut S, skip_confirm: bool) -> Result<CmdResult> {
    let mut book = Phonebook::from_contacts(store.load()?);

    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::warning(
            "Phone book is already empty. No contacts to delete.",
        ));
        return Ok(result);
    }

    if !skip_confirm {
        println!(
            "This will permanently remove all {} contact(s).",
            book.len()
        );
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(RoloError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(RoloError::Io)?;

        if input.trim() != "Y" {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    book.clear();
    store.save(book.contacts())?;
    result.add_message(CmdMessage::success("All contacts have been deleted."));
    Ok(result)
}
