use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult, ContactDraft};
use crate::error::{Result, RoloError};
use crate::model::Contact;
use crate::store::SnapshotStore;
use crate::validate::{is_valid_phone, normalize_email};

pub fn run<S: SnapshotStore>(store: &mut S, draft: ContactDraft) -> Result<CmdResult> {
    if !is_valid_phone(&draft.phone) {
        return Err(RoloError::Validation(
            "Phone number should be exactly 10 digits and contain only digits.".into(),
        ));
    }

    let (email, valid) = normalize_email(&draft.email);
    if !valid {
        return Err(RoloError::Validation(
            "Email should contain @gmail.com, @yahoo.com, or @email.com, or be 'NA'.".into(),
        ));
    }

    let contact = Contact::new(draft.name, draft.phone, email, draft.group);

    let mut book = Phonebook::from_contacts(store.load()?);
    book.add(contact.clone());
    store.save(book.contacts())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact '{}' added.",
        contact.name
    )));
    result.affected.push(contact);
    Ok(result)
}
