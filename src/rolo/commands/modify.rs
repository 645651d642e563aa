use crate::book::Phonebook;
use crate::commands::{CmdMessage, CmdResult, ContactEdit};
use crate::error::{Result, RoloError};
use crate::model::{Contact, Field};
use crate::store::SnapshotStore;
use crate::validate::{is_valid_phone, normalize_email};

pub fn run<S: SnapshotStore>(store: &mut S, name: &str, edit: ContactEdit) -> Result<CmdResult> {
    let mut book = Phonebook::from_contacts(store.load()?);

    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::warning(
            "Phone book is empty. Cannot modify contact.",
        ));
        return Ok(result);
    }

    let Some((index, current)) = book.find_by_name(name).map(|(i, c)| (i, c.clone())) else {
        result.add_message(CmdMessage::warning("No contact found with the given name."));
        return Ok(result);
    };

    let updated = apply_edit(&current, edit)?;
    book.replace(index, updated.clone());
    store.save(book.contacts())?;

    result.add_message(CmdMessage::success("Contact information has been modified."));
    result.affected.push(updated);
    Ok(result)
}

/// Builds the replacement record. Whole-record mode re-validates phone and
/// email as in add; single-field mode re-validates that field only. The name
/// field has no validation rule.
fn apply_edit(current: &Contact, edit: ContactEdit) -> Result<Contact> {
    match edit {
        ContactEdit::Replace(draft) => {
            let phone = checked_phone(draft.phone)?;
            let email = checked_email(&draft.email)?;
            Ok(Contact::new(draft.name, phone, email, draft.group))
        }
        ContactEdit::Set(Field::Name, value) => Ok(Contact::new(
            value,
            current.phone.clone(),
            current.email.clone(),
            current.group.clone(),
        )),
        ContactEdit::Set(Field::Phone, value) => {
            let phone = checked_phone(value)?;
            Ok(Contact::new(
                current.name.clone(),
                phone,
                current.email.clone(),
                current.group.clone(),
            ))
        }
        ContactEdit::Set(Field::Email, value) => {
            let email = checked_email(&value)?;
            Ok(Contact::new(
                current.name.clone(),
                current.phone.clone(),
                email,
                current.group.clone(),
            ))
        }
        ContactEdit::Set(Field::Group, value) => Ok(Contact::new(
            current.name.clone(),
            current.phone.clone(),
            current.email.clone(),
            value,
        )),
    }
}

fn checked_phone(phone: String) -> Result<String> {
    if !is_valid_phone(&phone) {
        return Err(RoloError::Validation(
            "Phone number should be exactly 10 digits and contain only digits.".into(),
        ));
    }
    Ok(phone)
}

fn checked_email(email: &str) -> Result<String> {
    let (normalized, valid) = normalize_email(email);
    if !valid {
        return Err(RoloError::Validation(
            "Email should contain @gmail.com, @yahoo.com, or @email.com, or be 'NA'.".into(),
        ));
    }
    Ok(normalized)
}
