use crate::model::{Contact, Field};

pub mod add;
pub mod delete;
pub mod doctor;
pub mod list;
pub mod modify;
pub mod purge;
pub mod search;
pub mod sort;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Contact>,
    pub listed: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, contacts: Vec<Contact>) -> Self {
        self.affected = contacts;
        self
    }

    pub fn with_listed(mut self, contacts: Vec<Contact>) -> Self {
        self.listed = contacts;
        self
    }
}

/// A record as collected from the user, prior to validation. The group is
/// already a registry entry; the API facade resolves labels before commands
/// run.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub group: String,
}

/// One modification request: replace the whole record, or set a single
/// field. Either way the edited fields re-pass validation before anything is
/// stored.
#[derive(Debug, Clone)]
pub enum ContactEdit {
    Replace(ContactDraft),
    Set(Field, String),
}
