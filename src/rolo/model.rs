//! Core data types: the contact record and its field bounds.
//!
//! The data file stores each contact as one fixed-size block, so every field
//! has a hard byte bound. Truncation to that bound happens **here**, at
//! construction, never as a hidden side effect of the storage layer: a
//! `Contact` built through [`Contact::new`] is always within bounds, and the
//! round-trip through the store preserves it exactly.

/// On-disk field widths in bytes. One byte per field is reserved for the
/// NUL terminator, so the longest stored value is `WIDTH - 1` bytes.
pub const NAME_WIDTH: usize = 50;
pub const PHONE_WIDTH: usize = 15;
pub const EMAIL_WIDTH: usize = 50;
pub const GROUP_WIDTH: usize = 20;

pub const NAME_MAX: usize = NAME_WIDTH - 1;
pub const PHONE_MAX: usize = PHONE_WIDTH - 1;
pub const EMAIL_MAX: usize = EMAIL_WIDTH - 1;
pub const GROUP_MAX: usize = GROUP_WIDTH - 1;

/// One contact record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub group: String,
}

impl Contact {
    /// Builds a record, clamping every field to its stored bound.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: clamp(name.into(), NAME_MAX),
            phone: clamp(phone.into(), PHONE_MAX),
            email: clamp(email.into(), EMAIL_MAX),
            group: clamp(group.into(), GROUP_MAX),
        }
    }
}

/// Truncates to at most `max` bytes without splitting a character.
pub fn clamp(mut s: String, max: usize) -> String {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
    s
}

/// A single editable field of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Group,
}

/// The fields a search can run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Group,
}
