//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all rolo operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (group labels go through the session registry, so
//!   a stored `group` always equals a registry entry)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over SnapshotStore
//!
//! `PhonebookApi<S: SnapshotStore>` is generic over the storage backend:
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`
//!
//! The facade also owns the session [`GroupRegistry`]; custom groups added
//! through it last until the process exits and no longer.

use crate::commands::{self, CmdResult, ContactDraft, ContactEdit};
use crate::error::Result;
use crate::group::GroupRegistry;
use crate::model::{Field, SearchField};
use crate::store::SnapshotStore;
use std::path::PathBuf;

pub struct PhonebookApi<S: SnapshotStore> {
    store: S,
    groups: GroupRegistry,
}

impl<S: SnapshotStore> PhonebookApi<S> {
    pub fn new(store: S, groups: GroupRegistry) -> Self {
        Self { store, groups }
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search(&self, field: SearchField, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, field, term)
    }

    pub fn add(
        &mut self,
        name: String,
        phone: String,
        email: String,
        group_label: &str,
    ) -> Result<CmdResult> {
        let group = self.groups.resolve_label(group_label)?;
        commands::add::run(
            &mut self.store,
            ContactDraft {
                name,
                phone,
                email,
                group,
            },
        )
    }

    pub fn modify_field(&mut self, name: &str, field: Field, value: String) -> Result<CmdResult> {
        let value = match field {
            Field::Group => self.groups.resolve_label(&value)?,
            _ => value,
        };
        commands::modify::run(&mut self.store, name, ContactEdit::Set(field, value))
    }

    pub fn modify_all(
        &mut self,
        name: &str,
        new_name: String,
        phone: String,
        email: String,
        group_label: &str,
    ) -> Result<CmdResult> {
        let group = self.groups.resolve_label(group_label)?;
        commands::modify::run(
            &mut self.store,
            name,
            ContactEdit::Replace(ContactDraft {
                name: new_name,
                phone,
                email,
                group,
            }),
        )
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn purge(&mut self, skip_confirm: bool) -> Result<CmdResult> {
        commands::purge::run(&mut self.store, skip_confirm)
    }

    pub fn sort(&mut self) -> Result<CmdResult> {
        commands::sort::run(&mut self.store)
    }

    pub fn doctor(&mut self) -> Result<CmdResult> {
        commands::doctor::run(&mut self.store)
    }

    /// The group choices a UI should present, including the synthetic
    /// "add your own" entry.
    pub fn group_choices(&self) -> Vec<(usize, String)> {
        self.groups.choices()
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.store.data_path()
    }
}
