//! The per-run group registry.
//!
//! Groups are a small growable enumeration: a handful of seeded defaults plus
//! whatever the user adds during the run. The registry is deliberately **not
//! persisted**; it is rebuilt from the configured defaults on every start,
//! and user-added names live only for the process lifetime. A contact's
//! `group` field always equals an entry that was in the registry at the
//! moment it was set.

use crate::error::{Result, RoloError};
use crate::model::{clamp, GROUP_MAX};

pub const DEFAULT_GROUPS: [&str; 4] = ["Family", "Friend", "Work", "Other"];

/// Label of the synthetic trailing choice.
pub const ADD_YOUR_OWN: &str = "Add your own group";

#[derive(Debug, Clone)]
pub struct GroupRegistry {
    groups: Vec<String>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect())
    }

    /// Seeds the registry; custom names appended later are not kept across runs.
    pub fn with_defaults(groups: Vec<String>) -> Self {
        Self { groups }
    }

    pub fn names(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 1-based `(index, name)` pairs, plus the synthetic "add your own"
    /// choice at `len + 1`.
    pub fn choices(&self) -> Vec<(usize, String)> {
        let mut out: Vec<(usize, String)> = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, g)| (i + 1, g.clone()))
            .collect();
        out.push((self.groups.len() + 1, ADD_YOUR_OWN.to_string()));
        out
    }

    /// Resolves a 1-based choice to a group name.
    ///
    /// `1..=len` returns the entry at that position. `len + 1` appends
    /// `custom` (which is required there) and returns it; duplicates by
    /// spelling are not prevented. Anything else is a rejected request, so
    /// callers can re-prompt.
    pub fn resolve(&mut self, choice: usize, custom: Option<&str>) -> Result<String> {
        if (1..=self.groups.len()).contains(&choice) {
            return Ok(self.groups[choice - 1].clone());
        }
        if choice == self.groups.len() + 1 {
            let name = custom
                .ok_or_else(|| RoloError::Api("A group name is required for the custom choice".into()))?;
            let name = clamp(name.to_string(), GROUP_MAX);
            self.groups.push(name.clone());
            return Ok(name);
        }
        Err(RoloError::InvalidChoice(choice))
    }

    /// Label-based resolution for non-interactive callers: an exact match of
    /// an existing entry resolves to it, anything else takes the
    /// "add your own" path.
    pub fn resolve_label(&mut self, label: &str) -> Result<String> {
        match self.groups.iter().position(|g| g == label) {
            Some(pos) => self.resolve(pos + 1, None),
            None => self.resolve(self.groups.len() + 1, Some(label)),
        }
    }
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}
