//! The in-memory ordered collection of contacts.
//!
//! [`Phonebook`] owns the `Vec<Contact>` exclusively. Order is insertion
//! order except immediately after [`Phonebook::sort_by_name`]. Edits replace
//! whole records by index; nothing hands out mutable references into the
//! backing storage.

use crate::model::{Contact, SearchField};
use crate::query::{contains_ignore_case, equals_ignore_case};

#[derive(Debug, Clone, Default)]
pub struct Phonebook {
    contacts: Vec<Contact>,
}

impl Phonebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a record. Names and phone numbers need not be unique.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// First contact whose name equals `name` ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &Contact)> {
        self.contacts
            .iter()
            .enumerate()
            .find(|(_, c)| equals_ignore_case(&c.name, name))
    }

    /// All contacts matching `query` over the given field, in collection
    /// order. Name and group match case-insensitively as substrings; phone
    /// matches as a case-sensitive substring over the digits.
    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| match field {
                SearchField::Name => contains_ignore_case(&c.name, query),
                SearchField::Group => contains_ignore_case(&c.group, query),
                SearchField::Phone => c.phone.contains(query),
            })
            .collect()
    }

    /// Replaces the record at `index` with a new value.
    pub fn replace(&mut self, index: usize, contact: Contact) {
        self.contacts[index] = contact;
    }

    /// Removes every contact whose name equals `name` ignoring ASCII case,
    /// returning how many were removed.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| !equals_ignore_case(&c.name, name));
        before - self.contacts.len()
    }

    /// Empties the collection, returning how many contacts were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.contacts.len();
        self.contacts.clear();
        removed
    }

    /// Stable ascending sort by raw byte-wise name comparison, so uppercase
    /// sorts before lowercase.
    pub fn sort_by_name(&mut self) {
        self.contacts
            .sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::new(name, "1234567890", "NA", "Other")
    }

    fn contact_full(name: &str, phone: &str, group: &str) -> Contact {
        Contact::new(name, phone, "NA", group)
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut book = Phonebook::new();
        book.add(contact("Carol"));
        book.add(contact("Amy"));
        book.add(contact("Bob"));
        let names: Vec<_> = book.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Amy", "Bob"]);
    }

    #[test]
    fn find_by_name_is_whole_string_case_insensitive() {
        let mut book = Phonebook::new();
        book.add(contact("Bobby"));
        book.add(contact("Bob"));
        let (index, found) = book.find_by_name("BOB").unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.name, "Bob");
        assert!(book.find_by_name("bo").is_none());
    }

    #[test]
    fn search_by_name_matches_substrings() {
        let mut book = Phonebook::new();
        book.add(contact("Robert"));
        book.add(contact("Bob"));
        book.add(contact("Amy"));
        let hits = book.search(SearchField::Name, "bo");
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Robert", "Bob"]);
    }

    #[test]
    fn search_by_phone_is_case_sensitive_substring() {
        let mut book = Phonebook::new();
        book.add(contact_full("Amy", "1234567890", "Work"));
        book.add(contact_full("Bob", "9876543210", "Work"));
        let hits = book.search(SearchField::Phone, "6543");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bob");
    }

    #[test]
    fn search_by_group_matches_substrings() {
        let mut book = Phonebook::new();
        book.add(contact_full("Amy", "1234567890", "Work"));
        book.add(contact_full("Bob", "9876543210", "Family"));
        let hits = book.search(SearchField::Group, "fam");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bob");
    }

    #[test]
    fn search_returns_empty_for_no_match() {
        let mut book = Phonebook::new();
        book.add(contact("Amy"));
        assert!(book.search(SearchField::Name, "zz").is_empty());
    }

    #[test]
    fn remove_by_name_removes_all_exact_matches() {
        let mut book = Phonebook::new();
        book.add(contact("Amy"));
        book.add(contact("Bob"));
        book.add(contact("amy"));
        assert_eq!(book.remove_by_name("Amy"), 2);
        assert_eq!(book.len(), 1);
        assert_eq!(book.contacts()[0].name, "Bob");
    }

    #[test]
    fn remove_by_name_reports_zero_for_absent_names() {
        let mut book = Phonebook::new();
        book.add(contact("Amy"));
        assert_eq!(book.remove_by_name("Zoe"), 0);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn sort_is_byte_wise_uppercase_first() {
        let mut book = Phonebook::new();
        book.add(contact("alice"));
        book.add(contact("Bob"));
        book.add(contact("Alice"));
        book.sort_by_name();
        let names: Vec<_> = book.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "alice"]);
    }

    #[test]
    fn sort_is_idempotent_and_stable() {
        let mut book = Phonebook::new();
        book.add(contact_full("Amy", "1111111111", "Work"));
        book.add(contact_full("Amy", "2222222222", "Family"));
        book.add(contact("Bob"));
        book.sort_by_name();
        let once: Vec<_> = book.contacts().to_vec();
        book.sort_by_name();
        assert_eq!(book.contacts(), &once[..]);
        // equal keys keep their relative order
        assert_eq!(book.contacts()[0].phone, "1111111111");
        assert_eq!(book.contacts()[1].phone, "2222222222");
    }

    #[test]
    fn clear_empties_and_counts() {
        let mut book = Phonebook::new();
        book.add(contact("Amy"));
        book.add(contact("Bob"));
        assert_eq!(book.clear(), 2);
        assert!(book.is_empty());
    }

    #[test]
    fn replace_swaps_the_record_at_the_index() {
        let mut book = Phonebook::new();
        book.add(contact("Amy"));
        book.add(contact("Bob"));
        book.replace(1, contact("Robert"));
        assert_eq!(book.contacts()[1].name, "Robert");
        assert_eq!(book.len(), 2);
    }
}
