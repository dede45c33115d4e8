//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The contact
//! list is a client-side cache of server state: it only changes in
//! response to successful API calls.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Contact;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached contacts for the signed-in user
    pub contacts: Vec<Contact>,
    /// Contact currently loaded in the edit form
    pub editing_id: Option<u32>,
    /// List fetch in flight
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole cache after a list fetch
pub fn store_set_contacts(store: &AppStore, contacts: Vec<Contact>) {
    *store.contacts().write() = contacts;
}

/// Select (or clear) the contact loaded in the edit form
pub fn store_set_editing(store: &AppStore, editing_id: Option<u32>) {
    *store.editing_id().write() = editing_id;
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    *store.loading().write() = loading;
}

/// Append a just-created contact (insertion order preserved)
pub fn store_add_contact(store: &AppStore, contact: Contact) {
    store.contacts().write().push(contact);
}

/// Swap one record in place by id after an edit
pub fn store_replace_contact(store: &AppStore, updated: Contact) {
    replace_contact(&mut store.contacts().write(), updated);
}

/// Drop one record by id after a confirmed delete
pub fn store_remove_contact(store: &AppStore, contact_id: u32) {
    remove_contact(&mut store.contacts().write(), contact_id);
}

pub fn replace_contact(contacts: &mut Vec<Contact>, updated: Contact) {
    if let Some(contact) = contacts.iter_mut().find(|c| c.id == updated.id) {
        *contact = updated;
    }
}

pub fn remove_contact(contacts: &mut Vec<Contact>, contact_id: u32) {
    contacts.retain(|c| c.id != contact_id);
}

/// Derived, read-only view of contacts whose name, phone, or email
/// case-insensitively contains the term. Preserves relative order and
/// never mutates the underlying collection.
pub fn filter_contacts(contacts: &[Contact], term: &str) -> Vec<Contact> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return contacts.to_vec();
    }
    contacts
        .iter()
        .filter(|c| {
            c.contact_name.to_lowercase().contains(&needle)
                || c.contact_phone.to_lowercase().contains(&needle)
                || c
                    .contact_email
                    .as_deref()
                    .is_some_and(|email| email.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn make_contact(id: u32, name: &str, phone: &str, email: Option<&str>) -> Contact {
        Contact {
            id,
            contact_name: name.to_string(),
            contact_phone: phone.to_string(),
            contact_email: email.map(str::to_string),
            contact_address: None,
            contact_gender: Gender::Other,
            contact_favorite: false,
            user_id: 1,
        }
    }

    #[test]
    fn replace_swaps_exactly_the_matching_id() {
        let mut contacts = vec![
            make_contact(1, "Ana Diaz", "5551234567", None),
            make_contact(2, "Ben Okafor", "5559876543", None),
        ];
        let mut updated = make_contact(2, "Ben O.", "5559876543", None);
        updated.contact_favorite = true;
        replace_contact(&mut contacts, updated);

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].contact_name, "Ana Diaz");
        assert_eq!(contacts[1].contact_name, "Ben O.");
        assert!(contacts[1].contact_favorite);
    }

    #[test]
    fn replace_with_unknown_id_is_a_no_op() {
        let mut contacts = vec![make_contact(1, "Ana Diaz", "5551234567", None)];
        replace_contact(&mut contacts, make_contact(9, "Ghost", "5550000000", None));
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].contact_name, "Ana Diaz");
    }

    #[test]
    fn remove_drops_exactly_the_targeted_id() {
        let mut contacts = vec![
            make_contact(1, "Ana Diaz", "5551234567", None),
            make_contact(2, "Ben Okafor", "5559876543", None),
            make_contact(3, "Chen Wei", "5550001111", None),
        ];
        remove_contact(&mut contacts, 2);
        assert_eq!(
            contacts.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn filter_matches_name_phone_and_email_case_insensitively() {
        let contacts = vec![
            make_contact(1, "Ana Diaz", "5551234567", Some("ana@example.com")),
            make_contact(2, "Ben Okafor", "5559876543", Some("ben@example.com")),
            make_contact(3, "Briana Cole", "5550001111", None),
            make_contact(4, "Chen Wei", "555123ANA4", None),
        ];

        let hits = filter_contacts(&contacts, "ana");
        assert_eq!(
            hits.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 3, 4]
        );

        let hits = filter_contacts(&contacts, "BEN@EXAMPLE");
        assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn filter_with_empty_term_is_identity() {
        let contacts = vec![
            make_contact(1, "Ana Diaz", "5551234567", None),
            make_contact(2, "Ben Okafor", "5559876543", None),
        ];
        assert_eq!(filter_contacts(&contacts, ""), contacts);
        assert_eq!(filter_contacts(&contacts, "   "), contacts);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let contacts = vec![
            make_contact(5, "Zana", "1112223334", None),
            make_contact(2, "Anais", "2223334445", None),
            make_contact(9, "Banana", "3334445556", None),
        ];
        let hits = filter_contacts(&contacts, "ana");
        assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![5, 2, 9]);
    }
}
