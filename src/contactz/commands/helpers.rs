use crate::error::{ContactsError, Result};
use crate::model::Contact;
use crate::store::ContactStore;

/// `1 + max(id)` over the whole store, or 1 when it is empty.
///
/// Ids freed by deletes are not reused unless they happen to sit above the
/// current maximum.
pub fn next_id<S: ContactStore>(store: &S) -> Result<u32> {
    let contacts = store.load_all()?;
    next_id_in(&contacts)
}

pub fn next_id_in(contacts: &[Contact]) -> Result<u32> {
    match contacts.iter().map(|c| c.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(ContactsError::IdsExhausted(max)),
    }
}

/// Position of the first contact with `id`.
pub fn position_of(contacts: &[Contact], id: u32) -> Result<usize> {
    contacts
        .iter()
        .position(|c| c.id == id)
        .ok_or(ContactsError::NotFound(id))
}

pub fn find_by_id<S: ContactStore>(store: &S, id: u32) -> Result<Contact> {
    let mut contacts = store.load_all()?;
    let idx = position_of(&contacts, id)?;
    Ok(contacts.swap_remove(idx))
}
