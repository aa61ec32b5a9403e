use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use tracing::info;

use super::helpers::position_of;

/// Removes the first contact with `id`, keeping the others in order. When nothing
/// remains the store file is removed rather than rewritten empty.
pub fn run<S: ContactStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut remaining = store.load_all()?;
    let idx = position_of(&remaining, id)?;
    let removed = remaining.remove(idx);

    let mut result = CmdResult::default();
    if remaining.is_empty() {
        store.remove()?;
        result.add_message(CmdMessage::success("Contact deleted. No contacts remain."));
    } else {
        store.replace_all(&remaining)?;
        result.add_message(CmdMessage::success("Contact deleted."));
    }
    info!(id, remaining = remaining.len(), "contact deleted");

    result.affected_contacts.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, helpers, list, search};
    use crate::error::ContactsError;
    use crate::model::ContactDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_only_the_matching_contact() {
        let mut fixture = StoreFixture::new().with_contacts(3);
        let result = run(&mut fixture.store, 2).unwrap();
        assert_eq!(result.affected_contacts[0].id, 2);

        let ids: Vec<_> = list::run(&fixture.store)
            .unwrap()
            .listed_contacts
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn deleting_last_contact_removes_store() {
        let mut fixture = StoreFixture::new().with_contacts(1);
        let result = run(&mut fixture.store, 1).unwrap();

        assert!(!fixture.store.exists());
        assert!(list::run(&fixture.store).unwrap().listed_contacts.is_empty());
        assert!(result.messages[0].content.contains("No contacts remain"));
    }

    #[test]
    fn unknown_id_is_not_found_and_store_untouched() {
        let mut fixture = StoreFixture::new().with_contacts(2);
        assert!(matches!(
            run(&mut fixture.store, 9),
            Err(ContactsError::NotFound(9))
        ));
        assert_eq!(fixture.store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn alice_and_bob_scenario() {
        let mut store = InMemoryStore::new();
        let alice = add::run(&mut store, ContactDraft::new("Alice", "555-1234", "", ""))
            .unwrap()
            .affected_contacts
            .remove(0);
        let bob = add::run(&mut store, ContactDraft::new("bob", "555-9999", "", ""))
            .unwrap()
            .affected_contacts
            .remove(0);
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);

        let found = search::run(&store, "ALI").unwrap().listed_contacts;
        assert_eq!(found, vec![alice]);

        run(&mut store, 1).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![bob]);
        assert_eq!(helpers::next_id(&store).unwrap(), 3);
    }
}
