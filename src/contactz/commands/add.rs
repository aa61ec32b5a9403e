use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, ContactDraft};
use crate::store::ContactStore;
use tracing::info;

use super::helpers::next_id;

pub fn run<S: ContactStore>(store: &mut S, draft: ContactDraft) -> Result<CmdResult> {
    let id = next_id(store)?;
    let contact = Contact::new(id, draft);
    store.append(&contact)?;
    info!(id, "contact added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added with ID {}.",
        id
    )));
    result.affected_contacts.push(contact);
    Ok(result)
}
