use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactUpdate, Field};
use crate::store::ContactStore;
use tracing::info;

use super::helpers::position_of;

/// Applies every non-blank value in `update` to the contact with `id` and
/// rewrites the store. Blank values keep the current field.
pub fn run<S: ContactStore>(store: &mut S, id: u32, update: &ContactUpdate) -> Result<CmdResult> {
    let mut contacts = store.load_all()?;
    let idx = position_of(&contacts, id)?;

    let contact = &mut contacts[idx];
    let mut changed = Vec::new();
    for field in Field::ALL {
        let value = update.value(field);
        if !value.trim().is_empty() {
            contact.set_field(field, value);
            changed.push(field.label());
        }
    }
    let updated = contact.clone();

    store.replace_all(&contacts)?;
    info!(id, fields = ?changed, "contact updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contact updated."));
    result.affected_contacts.push(updated);
    Ok(result)
}
