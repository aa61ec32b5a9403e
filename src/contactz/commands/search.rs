use crate::commands::CmdResult;
use crate::error::{ContactsError, Result};
use crate::store::ContactStore;

/// Case-insensitive substring match on name or phone. Email and address are
/// never searched. Matches come back in stored order.
pub fn run<S: ContactStore>(store: &S, query: &str) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Err(ContactsError::EmptyQuery);
    }

    let needle = query.to_lowercase();
    let matches = store
        .load_all()?
        .into_iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.phone.to_lowercase().contains(&needle)
        })
        .collect();

    Ok(CmdResult::default().with_listed_contacts(matches))
}
