use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.load_all()?;
    Ok(CmdResult::default().with_listed_contacts(contacts))
}
