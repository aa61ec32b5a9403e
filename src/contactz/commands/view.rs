use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

use super::helpers::find_by_id;

pub fn run<S: ContactStore>(store: &S, id: u32) -> Result<CmdResult> {
    let contact = find_by_id(store, id)?;
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}
