use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::store::codec::RECORD_SIZE;
use crate::store::ContactStore;
use std::collections::BTreeMap;

/// Checks the store for a partial trailing record, duplicate ids and zero ids.
///
/// With `fix`, the partial record is truncated away. Id problems are only
/// reported: renumbering would change ids users already refer to.
pub fn run<S: ContactStore>(store: &mut S, fix: bool) -> Result<CmdResult> {
    let report = store.inspect()?;
    let mut result = CmdResult::default();

    if !report.exists {
        result.add_message(CmdMessage::info("No store file yet. Nothing to check."));
        return Ok(result.with_report(report));
    }

    let mut problems = 0;

    if report.trailing > 0 {
        problems += 1;
        if fix {
            let removed = store.truncate_partial()?;
            result.add_message(CmdMessage::success(format!(
                "Truncated partial record ({} bytes) from the end of the store.",
                removed
            )));
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Store ends with a partial record: {} bytes after {} whole record(s) of {} bytes. Run with --fix to truncate it.",
                report.trailing, report.records, RECORD_SIZE
            )));
        }
    }

    let contacts = match store.load_all() {
        Ok(contacts) => contacts,
        Err(ContactsError::PartialRecord { .. }) => {
            result.add_message(CmdMessage::info(
                "Strict mode refuses to load the store; id checks skipped.",
            ));
            return Ok(result.with_report(report));
        }
        Err(e) => return Err(e),
    };

    let mut seen: BTreeMap<u32, usize> = BTreeMap::new();
    for contact in &contacts {
        *seen.entry(contact.id).or_default() += 1;
    }
    let duplicates: Vec<String> = seen
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(id, count)| format!("{} (x{})", id, count))
        .collect();
    if !duplicates.is_empty() {
        problems += 1;
        result.add_message(CmdMessage::warning(format!(
            "Duplicate ids: {}. Only the first record with each id can be edited or deleted.",
            duplicates.join(", ")
        )));
    }

    if seen.contains_key(&0) {
        problems += 1;
        result.add_message(CmdMessage::warning(
            "Found record(s) with id 0, which is never assigned.",
        ));
    }

    if problems == 0 {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found ({} record(s)).",
            contacts.len()
        )));
    }

    let report = store.inspect()?;
    Ok(result.with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_has_nothing_to_check() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, false).unwrap();
        assert!(result.messages[0].content.contains("Nothing to check"));
    }

    #[test]
    fn healthy_store() {
        let mut fixture = StoreFixture::new().with_contacts(3);
        let result = run(&mut fixture.store, false).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("No inconsistencies"));
        assert_eq!(result.report.unwrap().records, 3);
    }

    #[test]
    fn reports_partial_record_without_fixing() {
        let mut fixture = StoreFixture::new().with_contacts(1);
        fixture.store.set_trailing(12);

        let result = run(&mut fixture.store, false).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("12 bytes"));
        assert_eq!(result.report.unwrap().trailing, 12);
    }

    #[test]
    fn fixes_partial_record() {
        let mut fixture = StoreFixture::new().with_contacts(1);
        fixture.store.set_trailing(12);

        let result = run(&mut fixture.store, true).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.report.unwrap().trailing, 0);
    }

    #[test]
    fn reports_duplicate_and_zero_ids() {
        let mut fixture = StoreFixture::new()
            .with_contact(0, "Zero", "0")
            .with_contact(4, "A", "1")
            .with_contact(4, "B", "2");

        let result = run(&mut fixture.store, true).unwrap();
        let text: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert!(text.iter().any(|m| m.contains("Duplicate ids: 4 (x2)")));
        assert!(text.iter().any(|m| m.contains("id 0")));
        assert_eq!(fixture.store.load_all().unwrap().len(), 3);
    }
}
