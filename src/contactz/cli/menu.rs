//! The interactive numbered menu.
//!
//! Generic over its input and output so tests can drive it with a `Cursor` and
//! capture what it prints. Store errors are shown and the loop carries on; only
//! a failure to write to the terminal ends it.

use super::print::{capitalize, render_card, render_cards, render_messages};
use contactz::api::ContactsApi;
use contactz::error::{ContactsError, Result};
use contactz::model::{ContactDraft, ContactUpdate, Field};
use contactz::store::ContactStore;
use std::io::{BufRead, Write};

const MENU: &str = "\n=== Contact Management ===\n\
1. Add contact\n\
2. Display all contacts\n\
3. Search contacts\n\
4. Edit contact\n\
5. Delete contact\n\
6. Exit\n\
Choose an option: ";

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, S: ContactStore, R: BufRead, W: Write> {
    api: &'a mut ContactsApi<S>,
    input: R,
    output: W,
}

impl<'a, S: ContactStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut ContactsApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let flow = match line.trim().parse::<i64>() {
                Ok(1) => self.add()?,
                Ok(2) => self.list()?,
                Ok(3) => self.search()?,
                Ok(4) => self.edit()?,
                Ok(5) => self.delete()?,
                Ok(6) => {
                    writeln!(self.output, "Goodbye.")?;
                    Flow::Exit
                }
                Ok(_) => {
                    writeln!(self.output, "Invalid option. Choose 1-6.")?;
                    Flow::Continue
                }
                Err(_) => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let mut values = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            match self.prompt(&format!("{}: ", capitalize(field.label())))? {
                Some(value) => values.push(value),
                None => return Ok(Flow::Exit),
            }
        }
        let [name, phone, email, address]: [String; 4] = match values.try_into() {
            Ok(fields) => fields,
            Err(_) => return Ok(Flow::Continue),
        };

        let draft = ContactDraft::new(name, phone, email, address);
        match self.api.add_contact(draft) {
            Ok(result) => self.show(&render_messages(&result.messages))?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        match self.api.list_contacts() {
            Ok(result) => self.show(&render_cards(&result.listed_contacts))?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter name or phone to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.api.search_contacts(&query) {
            Ok(result) if result.listed_contacts.is_empty() => {
                writeln!(self.output, "No matching contacts found.")?;
            }
            Ok(result) => {
                let cards: String = result.listed_contacts.iter().map(render_card).collect();
                self.show(&cards)?;
            }
            Err(ContactsError::EmptyQuery) => writeln!(self.output, "Empty query.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        let id = match self.prompt_id("Enter contact ID to edit: ")? {
            Some(Some(id)) => id,
            Some(None) => return Ok(Flow::Continue),
            None => return Ok(Flow::Exit),
        };

        let current = match self.api.view_contact(id) {
            Ok(mut result) if !result.listed_contacts.is_empty() => {
                result.listed_contacts.remove(0)
            }
            Ok(_) => return Ok(Flow::Continue),
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(
            self.output,
            "Editing contact ID {} (leave blank to keep current)",
            current.id
        )?;

        let mut update = ContactUpdate::default();
        for field in Field::ALL {
            writeln!(self.output, "Current {}: {}", field, current.field(field))?;
            match self.prompt(&format!("New {}: ", field))? {
                Some(value) => update.set(field, value),
                None => return Ok(Flow::Exit),
            }
        }

        match self.api.edit_contact(id, &update) {
            Ok(result) => self.show(&render_messages(&result.messages))?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let id = match self.prompt_id("Enter contact ID to delete: ")? {
            Some(Some(id)) => id,
            Some(None) => return Ok(Flow::Continue),
            None => return Ok(Flow::Exit),
        };

        match self.api.delete_contact(id) {
            Ok(result) => self.show(&render_messages(&result.messages))?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Writes `text`, then reads one line without its line ending.
    /// `None` means input has ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Outer `None`: input ended. Inner `None`: not a valid id (already reported).
    fn prompt_id(&mut self, text: &str) -> Result<Option<Option<u32>>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse::<u32>() {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(Some(None))
            }
        }
    }

    fn show(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn report(&mut self, error: ContactsError) -> Result<()> {
        tracing::debug!(error = %error, "menu action failed");
        writeln!(self.output, "{}.", error)?;
        Ok(())
    }
}
