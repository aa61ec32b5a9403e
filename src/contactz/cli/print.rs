use colored::Colorize;
use contactz::api::{CmdMessage, MessageLevel};
use contactz::config::ContactsConfig;
use contactz::model::{Contact, Field};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = "-----------------------------";
const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 30;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        let _ = writeln!(out, "{}", styled);
    }
    out
}

/// One contact as a labelled block.
pub(super) fn render_card(contact: &Contact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", contact.id);
    for field in Field::ALL {
        let _ = writeln!(
            out,
            "  {:<7}: {}",
            capitalize(field.label()),
            contact.field(field)
        );
    }
    let _ = writeln!(out, "{}", SEPARATOR);
    out
}

/// Every contact as a card, preceded by the total.
pub(super) fn render_cards(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }
    let mut out = format!("Total contacts: {}\n", contacts.len());
    for contact in contacts {
        out.push_str(&render_card(contact));
    }
    out
}

/// Compact one-line-per-contact table; address is left out.
pub(super) fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let mut out = String::new();
    let header = format!(
        "{}{}{}{}",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Name", NAME_WIDTH),
        pad_to_width("Phone", PHONE_WIDTH),
        "Email"
    );
    let _ = writeln!(out, "{}", header.bold());

    for c in contacts {
        let _ = writeln!(
            out,
            "{}{}{}{}",
            pad_to_width(&c.id.to_string(), ID_WIDTH),
            pad_to_width(&c.name, NAME_WIDTH),
            pad_to_width(&c.phone, PHONE_WIDTH),
            truncate_to_width(&c.email, EMAIL_WIDTH)
        );
    }
    out
}

pub(super) fn render_config(config: &ContactsConfig) -> String {
    let mut out = String::new();
    for key in ContactsConfig::keys() {
        if let Some(value) = config.get(key) {
            let _ = writeln!(out, "{} = {}", key, value);
        }
    }
    out
}

pub(super) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate (with an ellipsis) and pad so the column is exactly `width` wide,
/// leaving one space before the next column.
fn pad_to_width(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
