//! # Record Codec
//!
//! Packs and unpacks contacts as fixed-width records. A store file is nothing
//! but records laid back to back, so `file size / RECORD_SIZE` is the record count.
//!
//! ```text
//! offset  size  field
//!      0     4  id       (u32, little-endian)
//!      4   100  name     (UTF-8, NUL-terminated, NUL-padded)
//!    104    20  phone
//!    124   100  email
//!    224   200  address
//!    ---   ---
//!          424  RECORD_SIZE
//! ```
//!
//! The layout is the one a C `struct { int id; char name[100]; char phone[20];
//! char email[100]; char address[200]; }` has on little-endian hosts, so files
//! written by that program load unchanged.

use crate::model::{Contact, Field};

pub const ID_SIZE: usize = 4;

pub const RECORD_SIZE: usize = ID_SIZE
    + crate::model::NAME_CAPACITY
    + crate::model::PHONE_CAPACITY
    + crate::model::EMAIL_CAPACITY
    + crate::model::ADDRESS_CAPACITY;

/// Result of splitting a raw buffer into records.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub contacts: Vec<Contact>,
    /// Bytes after the last whole record.
    pub trailing: usize,
}

pub fn encode_contact(contact: &Contact) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_SIZE);
    buf.extend_from_slice(&contact.id.to_le_bytes());
    for field in Field::ALL {
        write_text(&mut buf, contact.field(field), field.capacity());
    }
    debug_assert_eq!(buf.len(), RECORD_SIZE);
    buf
}

pub fn encode_all(contacts: &[Contact]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(contacts.len() * RECORD_SIZE);
    for contact in contacts {
        buf.extend_from_slice(&encode_contact(contact));
    }
    buf
}

/// Decodes one record. `record` must hold at least `RECORD_SIZE` bytes.
pub fn decode_contact(record: &[u8]) -> Contact {
    let id = u32::from_le_bytes([record[0], record[1], record[2], record[3]]);

    let mut offset = ID_SIZE;
    let mut text = [String::new(), String::new(), String::new(), String::new()];
    for (slot, field) in text.iter_mut().zip(Field::ALL) {
        let end = offset + field.capacity();
        *slot = read_text(&record[offset..end]);
        offset = end;
    }
    let [name, phone, email, address] = text;

    Contact {
        id,
        name,
        phone,
        email,
        address,
    }
}

/// Splits `bytes` into whole records. A partial trailing record is not decoded;
/// its length is reported in [`Decoded::trailing`].
pub fn decode_all(bytes: &[u8]) -> Decoded {
    let chunks = bytes.chunks_exact(RECORD_SIZE);
    let trailing = chunks.remainder().len();
    Decoded {
        contacts: chunks.map(decode_contact).collect(),
        trailing,
    }
}

/// Writes at most `capacity` bytes and NUL-pads the rest. A value that fills the
/// slot is stored without a terminator, as the C layout allows.
fn write_text(buf: &mut Vec<u8>, value: &str, capacity: usize) {
    let value = value.split('\0').next().unwrap_or_default();
    let mut end = value.len().min(capacity);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    buf.extend_from_slice(&value.as_bytes()[..end]);
    buf.resize(buf.len() + capacity - end, 0);
}

fn read_text(slot: &[u8]) -> String {
    let len = slot.iter().position(|b| *b == 0).unwrap_or(slot.len());
    String::from_utf8_lossy(&slot[..len]).into_owned()
}
