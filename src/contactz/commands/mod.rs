use crate::config::ContactsConfig;
use crate::model::Contact;
use crate::store::StoreReport;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod search;
pub mod view;

/// Where this run keeps its data.
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    /// Directory holding `config.json` and, by default, the store file.
    pub data_dir: PathBuf,
    /// The record file itself.
    pub store_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts created, changed or removed by the command.
    pub affected_contacts: Vec<Contact>,
    /// Contacts the command wants shown.
    pub listed_contacts: Vec<Contact>,
    pub report: Option<StoreReport>,
    pub config: Option<ContactsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_report(mut self, report: StoreReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: ContactsConfig) -> Self {
        self.config = Some(config);
        self
    }
}
