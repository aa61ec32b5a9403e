use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Contact with ID {0} not found")]
    NotFound(u32),

    #[error("Empty query")]
    EmptyQuery,

    #[error("No ids left: the store already holds id {0}")]
    IdsExhausted(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file ends with a partial record ({trailing} trailing bytes); run `doctor --fix` to truncate it")]
    PartialRecord { trailing: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
