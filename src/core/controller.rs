use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

// the console boundary reports every failure as a printed line and the menu
// loop keeps running
pub(crate) type ConsoleError = String;

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::AlreadyBorrowed { message } => {
                format!("Error: {}", message)
            }
            CommandError::NotBorrowed { message } => {
                format!("Error: {}", message)
            }
            CommandError::NotFound { message } => {
                format!("Error: {}", message)
            }
            CommandError::Validation { message, .. } => {
                format!("Error: {}", message)
            }
            CommandError::Serialization { message } => {
                format!("Error: {}", message)
            }
            CommandError::Runtime { message, .. } => {
                format!("Error: {}", message)
            }
            CommandError::Other { message, .. } => {
                format!("Error: {}", message)
            }
        }
    }
}
