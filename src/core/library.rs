use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // item exists but a borrow has already been recorded for it
    AlreadyBorrowed {
        message: String,
    },
    // a return was requested for an item that is not checked out
    NotBorrowed {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn not_borrowed(message: &str) -> LibraryError {
        LibraryError::NotBorrowed { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // every user error in the catalog is recoverable: the menu loop prints
    // the message and prompts again
    pub fn user_error(&self) -> bool {
        match self {
            LibraryError::AlreadyBorrowed { .. } => { true }
            LibraryError::NotBorrowed { .. } => { true }
            LibraryError::NotFound { .. } => { true }
            LibraryError::Validation { .. } => { true }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AlreadyBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum ItemStatus {
    Available,
    Borrowed,
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => ItemStatus::Available,
            "Borrowed" => ItemStatus::Borrowed,
            _ => ItemStatus::Available,
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemStatus, LibraryError};

    #[test]
    fn test_should_create_already_borrowed_error() {
        assert!(matches!(LibraryError::already_borrowed("test"), LibraryError::AlreadyBorrowed { message: _ }));
    }

    #[test]
    fn test_should_create_not_borrowed_error() {
        assert!(matches!(LibraryError::not_borrowed("test"), LibraryError::NotBorrowed { message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound { message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation { message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization { message: _ }));
    }

    #[test]
    fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime { message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_classify_user_errors() {
        assert_eq!(true, LibraryError::already_borrowed("test").user_error());
        assert_eq!(true, LibraryError::not_borrowed("test").user_error());
        assert_eq!(true, LibraryError::not_found("test").user_error());
        assert_eq!(true, LibraryError::validation("test", None).user_error());
        assert_eq!(false, LibraryError::serialization("test").user_error());
        assert_eq!(false, LibraryError::runtime("test", None).user_error());
    }

    #[test]
    fn test_should_format_item_status() {
        let statuses = vec![
            ItemStatus::Available,
            ItemStatus::Borrowed,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = ItemStatus::from(str);
            assert_eq!(status, str_status);
        }
    }
}
