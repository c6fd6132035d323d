use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    AlreadyBorrowed {
        message: String,
    },
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
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::AlreadyBorrowed { message } => {
                CommandError::AlreadyBorrowed { message }
            }
            LibraryError::NotBorrowed { message } => {
                CommandError::NotBorrowed { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::AlreadyBorrowed { message: "test".to_string() };
        let _ = CommandError::NotBorrowed { message: "test".to_string() };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None };
    }

    #[test]
    fn test_should_map_library_error() {
        assert!(matches!(CommandError::from(LibraryError::already_borrowed("test")),
                         CommandError::AlreadyBorrowed { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_borrowed("test")),
                         CommandError::NotBorrowed { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")),
                         CommandError::NotFound { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)),
                         CommandError::Validation { message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")),
                         CommandError::Serialization { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)),
                         CommandError::Runtime { message: _, reason_code: _ }));
    }
}
