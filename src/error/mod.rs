pub mod domain_error;

use thiserror::Error;

use self::domain_error::DomainError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Domain Error. Error: '{0}'.")]
    Domain(DomainError),
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
    #[error("The words file could not be read. Error: '{0}'.")]
    WordsFile(String),
}

impl Error {
    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }

    /// Errors that must abort startup instead of being reported to a player.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Domain(error) => error.is_configuration_error(),
            Error::Internal(_) => false,
            Error::WordsFile(_) => true,
        }
    }
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        Error::Domain(error)
    }
}
