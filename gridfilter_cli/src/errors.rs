use std::fmt;

/// Failure classes of the CLI. Details are reported through the ui module
/// where the error happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    /// A file could not be read
    FileError,
    /// A file was read but its content is not valid input
    InputError,
    /// The filter was decoded but failed checking
    FilterError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "file error"),
            CliError::InputError => write!(f, "input error"),
            CliError::FilterError => write!(f, "filter error"),
        }
    }
}

impl std::error::Error for CliError {}
