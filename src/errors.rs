use core::fmt;

#[derive(Debug)]
pub enum AppError {
    DialogClosed,
    Io(std::io::Error),
    NoSelection,
    OutOfRange { index: usize, len: usize },
    ParseCommand(String),
    Regex(regex::Error),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DialogClosed => {
                write!(f, "The edit dialog has already been closed")
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the terminal: {}", e)
            }
            AppError::NoSelection => {
                write!(f, "No person selected")
            }
            AppError::OutOfRange { index, len } => {
                write!(f, "Index {} is out of range for {} contacts", index, len)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
