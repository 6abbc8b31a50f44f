use crate::errors::AppError;

/// A warning shown to the user. Acknowledged before control returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub header: String,
    pub content: String,
}

impl Alert {
    pub fn no_selection() -> Self {
        Alert {
            title: "No Selection".to_string(),
            header: "No Person Selected".to_string(),
            content: "Please select a person in the table.".to_string(),
        }
    }
}

pub trait Notifier {
    fn warn(&mut self, alert: &Alert) -> Result<(), AppError>;
}
