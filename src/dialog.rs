pub mod session;

use crate::domain::ContactRecord;
use crate::errors::AppError;

pub use session::{ContactForm, DialogState, EditSession, Field};

/// How a modal edit dialog ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed(ContactRecord),
    Cancelled,
}

impl DialogOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Confirmed(_))
    }
}

/// A modal dialog editing a working copy of a contact.
///
/// The call blocks until the user confirms or cancels. Implementations
/// never touch the store; committing a confirmed record is the caller's job.
pub trait EditDialog {
    fn edit(&mut self, title: &str, working: ContactRecord) -> Result<DialogOutcome, AppError>;
}
