use regex::Regex;

use crate::dialog::DialogOutcome;
use crate::domain::{ContactRecord, date};
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Street,
    PostalCode,
    City,
    Birthday,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Street,
        Field::PostalCode,
        Field::City,
        Field::Birthday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Street => "Street",
            Field::PostalCode => "Postal Code",
            Field::City => "City",
            Field::Birthday => "Birthday",
        }
    }
}

/// The text fields of the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub birthday: String,
}

impl From<&ContactRecord> for ContactForm {
    fn from(contact: &ContactRecord) -> Self {
        ContactForm {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            street: contact.street.clone(),
            postal_code: contact.postal_code.to_string(),
            city: contact.city.clone(),
            birthday: date::format(contact.birthday),
        }
    }
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Street => &self.street,
            Field::PostalCode => &self.postal_code,
            Field::City => &self.city,
            Field::Birthday => &self.birthday,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Street => &mut self.street,
            Field::PostalCode => &mut self.postal_code,
            Field::City => &mut self.city,
            Field::Birthday => &mut self.birthday,
        };
        *slot = value;
    }

    pub fn validate_name(name: &str) -> Result<bool, AppError> {
        // Must begin with a letter
        // May contain letters, spaces, dots, hyphens and apostrophes after that
        let re = Regex::new(r"^\p{L}[\p{L}\s'.-]*$")?;
        Ok(re.is_match(name.trim()))
    }

    pub fn validate_text(text: &str) -> Result<bool, AppError> {
        let re = Regex::new(r"\S")?;
        Ok(re.is_match(text))
    }

    /// Collects every failing rule; `Err(Validation)` lists them one per line.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut message = String::new();

        if !Self::validate_name(&self.first_name)? {
            message.push_str("No valid first name!\n");
        }
        if !Self::validate_name(&self.last_name)? {
            message.push_str("No valid last name!\n");
        }
        if !Self::validate_text(&self.street)? {
            message.push_str("No valid street!\n");
        }

        if !Self::validate_text(&self.postal_code)? {
            message.push_str("No valid postal code!\n");
        } else if self.postal_code.trim().parse::<i32>().is_err() {
            message.push_str("No valid postal code (must be an integer)!\n");
        }

        if !Self::validate_text(&self.city)? {
            message.push_str("No valid city!\n");
        }

        if !Self::validate_text(&self.birthday)? {
            message.push_str("No valid birthday!\n");
        } else if !date::is_valid(&self.birthday) {
            message.push_str("No valid birthday. Use the format dd.mm.yyyy!\n");
        }

        if message.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(message))
        }
    }

    /// Validates and writes the fields over `base`, keeping its id.
    pub fn apply_to(&self, base: &ContactRecord) -> Result<ContactRecord, AppError> {
        self.validate()?;

        let postal_code = self
            .postal_code
            .trim()
            .parse::<i32>()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(ContactRecord {
            id: base.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            street: self.street.trim().to_string(),
            postal_code,
            city: self.city.trim().to_string(),
            birthday: date::parse(&self.birthday),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Editing,
    Confirmed,
    Cancelled,
}

/// State of one open edit dialog, independent of how it is drawn.
#[derive(Debug)]
pub struct EditSession {
    working: ContactRecord,
    form: ContactForm,
    state: DialogState,
}

impl EditSession {
    pub fn new(working: ContactRecord) -> Self {
        let form = ContactForm::from(&working);
        Self {
            working,
            form,
            state: DialogState::Editing,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn set_field(&mut self, field: Field, value: String) -> Result<(), AppError> {
        self.ensure_open()?;
        self.form.set(field, value);
        Ok(())
    }

    /// Stays in `Editing` when the form is invalid.
    pub fn confirm(&mut self) -> Result<(), AppError> {
        self.ensure_open()?;
        self.working = self.form.apply_to(&self.working)?;
        self.state = DialogState::Confirmed;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), AppError> {
        self.ensure_open()?;
        self.state = DialogState::Cancelled;
        Ok(())
    }

    /// A session closed without confirming counts as cancelled.
    pub fn into_outcome(self) -> DialogOutcome {
        match self.state {
            DialogState::Confirmed => DialogOutcome::Confirmed(self.working),
            DialogState::Editing | DialogState::Cancelled => DialogOutcome::Cancelled,
        }
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.state == DialogState::Editing {
            Ok(())
        } else {
            Err(AppError::DialogClosed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> Result<EditSession, AppError> {
        let mut session = EditSession::new(ContactRecord::default());
        session.set_field(Field::FirstName, "Anna".to_string())?;
        session.set_field(Field::LastName, "Best".to_string())?;
        session.set_field(Field::Street, "Bahnhofstrasse 1".to_string())?;
        session.set_field(Field::PostalCode, "8001".to_string())?;
        session.set_field(Field::City, "Zürich".to_string())?;
        session.set_field(Field::Birthday, "05.11.1990".to_string())?;
        Ok(session)
    }

    #[test]
    fn confirm_yields_edited_record() -> Result<(), AppError> {
        let mut session = filled_session()?;
        session.confirm()?;

        match session.into_outcome() {
            DialogOutcome::Confirmed(record) => {
                assert_eq!(record.full_name(), "Anna Best");
                assert_eq!(record.postal_code, 8001);
                assert_eq!(date::format(record.birthday), "05.11.1990");
            }
            DialogOutcome::Cancelled => panic!("expected a confirmed dialog"),
        }
        Ok(())
    }

    #[test]
    fn confirm_keeps_record_identity() -> Result<(), AppError> {
        let original = ContactRecord::with_name("Hans", "Muster");
        let mut session = EditSession::new(original.clone());
        session.set_field(Field::City, "Bern".to_string())?;
        session.confirm()?;

        let DialogOutcome::Confirmed(record) = session.into_outcome() else {
            panic!("expected a confirmed dialog");
        };
        assert_eq!(record.id, original.id);
        assert_eq!(record.city, "Bern");
        assert_eq!(record.street, original.street);
        Ok(())
    }

    #[test]
    fn invalid_form_blocks_confirmation() {
        let mut session = EditSession::new(ContactRecord::default());

        let err = session.confirm().unwrap_err();

        assert_eq!(session.state(), DialogState::Editing);
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("No valid first name!"));
                assert!(msg.contains("No valid last name!"));
                assert!(msg.contains("No valid street!"));
                assert!(msg.contains("No valid city!"));
                assert!(msg.contains("No valid birthday!"));
                // Default postal code is "0", which is a valid integer
                assert!(!msg.contains("postal code"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_postal_code_and_birthday() -> Result<(), AppError> {
        let mut session = filled_session()?;
        session.set_field(Field::PostalCode, "80O1".to_string())?;
        session.set_field(Field::Birthday, "1990-11-05".to_string())?;

        let err = session.confirm().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No valid postal code (must be an integer)!"));
        assert!(msg.contains("No valid birthday. Use the format dd.mm.yyyy!"));
        Ok(())
    }

    #[test]
    fn cancel_discards_working_copy() -> Result<(), AppError> {
        let original = ContactRecord::with_name("Ruth", "Mueller");
        let mut session = EditSession::new(original.clone());
        session.set_field(Field::FirstName, "Rita".to_string())?;
        session.cancel()?;

        assert_eq!(session.into_outcome(), DialogOutcome::Cancelled);
        assert_eq!(original.first_name, "Ruth");
        Ok(())
    }

    #[test]
    fn closed_session_rejects_changes() -> Result<(), AppError> {
        let mut session = filled_session()?;
        session.cancel()?;

        assert!(matches!(
            session.set_field(Field::City, "Basel".to_string()),
            Err(AppError::DialogClosed)
        ));
        assert!(matches!(session.confirm(), Err(AppError::DialogClosed)));
        Ok(())
    }

    #[test]
    fn unfinished_session_counts_as_cancelled() -> Result<(), AppError> {
        let session = filled_session()?;

        assert!(!session.into_outcome().is_confirmed());
        Ok(())
    }
}
