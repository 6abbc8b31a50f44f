use crate::domain::{ContactRecord, date};

/// The six display fields of the detail pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub birthday: String,
}

impl ContactDetails {
    /// Projects a record into display text. `None` yields all-empty fields.
    pub fn of(contact: Option<&ContactRecord>) -> Self {
        match contact {
            Some(c) => ContactDetails {
                first_name: c.first_name.clone(),
                last_name: c.last_name.clone(),
                street: c.street.clone(),
                postal_code: c.postal_code.to_string(),
                city: c.city.clone(),
                birthday: date::format(c.birthday),
            },
            None => ContactDetails::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactDetails::default()
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("First Name", self.first_name.as_str()),
            ("Last Name", self.last_name.as_str()),
            ("Street", self.street.as_str()),
            ("Postal Code", self.postal_code.as_str()),
            ("City", self.city.as_str()),
            ("Birthday", self.birthday.as_str()),
        ]
    }
}

pub trait DetailPresenter {
    fn present(&mut self, details: ContactDetails);
}
