use super::*;
pub use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub postal_code: i32,
    pub city: String,
    pub birthday: Option<NaiveDate>,
}

impl Default for ContactRecord {
    // The "new person" record handed to the edit dialog.
    fn default() -> Self {
        ContactRecord {
            id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            street: String::new(),
            postal_code: 0,
            city: String::new(),
            birthday: None,
        }
    }
}

impl ContactRecord {
    /// Builds a record with the given name and placeholder address data.
    pub fn with_name(first_name: &str, last_name: &str) -> Self {
        ContactRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            street: "some street".to_string(),
            postal_code: 1234,
            city: "some city".to_string(),
            birthday: NaiveDate::from_ymd_opt(1999, 2, 21),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// The persons the application starts with.
pub fn sample_contacts() -> Vec<ContactRecord> {
    [
        ("Hans", "Muster"),
        ("Ruth", "Mueller"),
        ("Heinz", "Kurz"),
        ("Cornelia", "Meier"),
        ("Werner", "Meyer"),
        ("Lydia", "Kunz"),
        ("Anna", "Best"),
        ("Stefan", "Meier"),
        ("Martin", "Mueller"),
    ]
    .into_iter()
    .map(|(first, last)| ContactRecord::with_name(first, last))
    .collect()
}
