pub mod contact;
pub mod date;

pub use uuid::Uuid;

pub use contact::{ContactRecord, sample_contacts};
