pub mod alert;
pub mod detail;
pub mod selection;
pub mod table;

pub use alert::{Alert, Notifier};
pub use detail::{ContactDetails, DetailPresenter};
pub use selection::SelectionCoordinator;
