pub use crate::cli::{
    command::{self, Cli},
    console::{Console, SharedConsole},
    run_app, run_session,
};
pub use crate::controller::{ActionOutcome, OverviewController};
pub use crate::dialog::{DialogOutcome, EditDialog, EditSession, Field};
pub use crate::domain::{ContactRecord, date, sample_contacts};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, StoreEvent};
pub use crate::view::{Alert, ContactDetails, DetailPresenter, Notifier, SelectionCoordinator};
