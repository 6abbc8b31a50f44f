use crate::dialog::{DialogOutcome, EditDialog};
use crate::domain::ContactRecord;
use crate::errors::AppError;
use crate::store::ContactStore;
use crate::view::{Alert, DetailPresenter, Notifier, SelectionCoordinator};

/// What a user action did to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Added(usize),
    Updated(usize),
    Removed(ContactRecord),
    Cancelled,
    NoSelection,
}

/// Handles the New, Edit and Delete buttons of the person overview.
pub struct OverviewController<D, N, P> {
    store: ContactStore,
    selection: SelectionCoordinator<P>,
    dialog: D,
    notifier: N,
}

impl<D, N, P> OverviewController<D, N, P>
where
    D: EditDialog,
    N: Notifier,
    P: DetailPresenter,
{
    pub fn new(store: ContactStore, dialog: D, notifier: N, presenter: P) -> Self {
        Self {
            store,
            selection: SelectionCoordinator::new(presenter),
            dialog,
            notifier,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index(&self.store)
    }

    pub fn presenter(&self) -> &P {
        self.selection.presenter()
    }

    /// Row selection from the table.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), AppError> {
        self.selection.set_selection(&self.store, index)
    }

    pub fn handle_new_person(&mut self) -> Result<ActionOutcome, AppError> {
        match self.dialog.edit("New Person", ContactRecord::default())? {
            DialogOutcome::Confirmed(contact) => {
                let index = self.store.insert(contact);
                Ok(ActionOutcome::Added(index))
            }
            DialogOutcome::Cancelled => Ok(ActionOutcome::Cancelled),
        }
    }

    pub fn handle_edit_person(&mut self) -> Result<ActionOutcome, AppError> {
        let Some((index, contact)) = self.selected_contact() else {
            return self.warn_no_selection();
        };

        match self.dialog.edit("Edit Person", contact)? {
            DialogOutcome::Confirmed(edited) => {
                self.store.replace_at(index, edited)?;
                self.selection.refresh(&self.store);
                Ok(ActionOutcome::Updated(index))
            }
            DialogOutcome::Cancelled => Ok(ActionOutcome::Cancelled),
        }
    }

    pub fn handle_delete_person(&mut self) -> Result<ActionOutcome, AppError> {
        let Some(index) = self.selected_index() else {
            return self.warn_no_selection();
        };

        let removed = self.store.remove_at(index)?;
        self.selection.record_removed(&removed.id);
        Ok(ActionOutcome::Removed(removed))
    }

    // A clone: the dialog never sees the stored record.
    fn selected_contact(&self) -> Option<(usize, ContactRecord)> {
        let index = self.selected_index()?;
        self.store.get(index).map(|c| (index, c.clone()))
    }

    fn warn_no_selection(&mut self) -> Result<ActionOutcome, AppError> {
        tracing::warn!("action requires a selected person");
        self.notifier.warn(&Alert::no_selection())?;
        Ok(ActionOutcome::NoSelection)
    }
}
