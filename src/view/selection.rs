use crate::domain::Uuid;
use crate::errors::AppError;
use crate::store::ContactStore;
use crate::view::detail::{ContactDetails, DetailPresenter};

/// Keeps the detail pane in step with the selected table row.
///
/// The selection names a record by id, not by position, so it survives
/// removals of other rows and turns into "nothing" once its own record
/// is gone.
#[derive(Debug)]
pub struct SelectionCoordinator<P> {
    presenter: P,
    selected: Option<Uuid>,
}

impl<P: DetailPresenter> SelectionCoordinator<P> {
    /// Starts with nothing selected and a cleared detail pane.
    pub fn new(mut presenter: P) -> Self {
        presenter.present(ContactDetails::of(None));
        Self {
            presenter,
            selected: None,
        }
    }

    pub fn set_selection(
        &mut self,
        store: &ContactStore,
        index: Option<usize>,
    ) -> Result<(), AppError> {
        let contact = match index {
            Some(i) => Some(store.get(i).ok_or(AppError::OutOfRange {
                index: i,
                len: store.len(),
            })?),
            None => None,
        };
        let id = contact.map(|c| c.id);

        if id == self.selected {
            return Ok(());
        }

        tracing::debug!(?index, "selection changed");
        self.selected = id;
        self.presenter.present(ContactDetails::of(contact));
        Ok(())
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_index(&self, store: &ContactStore) -> Option<usize> {
        self.selected.and_then(|id| store.position_of(&id))
    }

    /// Drops the selection if it pointed at the removed record.
    pub fn record_removed(&mut self, id: &Uuid) {
        if self.selected.as_ref() == Some(id) {
            tracing::debug!("selected contact removed, clearing selection");
            self.selected = None;
            self.presenter.present(ContactDetails::of(None));
        }
    }

    /// Re-presents the current selection after its record was edited.
    pub fn refresh(&mut self, store: &ContactStore) {
        let contact = self
            .selected
            .and_then(|id| store.position_of(&id))
            .and_then(|i| store.get(i));

        if contact.is_none() {
            self.selected = None;
        }
        self.presenter.present(ContactDetails::of(contact));
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactRecord;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<ContactDetails>,
    }

    impl DetailPresenter for Recorder {
        fn present(&mut self, details: ContactDetails) {
            self.calls.push(details);
        }
    }

    fn store() -> ContactStore {
        ContactStore::with_contacts(vec![
            ContactRecord::with_name("Hans", "Muster"),
            ContactRecord::with_name("Ruth", "Mueller"),
        ])
    }

    #[test]
    fn starts_with_cleared_details() {
        let selection = SelectionCoordinator::new(Recorder::default());

        assert_eq!(selection.presenter().calls, vec![ContactDetails::default()]);
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn selecting_presents_that_record() -> Result<(), AppError> {
        let store = store();
        let mut selection = SelectionCoordinator::new(Recorder::default());

        selection.set_selection(&store, Some(1))?;

        assert_eq!(
            selection.presenter().calls.last(),
            Some(&ContactDetails::of(store.get(1)))
        );
        assert_eq!(selection.selected_index(&store), Some(1));
        Ok(())
    }

    #[test]
    fn repeated_selection_presents_once() -> Result<(), AppError> {
        let store = store();
        let mut selection = SelectionCoordinator::new(Recorder::default());

        selection.set_selection(&store, Some(0))?;
        selection.set_selection(&store, Some(0))?;
        selection.set_selection(&store, None)?;
        selection.set_selection(&store, None)?;

        // Initial reset, Hans, then empty
        assert_eq!(selection.presenter().calls.len(), 3);
        assert!(selection.presenter().calls[2].is_empty());
        Ok(())
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let store = store();
        let mut selection = SelectionCoordinator::new(Recorder::default());

        let result = selection.set_selection(&store, Some(2));

        assert!(matches!(result, Err(AppError::OutOfRange { index: 2, len: 2 })));
        assert_eq!(selection.presenter().calls.len(), 1);
    }

    #[test]
    fn selection_follows_record_when_rows_shift() -> Result<(), AppError> {
        let mut store = store();
        let mut selection = SelectionCoordinator::new(Recorder::default());
        selection.set_selection(&store, Some(1))?;

        let removed = store.remove_at(0)?;
        selection.record_removed(&removed.id);

        assert_eq!(selection.selected_index(&store), Some(0));
        assert_eq!(selection.presenter().calls.len(), 2);
        Ok(())
    }

    #[test]
    fn removing_selected_record_clears_once() -> Result<(), AppError> {
        let mut store = store();
        let mut selection = SelectionCoordinator::new(Recorder::default());
        selection.set_selection(&store, Some(1))?;

        let removed = store.remove_at(1)?;
        selection.record_removed(&removed.id);
        selection.record_removed(&removed.id);

        assert_eq!(selection.selected_id(), None);
        assert_eq!(selection.presenter().calls.len(), 3);
        assert!(selection.presenter().calls[2].is_empty());
        Ok(())
    }
}
