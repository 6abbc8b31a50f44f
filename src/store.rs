use std::fmt;

use crate::domain::{ContactRecord, Uuid};
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Inserted(usize),
    Removed(usize),
    Updated(usize),
}

impl StoreEvent {
    pub fn index(&self) -> usize {
        match self {
            StoreEvent::Inserted(i) | StoreEvent::Removed(i) | StoreEvent::Updated(i) => *i,
        }
    }
}

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// Ordered, observable list of contacts. Insertion order is display order.
#[derive(Default)]
pub struct ContactStore {
    data: Vec<ContactRecord>,
    observers: Vec<Observer>,
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("data", &self.data)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<ContactRecord>) -> Self {
        Self {
            data: contacts,
            observers: Vec::new(),
        }
    }

    /// Registers a callback run after every mutation, in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn insert(&mut self, contact: ContactRecord) -> usize {
        self.data.push(contact);
        let index = self.data.len() - 1;

        self.notify(StoreEvent::Inserted(index));
        index
    }

    pub fn remove_at(&mut self, index: usize) -> Result<ContactRecord, AppError> {
        self.check_index(index)?;
        let removed = self.data.remove(index);

        self.notify(StoreEvent::Removed(index));
        Ok(removed)
    }

    /// Commits an edited record in place.
    pub fn replace_at(&mut self, index: usize, contact: ContactRecord) -> Result<(), AppError> {
        self.check_index(index)?;
        self.data[index] = contact;

        self.notify(StoreEvent::Updated(index));
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ContactRecord> {
        self.data.get(index)
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.data.iter().position(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactRecord> {
        self.data.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), AppError> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(AppError::OutOfRange {
                index,
                len: self.data.len(),
            })
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        tracing::debug!(?event, len = self.data.len(), "contact store changed");

        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }
}
