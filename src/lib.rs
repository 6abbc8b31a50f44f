//! An address book: a person table with a detail pane that follows the
//! selected row, and New/Edit/Delete actions mediated by a modal edit dialog.

pub mod cli;
pub mod controller;
pub mod dialog;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod store;
pub mod view;
