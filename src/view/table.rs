use crate::store::{ContactStore, StoreEvent};

const SELECTED_MARKER: char = '>';

/// Renders the first/last name table, 1-based row numbers, selected row marked.
pub fn render(store: &ContactStore, selected: Option<usize>) -> String {
    let mut output = format!("{:>6} {:<20} {:<20}\n", "", "First Name", "Last Name");

    if store.is_empty() {
        output.push_str("       (no contacts)\n");
        return output;
    }

    for (i, c) in store.iter().enumerate() {
        let marker = if selected == Some(i) { SELECTED_MARKER } else { ' ' };
        output.push_str(&format!(
            "{marker} {:>3}. {:<20} {:<20}\n",
            i + 1,
            c.first_name,
            c.last_name
        ));
    }
    output
}

/// Hooks the table up to store notifications.
pub fn bind(store: &mut ContactStore) {
    store.subscribe(|event| match event {
        StoreEvent::Inserted(i) => tracing::info!(row = i + 1, "row added"),
        StoreEvent::Removed(i) => tracing::info!(row = i + 1, "row removed"),
        StoreEvent::Updated(i) => tracing::info!(row = i + 1, "row updated"),
    });
}
