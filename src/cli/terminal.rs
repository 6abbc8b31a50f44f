use crate::cli::console::SharedConsole;
use crate::dialog::{DialogOutcome, EditDialog, EditSession, Field};
use crate::domain::ContactRecord;
use crate::errors::AppError;
use crate::view::{Alert, ContactDetails, DetailPresenter, Notifier};

/// Edit dialog asking for each field in turn.
///
/// An empty answer keeps the current value, `*` cancels, and closing the
/// input counts as closing the window.
pub struct TerminalDialog {
    console: SharedConsole,
}

impl TerminalDialog {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl EditDialog for TerminalDialog {
    fn edit(&mut self, title: &str, working: ContactRecord) -> Result<DialogOutcome, AppError> {
        let mut console = self.console.borrow_mut();
        let mut session = EditSession::new(working);

        console.writeln(&format!("\n--- {} ---", title))?;

        'form: loop {
            for field in Field::ALL {
                let prompt = format!(
                    "\n{} [{}] \n* to cancel: ",
                    field.label(),
                    session.form().get(field)
                );

                let input = match console.prompt(&prompt)? {
                    Some(input) => input,
                    None => break 'form,
                };

                if input == "*" {
                    session.cancel()?;
                    break 'form;
                }
                if !input.is_empty() {
                    session.set_field(field, input)?;
                }
            }

            let summary = describe_form(&session);
            match console.confirm_action(&format!("save this person \n{}\n", summary))? {
                Some(true) => {}
                Some(false) => {
                    session.cancel()?;
                    break 'form;
                }
                None => break 'form,
            }

            match session.confirm() {
                Ok(()) => break 'form,
                Err(AppError::Validation(msg)) => {
                    console.writeln("\nInvalid Fields\nPlease correct invalid fields")?;
                    console.write(&msg)?;
                }
                Err(e) => return Err(e),
            }
        }

        let outcome = session.into_outcome();
        tracing::debug!(confirmed = outcome.is_confirmed(), "edit dialog closed");
        Ok(outcome)
    }
}

fn describe_form(session: &EditSession) -> String {
    Field::ALL
        .iter()
        .map(|field| format!("{}: {}", field.label(), session.form().get(*field)))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Prints a warning and waits for Enter.
pub struct TerminalNotifier {
    console: SharedConsole,
}

impl TerminalNotifier {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl Notifier for TerminalNotifier {
    fn warn(&mut self, alert: &Alert) -> Result<(), AppError> {
        let mut console = self.console.borrow_mut();
        console.writeln(&format!(
            "\n[{}] {}\n{}",
            alert.title, alert.header, alert.content
        ))?;
        console.prompt("Press Enter to continue")?;
        Ok(())
    }
}

/// Detail pane showing the labelled fields of the selected person.
#[derive(Debug, Default)]
pub struct TerminalDetailPane {
    details: ContactDetails,
}

impl TerminalDetailPane {
    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn render(&self) -> String {
        self.details
            .rows()
            .iter()
            .map(|(label, value)| format!("{:>12}: {}\n", label, value))
            .collect()
    }
}

impl DetailPresenter for TerminalDetailPane {
    fn present(&mut self, details: ContactDetails) {
        self.details = details;
    }
}
