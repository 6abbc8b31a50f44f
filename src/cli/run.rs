use std::rc::Rc;

use clap::Parser;
use dotenv::dotenv;

use crate::{
    cli::{
        command::{self, Cli, Command, parse_command},
        console::{Console, SharedConsole},
        terminal::{TerminalDetailPane, TerminalDialog, TerminalNotifier},
    },
    controller::{ActionOutcome, OverviewController},
    domain::sample_contacts,
    errors::AppError,
    store::ContactStore,
    view::table,
};

type Overview = OverviewController<TerminalDialog, TerminalNotifier, TerminalDetailPane>;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    run_session(&cli, Console::stdio().shared())
}

/// Runs the person overview until the user quits or the input closes.
pub fn run_session(cli: &Cli, console: SharedConsole) -> Result<(), AppError> {
    let mut store = if cli.empty {
        ContactStore::new()
    } else {
        ContactStore::with_contacts(sample_contacts())
    };
    table::bind(&mut store);

    tracing::info!(title = %cli.title, contacts = store.len(), "address book opened");

    let mut overview: Overview = OverviewController::new(
        store,
        TerminalDialog::new(Rc::clone(&console)),
        TerminalNotifier::new(Rc::clone(&console)),
        TerminalDetailPane::default(),
    );

    console
        .borrow_mut()
        .writeln(&format!("\n\n--- {} ---\n", cli.title))?;

    loop {
        show_overview(&overview, &console)?;

        let input = console.borrow_mut().get_input()?;
        let Some(input) = input else {
            break;
        };

        let result = match parse_command(&input) {
            Ok(Command::Select(row)) => overview.select(Some(row)).map(|_| None),
            Ok(Command::ClearSelection) => overview.select(None).map(|_| None),
            Ok(Command::New) => overview.handle_new_person().map(Some),
            Ok(Command::Edit) => overview.handle_edit_person().map(Some),
            Ok(Command::Delete) => overview.handle_delete_person().map(Some),
            Ok(Command::Quit) => break,
            Err(e) => Err(e),
        };

        match result {
            Ok(Some(outcome)) => report(&outcome, &console)?,
            Ok(None) => {}
            // The terminal is gone, nothing left to talk to
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                tracing::warn!(error = %e, "action failed");
                console.borrow_mut().writeln(&format!("\n{}", e))?;
            }
        }
    }

    tracing::info!(contacts = overview.store().len(), "address book closed");
    console.borrow_mut().writeln("\nBye!")
}

fn show_overview(overview: &Overview, console: &SharedConsole) -> Result<(), AppError> {
    let mut console = console.borrow_mut();

    console.write("\n")?;
    console.write(&table::render(overview.store(), overview.selected_index()))?;
    console.write("\nPerson Details\n")?;
    console.write(&overview.presenter().render())?;
    console.write(&format!("{}\n> ", command::menu()))
}

fn report(outcome: &ActionOutcome, console: &SharedConsole) -> Result<(), AppError> {
    let message = match outcome {
        ActionOutcome::Added(index) => format!("Person added as row {}", index + 1),
        ActionOutcome::Updated(index) => format!("Row {} updated", index + 1),
        ActionOutcome::Removed(contact) => format!("{} deleted", contact.full_name()),
        ActionOutcome::Cancelled => "Nothing changed".to_string(),
        // The notifier has already told the user
        ActionOutcome::NoSelection => return Ok(()),
    };
    console.borrow_mut().writeln(&format!("\n{}", message))
}
