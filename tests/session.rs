use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use address_book::prelude::*;

#[derive(Clone, Default)]
struct Screen(Rc<RefCell<Vec<u8>>>);

impl Write for Screen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Screen {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

fn run(cli: &Cli, script: &str) -> Result<String, AppError> {
    let screen = Screen::default();
    let console = Console::new(Cursor::new(script.to_string()), screen.clone()).shared();

    run_session(cli, console)?;
    Ok(screen.text())
}

fn cli(empty: bool) -> Cli {
    Cli {
        empty,
        title: "AddressApp".to_string(),
    }
}

#[test]
fn new_person_keeps_selection() -> Result<(), AppError> {
    let text = run(
        &cli(false),
        "1\nn\nAnna\nBest\nSeestrasse 4\n6000\nLuzern\n12.03.1988\ny\nq\n",
    )?;

    let (_, after) = text.split_once("Person added as row 10").unwrap_or_default();
    assert!(after.contains(">   1. Hans"));
    assert!(after.contains("   10. Anna                 Best"));
    assert!(after.contains("  First Name: Hans\n"));
    Ok(())
}

#[test]
fn delete_on_empty_book_warns() -> Result<(), AppError> {
    let text = run(&cli(true), "d\n\nq\n")?;

    assert!(text.contains("[No Selection] No Person Selected"));
    assert!(text.contains("(no contacts)"));
    Ok(())
}

#[test]
fn clearing_selection_empties_details() -> Result<(), AppError> {
    let text = run(&cli(false), "4\n0\nq\n")?;

    let (_, after) = text.split_once("  First Name: Cornelia\n").unwrap_or_default();
    assert!(after.contains("  First Name: \n"));
    assert!(after.contains("    Birthday: \n"));
    Ok(())
}
