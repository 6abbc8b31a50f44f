use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::errors::AppError;

/// Console shared by the menu loop, the edit dialog and the warning surface.
pub type SharedConsole = Rc<RefCell<Console>>;

pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    pub fn new<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        Console {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }

    pub fn shared(self) -> SharedConsole {
        Rc::new(RefCell::new(self))
    }

    // OUTPUT FUNCTIONS
    pub fn write(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn writeln(&mut self, text: &str) -> Result<(), AppError> {
        self.write(text)?;
        self.write("\n")
    }

    // INPUT FUNCTIONS
    /// Reads one trimmed line. `None` once the input is closed.
    pub fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.write(&format!("{}\n> ", prompt))?;
        self.get_input()
    }

    pub fn confirm_action(&mut self, action: &str) -> Result<Option<bool>, AppError> {
        let answer = self.prompt(&format!("\nAre you sure you want to {}\n? (y/n)", action))?;
        Ok(answer.map(|a| a.eq_ignore_ascii_case("y")))
    }
}
