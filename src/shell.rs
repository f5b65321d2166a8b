use std::io::{self, BufRead, Write};
use log::{debug, info};
use crate::error::NotesError;
use crate::error_log::separator;
use crate::note::decode_line;
use crate::storage::StoreContents;
use crate::NotesManager;

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Clear,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Non-numeric or out-of-range input parses to `Invalid`.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i32>() {
            Ok(1) => MenuChoice::Add,
            Ok(2) => MenuChoice::View,
            Ok(3) => MenuChoice::Search,
            Ok(4) => MenuChoice::Clear,
            Ok(5) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// `y` / `yes` in any case confirms a destructive action.
pub fn is_confirmation(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over a [`NotesManager`].
///
/// Input, output and error streams are injected so the loop can be driven
/// from stdin/stdout or from in-memory buffers.
pub struct Shell<R, W, E> {
    manager: NotesManager,
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(manager: NotesManager, input: R, output: W, errors: E) -> Self {
        Shell {
            manager,
            input,
            output,
            errors,
        }
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// Note store failures are reported and logged, never returned. An `Err`
    /// here means the terminal streams themselves failed.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Welcome to Notes Manager ===")?;
        writeln!(self.output, "A simple file-based notes application")?;
        writeln!(self.output)?;
        info!("Shell started");

        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = MenuChoice::parse(&line);
            debug!("Menu choice {:?}", choice);

            let flow = match choice {
                MenuChoice::Add => self.add_note()?,
                MenuChoice::View => self.view_all_notes()?,
                MenuChoice::Search => self.search_notes()?,
                MenuChoice::Clear => self.clear_all_notes()?,
                MenuChoice::Exit => break,
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }

            writeln!(self.output, "\nPress Enter to continue...")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                break;
            }
        }

        writeln!(self.output, "Thank you for using Notes Manager!")?;
        self.output.flush()?;
        info!("Shell exited");
        Ok(())
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== NOTES MANAGER ===")?;
        writeln!(self.output, "1. Add New Note")?;
        writeln!(self.output, "2. View All Notes")?;
        writeln!(self.output, "3. Search Notes")?;
        writeln!(self.output, "4. Clear All Notes")?;
        writeln!(self.output, "5. Exit")?;
        self.prompt("Enter your choice (1-5): ")
    }

    fn add_note(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== Add New Note ===")?;
        self.prompt("Enter your note: ")?;
        let Some(content) = self.read_line()? else {
            return Ok(Flow::Exit);
        };

        match self.manager.add_note(&content) {
            Ok(_) => writeln!(self.output, "✓ Note added successfully!")?,
            Err(NotesError::EmptyInput { .. }) => writeln!(self.output, "Note cannot be empty!")?,
            Err(err) => self.report("Error writing to file", err)?,
        }
        Ok(Flow::Continue)
    }

    fn view_all_notes(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== All Notes ===")?;

        match self.manager.load_notes() {
            Ok(StoreContents::Missing) => {
                writeln!(self.output, "No notes found. Create your first note!")?;
            }
            Ok(StoreContents::Lines(lines)) if lines.is_empty() => {
                writeln!(self.output, "No notes found in the file.")?;
            }
            Ok(StoreContents::Lines(lines)) => {
                for line in &lines {
                    writeln!(self.output, "{}", line)?;
                }
                writeln!(self.output, "\n📝 Total notes: {}", lines.len())?;
            }
            Err(err) => self.report("Error reading file", err)?,
        }
        Ok(Flow::Continue)
    }

    fn search_notes(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== Search Notes ===")?;
        self.prompt("Enter search keyword: ")?;
        let Some(keyword) = self.read_line()? else {
            return Ok(Flow::Exit);
        };

        match self.manager.search_notes(&keyword) {
            Err(NotesError::EmptyInput { .. }) => {
                writeln!(self.output, "Search keyword cannot be empty!")?;
            }
            Err(err) => self.report("Error searching notes", err)?,
            Ok(None) => writeln!(self.output, "No notes file found.")?,
            Ok(Some(matches)) if matches.is_empty() => {
                writeln!(self.output, "No notes found containing: {}", keyword)?;
            }
            Ok(Some(matches)) => {
                writeln!(self.output, "🔍 Found {} matching note(s):", matches.len())?;
                writeln!(self.output, "{}", separator())?;
                for line in &matches {
                    writeln!(self.output, "{}", line)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn clear_all_notes(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== Clear All Notes ===")?;
        self.prompt("Are you sure you want to delete all notes? (y/N): ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(Flow::Exit);
        };

        if !is_confirmation(&answer) {
            writeln!(self.output, "Operation cancelled.")?;
            return Ok(Flow::Continue);
        }

        match self.manager.clear_notes() {
            Ok(()) => writeln!(self.output, "✓ All notes cleared successfully!")?,
            Err(err) => self.report("Error clearing notes", err)?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, context: &str, err: NotesError) -> io::Result<()> {
        writeln!(self.errors, "❌ {}: {}", context, err)?;
        if err.is_io() {
            self.manager.log_error(&err, &mut self.errors);
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// One line without its terminator, or `None` at end of input.
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }

        Ok(Some(decode_line(&buf)))
    }
}
