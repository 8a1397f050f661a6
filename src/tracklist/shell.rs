//! The interactive menu shell.
//!
//! A thin adapter between the terminal and [`ListSession`]: it parses
//! menu choices and free text from the reader, calls into the session,
//! and turns results and error kinds into printed messages. All I/O goes
//! through the injected reader and writer, so tests drive the shell with
//! byte buffers.

use crate::error::{Result, TrackListError};
use crate::model::Section;
use crate::session::ListSession;
use crate::store::SectionStore;
use colored::Colorize;
use std::io::{BufRead, Write};

pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// With `start` the section picker is skipped. Exit and end-of-input
    /// both return cleanly after a farewell; storage problems inside the
    /// loop become messages, never early returns.
    pub fn run<S: SectionStore>(&mut self, store: &mut S, start: Option<Section>) -> Result<()> {
        let sections = store.sections().to_vec();
        if sections.is_empty() {
            return Err(TrackListError::Store("no sections configured".to_string()));
        }
        let multi = sections.len() > 1;
        let last = if multi { 6 } else { 5 };

        let section = match start {
            Some(section) => section,
            None => match self.pick_section(&sections)? {
                Some(section) => section,
                None => return self.farewell(),
            },
        };
        let mut session = self.open_session(store, section)?;

        loop {
            self.print_menu(session.section(), multi)?;
            let choice = match self.prompt(&format!("Enter your choice (1-{})", last))? {
                Some(choice) => choice,
                None => return self.farewell(),
            };

            match (choice.trim(), multi) {
                ("1", _) => self.show_records(&session)?,
                ("2", _) => self.add_item(store, &mut session)?,
                ("3", _) => self.update_item(store, &mut session)?,
                ("4", _) => self.delete_item(store, &mut session)?,
                ("5", true) => match self.pick_section(&sections)? {
                    Some(section) => session = self.open_session(store, section)?,
                    None => return self.farewell(),
                },
                ("5", false) | ("6", true) => return self.farewell(),
                _ => self.warn(&format!(
                    "Invalid choice. Please enter a number between 1 and {}.",
                    last
                ))?,
            }
        }
    }

    fn print_menu(&mut self, section: &Section, multi: bool) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- TrackList: {} ---", section)?;
        writeln!(self.output, "1. List items")?;
        writeln!(self.output, "2. Add item")?;
        writeln!(self.output, "3. Update item")?;
        writeln!(self.output, "4. Delete item")?;
        if multi {
            writeln!(self.output, "5. Switch section")?;
            writeln!(self.output, "6. Exit")?;
        } else {
            writeln!(self.output, "5. Exit")?;
        }
        Ok(())
    }

    fn show_records(&mut self, session: &ListSession) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {} ---", session.section())?;
        if session.is_empty() {
            writeln!(self.output, "{}", "The list is empty.".dimmed())?;
        } else {
            for (i, record) in session.records().iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, record)?;
            }
        }
        Ok(())
    }

    fn add_item<S: SectionStore>(
        &mut self,
        store: &mut S,
        session: &mut ListSession,
    ) -> Result<()> {
        let text = match self.prompt("Enter the new item")? {
            Some(text) => text,
            None => return Ok(()),
        };
        match session.add(store, &text) {
            Ok(record) => self.success(&format!("Added: '{}'", record)),
            Err(TrackListError::EmptyInput) => self.warn("Cannot add an empty item."),
            Err(TrackListError::InvalidRecord(reason)) => {
                self.warn(&format!("Cannot add that item: {}.", reason))
            }
            Err(e) => self.storage_error(e),
        }
    }

    fn update_item<S: SectionStore>(
        &mut self,
        store: &mut S,
        session: &mut ListSession,
    ) -> Result<()> {
        if session.is_empty() {
            return self.warn("The list is empty. Nothing to update.");
        }
        self.show_records(session)?;

        let index = match self.prompt_index("Enter the number of the item to update")? {
            Some(index) => index,
            None => return Ok(()),
        };
        let text = match self.prompt(&format!("Enter the new text for item {}", index))? {
            Some(text) => text,
            None => return Ok(()),
        };
        match session.update(store, index, &text) {
            Ok(update) => self.success(&format!("Updated '{}' to '{}'.", update.old, update.new)),
            Err(TrackListError::EmptyInput) => self.warn("Cannot update to an empty item."),
            Err(TrackListError::InvalidRecord(reason)) => {
                self.warn(&format!("Cannot use that text: {}.", reason))
            }
            Err(TrackListError::OutOfRange { .. }) => self.warn("Invalid item number."),
            Err(e) => self.storage_error(e),
        }
    }

    fn delete_item<S: SectionStore>(
        &mut self,
        store: &mut S,
        session: &mut ListSession,
    ) -> Result<()> {
        if session.is_empty() {
            return self.warn("The list is empty. Nothing to delete.");
        }
        self.show_records(session)?;

        let index = match self.prompt_index("Enter the number of the item to delete")? {
            Some(index) => index,
            None => return Ok(()),
        };
        match session.remove(store, index) {
            Ok(removed) => self.success(&format!("Deleted: '{}'", removed)),
            Err(TrackListError::OutOfRange { .. }) => self.warn("Invalid item number."),
            Err(e) => self.storage_error(e),
        }
    }

    fn pick_section(&mut self, sections: &[Section]) -> Result<Option<Section>> {
        if sections.len() == 1 {
            return Ok(sections.first().cloned());
        }
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Sections:")?;
            for (i, section) in sections.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, section)?;
            }
            let line = match self.prompt(&format!("Choose a section (1-{})", sections.len()))? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=sections.len()).contains(&n) => {
                    return Ok(Some(sections[n - 1].clone()));
                }
                _ => self.warn("Invalid choice.")?,
            }
        }
    }

    /// Load the section, recovering with an empty session and a warning
    /// when the store cannot be read.
    fn open_session<S: SectionStore>(&mut self, store: &S, section: Section) -> Result<ListSession> {
        match ListSession::load(store, section.clone()) {
            Ok(session) => Ok(session),
            Err(e) => {
                self.warn(&format!("Warning: {}. Starting with an empty list.", e))?;
                Ok(ListSession::empty(section))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a 1-based item number; `None` means end-of-input or a
    /// non-numeric answer (already reported).
    fn prompt_index(&mut self, label: &str) -> Result<Option<usize>> {
        let line = match self.prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.trim().parse::<usize>() {
            Ok(index) => Ok(Some(index)),
            Err(_) => {
                self.warn("Invalid input. Please enter a number.")?;
                Ok(None)
            }
        }
    }

    fn success(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{}", msg.green())?;
        Ok(())
    }

    fn warn(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{}", msg.yellow())?;
        Ok(())
    }

    fn storage_error(&mut self, e: TrackListError) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            format!("Error: {}. The change was not saved.", e).red()
        )?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting TrackList. Goodbye!")?;
        Ok(())
    }
}
