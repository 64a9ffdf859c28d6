// Main menu loop
//
// Reads one choice per iteration and dispatches it. Recoverable errors are
// printed and the loop keeps going. Only choice 5 stops it cleanly.

use crate::console::{render_table, Console};
use crate::core::registrar::{is_affirmative, DeleteOutcome, Registrar};
use crate::error::{RosterError, Result};
use std::str::FromStr;

const MENU_LINES: &[&str] = &[
    "",
    "*** Student Management System Menu ***",
    "1. Add New Student",
    "2. View All Students",
    "3. Search for a Student",
    "4. Delete a Student",
    "5. Exit Program",
    "--------------------------------------",
];

const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::View),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            other => Err(RosterError::InvalidChoice(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

pub struct Menu<C> {
    registrar: Registrar,
    console: C,
    state: MenuState,
}

impl<C: Console> Menu<C> {
    pub fn new(registrar: Registrar, console: C) -> Self {
        Self {
            registrar,
            console,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Loop until the user picks exit. Fatal errors end the loop early.
    pub fn run(&mut self) -> Result<()> {
        while self.state == MenuState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// One iteration: show the menu, read a choice, handle it
    pub fn step(&mut self) -> Result<MenuState> {
        for line in MENU_LINES {
            self.console.write_line(line)?;
        }

        let raw = self.console.read_line(CHOICE_PROMPT)?;
        let outcome = raw
            .parse::<MenuChoice>()
            .and_then(|choice| self.dispatch(choice));

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                log::debug!("Recovered from: {}", e);
                self.console.write_line(&format!("[Error] {}", e.user_message()))?;
            }
            Err(e) => return Err(e),
        }

        Ok(self.state)
    }

    pub fn into_parts(self) -> (Registrar, C) {
        (self.registrar, self.console)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.add_student(),
            MenuChoice::View => self.view_students(),
            MenuChoice::Search => self.search_student(),
            MenuChoice::Delete => self.delete_student(),
            MenuChoice::Exit => {
                self.console.write_line("Exiting program. Goodbye!")?;
                self.state = MenuState::Terminated;
                Ok(())
            }
        }
    }

    // All three prompts come first, then the registrar validates.
    fn add_student(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("--- Add New Student ---")?;

        let id = self.console.read_line("Enter Student ID (e.g., 001): ")?;
        let name = self.console.read_line("Enter Name: ")?;
        let grade = self.console.read_line("Enter Grade/Level: ")?;

        self.registrar.add(&id, &name, &grade)?;

        self.console.write_line("Data saved successfully.")?;
        self.console
            .write_line(&format!("[Success] Student ID {} added.", id.trim()))
    }

    fn view_students(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("--- All Student Records ---")?;

        let roster = self.registrar.view();
        if roster.is_empty() {
            return self.console.write_line("No student records found.");
        }

        for line in render_table(roster) {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    fn search_student(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("--- Search Student ---")?;

        let id = self.console.read_line("Enter Student ID to search: ")?;
        let id = id.trim();

        match self.registrar.search(id) {
            Ok(student) => {
                let lines = [
                    String::new(),
                    "Student Found:".to_string(),
                    format!("ID:    {}", id),
                    format!("Name:  {}", student.name),
                    format!("Grade: {}", student.grade),
                ];
                for line in &lines {
                    self.console.write_line(line)?;
                }
                Ok(())
            }
            // A miss on search is informational, not an error
            Err(e @ RosterError::NotFound(_)) => self
                .console
                .write_line(&format!("[Info] {}", e.user_message())),
            Err(e) => Err(e),
        }
    }

    fn delete_student(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.write_line("--- Delete Student ---")?;

        let id = self.console.read_line("Enter Student ID to delete: ")?;
        let id = id.trim();

        let console = &mut self.console;
        let outcome = self.registrar.delete(id, |id| {
            let answer = console.read_line(&format!(
                "Are you sure you want to delete student {}? (y/n): ",
                id
            ))?;
            Ok(is_affirmative(&answer))
        })?;

        match outcome {
            DeleteOutcome::Deleted => {
                self.console.write_line("Data saved successfully.")?;
                self.console
                    .write_line(&format!("[Success] Student ID {} deleted.", id))
            }
            DeleteOutcome::Cancelled => self.console.write_line("[Info] Deletion cancelled."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::LineConsole;
    use crate::store::{RosterFile, Student};
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestConsole = LineConsole<Cursor<Vec<u8>>, Vec<u8>>;

    fn menu(temp: &TempDir, script: &str) -> Menu<TestConsole> {
        let file = RosterFile::new(temp.path().join("students.json"));
        let (registrar, _) = Registrar::open(file).unwrap();
        let console = LineConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        Menu::new(registrar, console)
    }

    fn finish(menu: Menu<TestConsole>) -> (Registrar, String) {
        let (registrar, console) = menu.into_parts();
        let output = String::from_utf8(console.into_output()).unwrap();
        (registrar, output)
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Add);
        assert_eq!(" 5 ".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!(matches!(
            "6".parse::<MenuChoice>(),
            Err(RosterError::InvalidChoice(_))
        ));
        assert!("add".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_exit_terminates() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "5\n");

        menu.run().unwrap();
        assert_eq!(menu.state(), MenuState::Terminated);

        let (_, output) = finish(menu);
        assert!(output.contains("*** Student Management System Menu ***"));
        assert!(output.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice_keeps_running() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "9\n");

        assert_eq!(menu.step().unwrap(), MenuState::Running);

        let (_, output) = finish(menu);
        assert!(output.contains("[Error] Invalid choice. Please enter a number between 1 and 5."));
    }

    #[test]
    fn test_end_of_input_is_not_termination() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "2\n");

        let result = menu.run();
        assert!(matches!(result, Err(RosterError::Io(_))));
        assert_eq!(menu.state(), MenuState::Running);
    }

    #[test]
    fn test_full_session() {
        let temp = TempDir::new().unwrap();
        let script = "1\n001\nAlice\n5\n2\n3\n002\n4\n001\ny\n2\n5\n";
        let mut menu = menu(&temp, script);

        menu.run().unwrap();
        let (registrar, output) = finish(menu);

        assert!(output.contains("[Success] Student ID 001 added."));
        let row = output
            .lines()
            .find(|line| line.starts_with("001 "))
            .expect("table row for 001");
        assert_eq!(row.trim_end(), "001        | Alice                | 5");
        assert!(output.contains("[Info] Student with ID 002 not found."));
        assert!(output.contains("[Success] Student ID 001 deleted."));
        assert!(output.contains("No student records found."));
        assert_eq!(output.matches("Data saved successfully.").count(), 2);

        assert!(registrar.store().is_empty());
        assert!(registrar.file().load().unwrap().roster.is_empty());
    }

    #[test]
    fn test_duplicate_add_session() {
        let temp = TempDir::new().unwrap();
        let script = "1\n001\nAlice\n5\n1\n001\nAlicia\n6\n5\n";
        let mut menu = menu(&temp, script);

        menu.run().unwrap();
        let (registrar, output) = finish(menu);

        assert!(output.contains("[Error] A student with ID 001 already exists."));
        // Name and grade were still asked for the second time
        assert_eq!(output.matches("Enter Grade/Level: ").count(), 2);
        assert_eq!(registrar.store().len(), 1);
        assert_eq!(
            registrar.search("001").unwrap(),
            &Student::new("Alice", "5")
        );
    }

    #[test]
    fn test_empty_field_rejected() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "1\n001\n   \n5\n5\n");

        menu.run().unwrap();
        let (registrar, output) = finish(menu);

        assert!(output.contains("[Error] ID, Name, and Grade cannot be empty."));
        assert!(registrar.store().is_empty());
        assert!(!registrar.file().path().exists());
    }

    #[test]
    fn test_delete_cancelled_session() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "1\n001\nAlice\n5\n4\n001\nn\n5\n");

        menu.run().unwrap();
        let (registrar, output) = finish(menu);

        assert!(output.contains("Are you sure you want to delete student 001? (y/n): "));
        assert!(output.contains("[Info] Deletion cancelled."));
        assert!(registrar.search("001").is_ok());
        assert!(registrar.file().load().unwrap().roster.contains_key("001"));
    }

    #[test]
    fn test_delete_missing_skips_confirmation() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "4\n404\n5\n");

        menu.run().unwrap();
        let (_, output) = finish(menu);

        assert!(output.contains("[Error] Student with ID 404 not found."));
        assert!(!output.contains("(y/n)"));
    }

    #[test]
    fn test_search_found() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "1\nA7\nGrace Hopper\nYear 3\n3\nA7\n5\n");

        menu.run().unwrap();
        let (_, output) = finish(menu);

        assert!(output.contains("Student Found:"));
        assert!(output.contains("ID:    A7\n"));
        assert!(output.contains("Name:  Grace Hopper\n"));
        assert!(output.contains("Grade: Year 3\n"));
    }

    #[test]
    fn test_view_empty_has_no_header() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, "2\n5\n");

        menu.run().unwrap();
        let (_, output) = finish(menu);

        assert!(output.contains("No student records found."));
        assert!(!output.contains("| Name"));
    }
}
