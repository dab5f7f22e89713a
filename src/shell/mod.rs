//! Interactive menu loop over a student store.
//!
//! Recoverable conditions (bad roll number, name not found, empty table,
//! unrecognized choice) are reported to the user and the loop continues;
//! store and rendering failures propagate to the caller.

mod error;

pub use error::{ShellError, ShellResult};

use log::debug;
use prettytable::{Table, row};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;

use crate::analysis::{counts_by_class, counts_by_section, modal_grade_per_class};
use crate::chart::{
    CLASS_CHART_FILE, SECTION_CHART_FILE, render_class_bar_chart, render_section_pie_chart,
};
use crate::record::{HEADERS, Student, StudentPatch, parse_roll_no};
use crate::store::StudentStore;

pub struct Shell {
    store: StudentStore,
    editor: DefaultEditor,
}

impl Shell {
    pub fn new(store: StudentStore) -> ShellResult<Self> {
        Ok(Self {
            store,
            editor: DefaultEditor::new()?,
        })
    }

    /// Run the menu loop until the user chooses exit or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        loop {
            print_menu();
            let choice = match self.editor.readline("Enter your choice: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            };

            match choice.trim() {
                "1" => self.add_student()?,
                "2" => self.view_students(),
                "3" => self.update_student()?,
                "4" => self.delete_student()?,
                "5" => self.analyze_data(),
                "6" => self.visualize_data()?,
                "7" => {
                    println!("Exiting School Management System. Goodbye!");
                    break;
                }
                other => {
                    debug!("unrecognized menu choice {:?}", other);
                    println!("Invalid choice! Please try again.");
                }
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> ShellResult<String> {
        Ok(self.editor.readline(text)?)
    }

    fn add_student(&mut self) -> ShellResult<()> {
        println!("\n=== Add New Student ===");
        let name = self.prompt("Enter Student Name: ")?;
        let class = self.prompt("Enter Class: ")?;
        let section = self.prompt("Enter Section: ")?;

        let roll_input = self.prompt("Enter Roll No: ")?;
        let roll_no = match parse_roll_no(&roll_input) {
            Ok(roll_no) => roll_no,
            Err(err) => {
                debug!("rejected add: {}", err);
                println!("Invalid Roll No! Roll No must be an integer.");
                return Ok(());
            }
        };

        let grade = self.prompt("Enter Grade (e.g., A+, A, B+, etc.): ")?;
        self.store
            .add(Student::new(name.clone(), class, section, roll_no, grade))?;
        println!("Student '{}' added successfully!", name);
        Ok(())
    }

    fn view_students(&self) {
        println!("\n=== View All Students ===");
        if self.store.is_empty() {
            println!("No students found in the system.");
            return;
        }

        let mut table = Table::new();
        table.set_titles(row![
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4]
        ]);
        for student in self.store.rows() {
            table.add_row(row![
                student.name,
                student.class,
                student.section,
                student.roll_no,
                student.grade
            ]);
        }
        table.printstd();
    }

    fn update_student(&mut self) -> ShellResult<()> {
        println!("\n=== Update Student Details ===");
        let name = self.prompt("Enter Student Name to Update: ")?;
        let (idx, current) = match self.store.find_by_name(&name) {
            Some(idx) => (idx, self.store.rows()[idx].clone()),
            None => {
                println!("Student '{}' not found!", name);
                return Ok(());
            }
        };

        println!("Enter new details (leave blank to keep current value):");
        let class_input = self.prompt(&format!("New Class (Current: {}): ", current.class))?;
        let section_input =
            self.prompt(&format!("New Section (Current: {}): ", current.section))?;

        // Parse-or-abort before any field is applied, so a failed update
        // leaves the row untouched.
        let roll_input = self.prompt(&format!("New Roll No (Current: {}): ", current.roll_no))?;
        let roll_no = if roll_input.is_empty() {
            current.roll_no
        } else {
            match parse_roll_no(&roll_input) {
                Ok(roll_no) => roll_no,
                Err(err) => {
                    debug!("rejected update: {}", err);
                    println!("Invalid Roll No!");
                    return Ok(());
                }
            }
        };

        let grade_input = self.prompt(&format!("New Grade (Current: {}): ", current.grade))?;

        let patch = StudentPatch {
            class: non_blank(class_input),
            section: non_blank(section_input),
            roll_no,
            grade: non_blank(grade_input),
        };
        self.store.update(idx, &patch)?;
        println!("Student '{}' updated successfully!", name);
        Ok(())
    }

    fn delete_student(&mut self) -> ShellResult<()> {
        println!("\n=== Delete Student ===");
        let name = self.prompt("Enter Student Name to Delete: ")?;
        match self.store.find_by_name(&name) {
            Some(idx) => {
                self.store.remove(idx)?;
                println!("Student '{}' deleted successfully!", name);
            }
            None => println!("Student '{}' not found!", name),
        }
        Ok(())
    }

    fn analyze_data(&self) {
        println!("\n=== Analyze Data ===");
        if self.store.is_empty() {
            println!("No data available for analysis.");
            return;
        }

        println!("\n=== Most Frequent Grade per Class ===");
        for (class, grade) in modal_grade_per_class(self.store.rows()) {
            println!("{:<12} {}", class, grade);
        }
    }

    fn visualize_data(&self) -> ShellResult<()> {
        println!("\n=== Visualize Data ===");
        if self.store.is_empty() {
            println!("No data available for visualization.");
            return Ok(());
        }

        let class_counts = counts_by_class(self.store.rows());
        render_class_bar_chart(&class_counts, Path::new(CLASS_CHART_FILE))?;
        println!("Saved {}", CLASS_CHART_FILE);
        print_count_table("Class", &class_counts);

        let section_counts = counts_by_section(self.store.rows());
        render_section_pie_chart(&section_counts, Path::new(SECTION_CHART_FILE))?;
        println!("Saved {}", SECTION_CHART_FILE);
        print_count_table("Section", &section_counts);

        Ok(())
    }
}

fn print_menu() {
    println!("\n=== School Management System ===");
    println!("1. Add Student");
    println!("2. View Students");
    println!("3. Update Student");
    println!("4. Delete Student");
    println!("5. Analyze Data");
    println!("6. Visualize Data");
    println!("7. Exit");
}

fn print_count_table(label: &str, counts: &[(String, usize)]) {
    let mut table = Table::new();
    table.set_titles(row![label, "Number of Students"]);
    for (key, count) in counts {
        table.add_row(row![key, count]);
    }
    table.printstd();
}

fn non_blank(input: String) -> Option<String> {
    if input.is_empty() { None } else { Some(input) }
}
