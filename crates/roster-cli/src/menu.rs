//! The interactive menu controller.
//!
//! Translates numbered menu choices into registrar operations and prints
//! the results. Warnings carry the `!!!` prefix; operation failures are
//! reported and the session returns to the menu rather than exiting. Only
//! the initial connection failure in `main` terminates the process with a
//! non-zero status.

use std::io::{self, BufRead};

use log::debug;
use roster_core::{
    params::{Enrollment, NewClass, NewStudent},
    Class, ClassTable, OperationStatus, Registrar, RosterTable, Student, StudentSelector,
    StudentTable, StudentUpdate,
};

use crate::prompt::Prompter;

pub struct Menu<R> {
    registrar: Registrar,
    prompter: Prompter<R>,
}

impl<R: BufRead> Menu<R> {
    pub fn new(registrar: Registrar, prompter: Prompter<R>) -> Self {
        Self {
            registrar,
            prompter,
        }
    }

    /// Runs the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        print_menu();
        loop {
            let Some(line) = self.prompter.line("Enter your choice: ")? else {
                return Ok(());
            };
            let choice: i64 = match line.parse() {
                Ok(value) => value,
                Err(_) => {
                    println!(
                        "Invalid choice, expected an integer value. \
                         Please enter a number such as 0, 1, 2, 10, 11, etc."
                    );
                    continue;
                }
            };
            debug!("menu choice: {choice}");

            match choice {
                0 => self.test_connection()?,
                1 => {
                    println!("Reprinting the menu options...");
                    print_menu();
                }
                2 => {
                    println!("Exiting the program...");
                    return Ok(());
                }
                10 => self.list_classes()?,
                11 => {
                    self.add_class()?;
                }
                12 => self.update_class()?,
                13 => self.delete_class()?,
                20 => self.list_students()?,
                21 => {
                    self.add_student()?;
                }
                22 => self.update_student()?,
                23 => self.delete_student()?,
                30 => self.list_roster()?,
                31 => self.enroll_student()?,
                32 => self.withdraw_student()?,
                33 => self.class_roster()?,
                34 => self.student_schedule()?,
                _ => println!(
                    "Invalid choice. Please enter a number such as 0, 1, 2, 10, 11, etc."
                ),
            }
        }
    }

    fn test_connection(&mut self) -> io::Result<()> {
        println!("Testing database connection...");
        match self.registrar.test_connection() {
            Ok(version) => {
                println!("Connection to database successful!");
                println!("SQLite version: {version}");
            }
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn list_classes(&mut self) -> io::Result<()> {
        println!("Listing all classes...");
        match self.registrar.list_classes() {
            Ok(classes) => print!("{}", ClassTable(&classes)),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    /// Prompts for and inserts a new class. Returns the created class so
    /// the enrollment flow can chain on it.
    fn add_class(&mut self) -> io::Result<Option<Class>> {
        println!("Adding new class...");
        let Some(code) = self.prompter.line("Enter the class code: ")? else {
            return Ok(None);
        };
        let Some(title) = self.prompter.line("Enter the class title: ")? else {
            return Ok(None);
        };
        let Some(description) = self.prompter.line("Enter the class description: ")? else {
            return Ok(None);
        };
        let Some(max_students) = self.prompter.count("Enter the class max students: ")? else {
            return Ok(None);
        };

        let params = NewClass {
            code,
            title,
            description,
            max_students,
        };
        match self.registrar.create_class(&params) {
            Ok(class) => {
                println!(
                    "{}",
                    OperationStatus::success(format!("Inserted a new class with id = {}", class.id))
                );
                Ok(Some(class))
            }
            Err(e) => {
                println!("!!! {e}");
                Ok(None)
            }
        }
    }

    fn update_class(&mut self) -> io::Result<()> {
        println!("Updating existing class information...");
        let Some(id) = self
            .prompter
            .integer("Enter the existing class id you want to update: ")?
        else {
            return Ok(());
        };

        let old = match self.registrar.get_class(id) {
            Ok(Some(class)) => class,
            Ok(None) => {
                println!(
                    "{}",
                    OperationStatus::warning(format!("no class with id = {id}"))
                );
                return Ok(());
            }
            Err(e) => {
                println!("!!! {e}");
                return Ok(());
            }
        };

        // Blank input keeps the current value.
        let Some(code) = self.line_or_keep("Enter a new class code", &old.code)? else {
            return Ok(());
        };
        let Some(title) = self.line_or_keep("Enter a new class title", &old.title)? else {
            return Ok(());
        };
        let Some(description) =
            self.line_or_keep("Enter a new class description", &old.description)?
        else {
            return Ok(());
        };
        let Some(line) = self.prompter.line(&format!(
            "Enter a new class max students (blank keeps {}): ",
            old.max_students
        ))?
        else {
            return Ok(());
        };
        let max_students = if line.is_empty() {
            old.max_students
        } else {
            match line.parse() {
                Ok(value) => value,
                Err(_) => {
                    println!("Invalid input, expected a non-negative integer value.");
                    return Ok(());
                }
            }
        };

        let update = Class {
            id,
            code,
            title,
            description,
            max_students,
        };
        match self.registrar.update_class(&update) {
            Ok(0) => println!(
                "{}",
                OperationStatus::warning(format!("failed to update the class with id = {id}"))
            ),
            Ok(_) => println!(
                "{}",
                OperationStatus::success(format!("Updated the class with id = {id}"))
            ),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn delete_class(&mut self) -> io::Result<()> {
        println!("Deleting existing class...");
        let Some(id) = self
            .prompter
            .integer("Enter the existing class id you want to delete: ")?
        else {
            return Ok(());
        };

        match self.registrar.delete_class(id) {
            Ok(0) => println!(
                "{}",
                OperationStatus::warning(format!("failed to delete the class with id = {id}"))
            ),
            Ok(_) => println!(
                "{}",
                OperationStatus::success(format!("Deleted the class with id = {id}"))
            ),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn list_students(&mut self) -> io::Result<()> {
        println!("Listing all students...");
        match self.registrar.list_students() {
            Ok(students) => print!("{}", StudentTable(&students)),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    /// Prompts for and inserts a new student. Returns the created student
    /// so the enrollment flow can chain on it.
    fn add_student(&mut self) -> io::Result<Option<Student>> {
        println!("Adding new student...");
        let Some(first_name) = self.prompter.line("Enter the student's first name: ")? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompter.line("Enter the student's last name: ")? else {
            return Ok(None);
        };
        let Some(birth_date) = self
            .prompter
            .date("Enter the student's birth date (YYYY-MM-DD): ")?
        else {
            return Ok(None);
        };

        let params = NewStudent {
            first_name,
            last_name,
            birth_date,
        };
        match self.registrar.create_student(&params) {
            Ok(student) => {
                println!(
                    "{}",
                    OperationStatus::success(format!(
                        "Inserted a new student with id = {}",
                        student.id
                    ))
                );
                Ok(Some(student))
            }
            Err(e) => {
                println!("!!! {e}");
                Ok(None)
            }
        }
    }

    fn update_student(&mut self) -> io::Result<()> {
        println!("Updating existing student information...");
        let Some(selector) = self.select_student(false)? else {
            return Ok(());
        };
        let id = match self.registrar.resolve_student(&selector) {
            Ok(id) => id,
            Err(e) => {
                println!("!!! {e}");
                return Ok(());
            }
        };
        match self.registrar.get_student(id) {
            Ok(Some(student)) => println!("Found student {} (id {}).", student.full_name(), id),
            Ok(None) => {}
            Err(e) => {
                println!("!!! {e}");
                return Ok(());
            }
        }

        println!("What would you like to change?");
        println!(" 0 - Student id (must be unique)");
        println!(" 1 - First name");
        println!(" 2 - Last name");
        println!(" 3 - Date of birth");
        let Some(choice) = self.prompter.integer("Enter your choice: ")? else {
            return Ok(());
        };

        let update = match choice {
            0 => self
                .prompter
                .integer("Enter a new, unused student id: ")?
                .map(StudentUpdate::Id),
            1 => self
                .prompter
                .line("Enter the student's new first name: ")?
                .map(StudentUpdate::FirstName),
            2 => self
                .prompter
                .line("Enter the student's new last name: ")?
                .map(StudentUpdate::LastName),
            3 => self
                .prompter
                .date("Enter the student's new date of birth (YYYY-MM-DD): ")?
                .map(StudentUpdate::BirthDate),
            _ => {
                println!("Invalid choice, please try again.");
                return Ok(());
            }
        };
        let Some(update) = update else {
            return Ok(());
        };

        match self
            .registrar
            .update_student(&StudentSelector::Id(id), &update)
        {
            Ok(0) => println!(
                "{}",
                OperationStatus::warning(format!("failed to update the student with id = {id}"))
            ),
            Ok(_) => println!(
                "{}",
                OperationStatus::success(format!("Updated the student with id = {id}"))
            ),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn delete_student(&mut self) -> io::Result<()> {
        println!("Deleting existing student...");
        let Some(selector) = self.select_student(false)? else {
            return Ok(());
        };

        match self.registrar.delete_student(&selector) {
            Ok(()) => println!(
                "{}",
                OperationStatus::success(
                    "Deleted the student and their registrations".to_string()
                )
            ),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn list_roster(&mut self) -> io::Result<()> {
        println!("Listing all registered students...");
        match self.registrar.roster() {
            Ok(entries) => print!("{}", RosterTable(&entries)),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn enroll_student(&mut self) -> io::Result<()> {
        println!("Adding a student to a class...");
        let Some(class_id) = self.select_class(true)? else {
            return Ok(());
        };
        let Some(selector) = self.select_student(true)? else {
            return Ok(());
        };
        let student_id = match self.registrar.resolve_student(&selector) {
            Ok(id) => id,
            Err(e) => {
                println!("!!! {e}");
                return Ok(());
            }
        };

        match self.registrar.enroll(&Enrollment {
            student_id,
            class_id,
        }) {
            Ok(()) => println!(
                "{}",
                OperationStatus::success(format!(
                    "Student {student_id} added to class {class_id}!"
                ))
            ),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn withdraw_student(&mut self) -> io::Result<()> {
        println!("Dropping a student from a class...");
        let Some(class_id) = self.select_class(false)? else {
            return Ok(());
        };
        let Some(selector) = self.select_student(false)? else {
            return Ok(());
        };
        let student_id = match self.registrar.resolve_student(&selector) {
            Ok(id) => id,
            Err(e) => {
                println!("!!! {e}");
                return Ok(());
            }
        };

        match self.registrar.withdraw(&Enrollment {
            student_id,
            class_id,
        }) {
            Ok(0) => println!(
                "{}",
                OperationStatus::warning(format!(
                    "student {student_id} was not enrolled in class {class_id}"
                ))
            ),
            Ok(_) => println!(
                "{}",
                OperationStatus::success(format!(
                    "Student {student_id} dropped from class {class_id}"
                ))
            ),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn class_roster(&mut self) -> io::Result<()> {
        let Some(class_id) = self.select_class(false)? else {
            return Ok(());
        };
        let code = match self.registrar.class_code_by_id(class_id) {
            Ok(code) => code,
            Err(e) => {
                println!("!!! {e}");
                return Ok(());
            }
        };

        println!("Listing all students in class {code}...");
        match self.registrar.class_roster(&code) {
            Ok(entries) => print!("{}", RosterTable(&entries)),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    fn student_schedule(&mut self) -> io::Result<()> {
        let Some(selector) = self.select_student(false)? else {
            return Ok(());
        };

        println!("Listing all classes for {selector}...");
        match self.registrar.student_schedule(&selector) {
            Ok(entries) => print!("{}", RosterTable(&entries)),
            Err(e) => println!("!!! {e}"),
        }
        Ok(())
    }

    /// Sub-menu selecting a class, returning its primary key. A code entry
    /// is resolved through the registrar; a miss is reported and the
    /// operation aborts so the caller returns to the menu.
    fn select_class(&mut self, allow_create: bool) -> io::Result<Option<i64>> {
        println!("How would you like to search for the class?");
        println!(" 0 - Class id");
        println!(" 1 - Class code");
        if allow_create {
            println!(" 2 - Create a new class first");
        }
        let Some(choice) = self.prompter.integer("Enter your choice: ")? else {
            return Ok(None);
        };

        match choice {
            0 => self.prompter.integer("Enter the class id: "),
            1 => {
                let Some(code) = self.prompter.line("Enter the class code: ")? else {
                    return Ok(None);
                };
                match self.registrar.class_id_by_code(&code) {
                    Ok(id) => Ok(Some(id)),
                    Err(e) => {
                        println!("!!! {e}");
                        Ok(None)
                    }
                }
            }
            2 if allow_create => Ok(self.add_class()?.map(|class| class.id)),
            _ => {
                println!("Invalid choice, please try again.");
                Ok(None)
            }
        }
    }

    /// Sub-menu selecting a student by id, name, or birth date. With
    /// `allow_create`, offers the enrollment shortcut of adding the student
    /// on the spot.
    fn select_student(&mut self, allow_create: bool) -> io::Result<Option<StudentSelector>> {
        println!("How would you like to search for the student?");
        println!(" 0 - Student id");
        println!(" 1 - First and last name");
        println!(" 2 - Date of birth");
        if allow_create {
            println!(" 3 - Add a new student first");
        }
        let Some(choice) = self.prompter.integer("Enter your choice: ")? else {
            return Ok(None);
        };

        match choice {
            0 => Ok(self
                .prompter
                .integer("Enter the student id: ")?
                .map(StudentSelector::Id)),
            1 => {
                let Some(line) = self
                    .prompter
                    .line("Enter the student's first and last name separated by a space: ")?
                else {
                    return Ok(None);
                };
                match parse_full_name(&line) {
                    Some((first, last)) => Ok(Some(StudentSelector::Name { first, last })),
                    None => {
                        println!("Invalid input, expected two names separated by a space.");
                        Ok(None)
                    }
                }
            }
            2 => Ok(self
                .prompter
                .date("Enter the student's date of birth (YYYY-MM-DD): ")?
                .map(StudentSelector::BirthDate)),
            3 if allow_create => Ok(self
                .add_student()?
                .map(|student| StudentSelector::Id(student.id))),
            _ => {
                println!("Invalid choice, please try again.");
                Ok(None)
            }
        }
    }

    /// Reads one line; blank input keeps the current value.
    fn line_or_keep(&mut self, prompt: &str, current: &str) -> io::Result<Option<String>> {
        let Some(line) = self
            .prompter
            .line(&format!("{prompt} (blank keeps '{current}'): "))?
        else {
            return Ok(None);
        };
        if line.is_empty() {
            Ok(Some(current.to_string()))
        } else {
            Ok(Some(line))
        }
    }
}

fn parse_full_name(line: &str) -> Option<(String, String)> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?.to_string();
    let last = parts.next()?.to_string();
    parts.next().is_none().then_some((first, last))
}

fn print_menu() {
    println!();
    println!("{0} School Roster Manager {0}", "=".repeat(28));
    println!("{0} MENU {0}", "-".repeat(36));
    println!(" 0 - Test the database connection");
    println!(" 1 - Print this menu");
    println!(" 2 - Exit the program");
    println!("10 - List all classes");
    println!("11 - Add a new class");
    println!("12 - Update existing class information");
    println!("13 - Delete an existing class");
    println!("20 - List all students");
    println!("21 - Add a new student");
    println!("22 - Update existing student information");
    println!("23 - Delete an existing student");
    println!("30 - List all registered students");
    println!("31 - Add a student to a class");
    println!("32 - Drop a student from a class");
    println!("33 - Show all students taking a class");
    println!("34 - Show all classes a student is enrolled in");
}
