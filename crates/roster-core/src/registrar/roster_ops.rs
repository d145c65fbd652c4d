//! Registration operations for the Registrar.

use super::Registrar;
use crate::{
    error::Result,
    models::{RosterEntry, StudentSelector},
    params::Enrollment,
};

impl Registrar {
    /// Enrolls a student in a class, stamping today's date.
    pub fn enroll(&self, params: &Enrollment) -> Result<()> {
        let mut db = self.database()?;
        db.enroll_student(params.student_id, params.class_id)
    }

    /// Drops a student from a class. Returns rows affected; zero means
    /// nothing was enrolled.
    pub fn withdraw(&self, params: &Enrollment) -> Result<usize> {
        self.database()?
            .withdraw_student(params.student_id, params.class_id)
    }

    /// Every registration with student and class details, ordered by last
    /// name, first name, class code.
    pub fn roster(&self) -> Result<Vec<RosterEntry>> {
        self.database()?.roster()
    }

    /// The roster restricted to one class code.
    pub fn class_roster(&self, class_code: &str) -> Result<Vec<RosterEntry>> {
        self.database()?.class_roster(class_code)
    }

    /// Every class the selected student is enrolled in, ordered by class
    /// code.
    pub fn student_schedule(&self, selector: &StudentSelector) -> Result<Vec<RosterEntry>> {
        self.database()?.student_schedule(selector)
    }
}
