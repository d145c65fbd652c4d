use jiff::civil::date;
use roster_core::{
    params::{NewClass, NewStudent},
    Class, Database, RegistrarError, StudentSelector, StudentUpdate,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::open(temp_file.path()).expect("Failed to open test database");
    (temp_file, db)
}

fn sample_class() -> NewClass {
    NewClass {
        code: "CS101".to_string(),
        title: "Intro".to_string(),
        description: "d".to_string(),
        max_students: 30,
    }
}

fn sample_student() -> NewStudent {
    NewStudent {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        birth_date: date(1815, 12, 10),
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();

    // Opening applies the schema; reopening the same file must succeed too.
    assert!(temp_file.path().exists());
    Database::open(temp_file.path()).expect("Failed to reopen existing database");
}

#[test]
fn test_insert_class_assigns_sequential_ids() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_class(&sample_class()).expect("Failed to insert class");
    assert_eq!(first.id, 1);

    let second = db
        .insert_class(&NewClass {
            code: "CS208".to_string(),
            ..sample_class()
        })
        .expect("Failed to insert second class");
    assert_eq!(second.id, 2);
}

#[test]
fn test_insert_then_list_classes() {
    let (_temp_file, mut db) = create_test_db();

    let inserted = db.insert_class(&sample_class()).expect("Failed to insert class");
    assert!(inserted.id > 0);

    let classes = db.list_classes().expect("Failed to list classes");
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0], inserted);
    assert_eq!(classes[0].code, "CS101");
    assert_eq!(classes[0].title, "Intro");
    assert_eq!(classes[0].description, "d");
    assert_eq!(classes[0].max_students, 30);
}

#[test]
fn test_update_class_rewrites_fields() {
    let (_temp_file, mut db) = create_test_db();

    let inserted = db.insert_class(&sample_class()).expect("Failed to insert class");

    let updated = Class {
        title: "Intro to Computer Science".to_string(),
        max_students: 45,
        ..inserted
    };
    let rows = db.update_class(&updated).expect("Failed to update class");
    assert_eq!(rows, 1);

    let reloaded = db
        .get_class(updated.id)
        .expect("Failed to get class")
        .expect("Class should exist");
    assert_eq!(reloaded, updated);
}

#[test]
fn test_update_class_nonexistent_id_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    let inserted = db.insert_class(&sample_class()).expect("Failed to insert class");

    let phantom = Class {
        id: 42,
        code: "XX999".to_string(),
        title: "Phantom".to_string(),
        description: "none".to_string(),
        max_students: 1,
    };
    let rows = db.update_class(&phantom).expect("Update should not error");
    assert_eq!(rows, 0);

    // Existing rows are untouched.
    let classes = db.list_classes().expect("Failed to list classes");
    assert_eq!(classes, vec![inserted]);
}

#[test]
fn test_delete_class() {
    let (_temp_file, mut db) = create_test_db();

    let inserted = db.insert_class(&sample_class()).expect("Failed to insert class");

    let rows = db.delete_class(inserted.id).expect("Failed to delete class");
    assert_eq!(rows, 1);
    assert!(db.list_classes().expect("Failed to list classes").is_empty());

    // Deleting again matches nothing; non-fatal.
    let rows = db.delete_class(inserted.id).expect("Second delete should not error");
    assert_eq!(rows, 0);
}

#[test]
fn test_delete_registered_class_is_constraint_violation() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");
    let student = db.insert_student(&sample_student()).expect("Failed to insert student");
    db.enroll_student(student.id, class.id).expect("Failed to enroll");

    let err = db.delete_class(class.id).expect_err("Delete should be rejected");
    assert!(err.is_constraint_violation(), "unexpected error: {err:?}");

    // The class survives the rejected delete.
    assert_eq!(db.list_classes().expect("Failed to list classes").len(), 1);
}

#[test]
fn test_class_lookups_by_code_and_id() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");

    assert_eq!(
        db.class_id_by_code("CS101").expect("Lookup by code failed"),
        class.id
    );
    assert_eq!(
        db.class_code_by_id(class.id).expect("Lookup by id failed"),
        "CS101"
    );

    let err = db.class_id_by_code("NOPE").expect_err("Unknown code should miss");
    assert!(matches!(err, RegistrarError::ClassNotFound { .. }));

    let err = db.class_code_by_id(99).expect_err("Unknown id should miss");
    assert!(matches!(err, RegistrarError::ClassNotFound { .. }));
}

#[test]
fn test_insert_student_first_id_is_one() {
    let (_temp_file, mut db) = create_test_db();

    let student = db.insert_student(&sample_student()).expect("Failed to insert student");
    assert_eq!(student.id, 1);

    let second = db
        .insert_student(&NewStudent {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            birth_date: date(1906, 12, 9),
        })
        .expect("Failed to insert second student");
    assert_eq!(second.id, 2);
}

#[test]
fn test_birth_date_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_student(&NewStudent {
        first_name: "Era".to_string(),
        last_name: "Edge".to_string(),
        birth_date: date(1999, 12, 31),
    })
    .expect("Failed to insert student");

    let students = db.list_students().expect("Failed to list students");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].birth_date.to_string(), "1999-12-31");
}

#[test]
fn test_resolve_student_by_each_selector() {
    let (_temp_file, mut db) = create_test_db();

    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    let by_id = db
        .resolve_student(&StudentSelector::Id(student.id))
        .expect("Resolve by id failed");
    let by_name = db
        .resolve_student(&StudentSelector::Name {
            first: "Ada".to_string(),
            last: "Lovelace".to_string(),
        })
        .expect("Resolve by name failed");
    let by_birth = db
        .resolve_student(&StudentSelector::BirthDate(date(1815, 12, 10)))
        .expect("Resolve by birth date failed");

    assert_eq!(by_id, student.id);
    assert_eq!(by_name, student.id);
    assert_eq!(by_birth, student.id);
}

#[test]
fn test_resolve_student_miss_is_not_found() {
    let (_temp_file, db) = create_test_db();

    let err = db
        .resolve_student(&StudentSelector::Id(7))
        .expect_err("Empty table should miss");
    assert!(matches!(err, RegistrarError::StudentNotFound { .. }));
}

#[test]
fn test_resolve_student_ambiguous_match_is_rejected() {
    let (_temp_file, mut db) = create_test_db();

    // Two students named Ada Lovelace, different birth dates.
    db.insert_student(&sample_student()).expect("Failed to insert student");
    db.insert_student(&NewStudent {
        birth_date: date(1990, 1, 1),
        ..sample_student()
    })
    .expect("Failed to insert second student");

    let err = db
        .resolve_student(&StudentSelector::Name {
            first: "Ada".to_string(),
            last: "Lovelace".to_string(),
        })
        .expect_err("Ambiguous name should be rejected");
    assert!(
        matches!(err, RegistrarError::AmbiguousStudent { matches: 2, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_update_student_single_field() {
    let (_temp_file, mut db) = create_test_db();

    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    let rows = db
        .update_student(
            &StudentSelector::Name {
                first: "Ada".to_string(),
                last: "Lovelace".to_string(),
            },
            &StudentUpdate::FirstName("Augusta".to_string()),
        )
        .expect("Failed to update student");
    assert_eq!(rows, 1);

    let reloaded = db
        .get_student(student.id)
        .expect("Failed to get student")
        .expect("Student should exist");
    assert_eq!(reloaded.first_name, "Augusta");
    // Only the one field changed.
    assert_eq!(reloaded.last_name, "Lovelace");
    assert_eq!(reloaded.birth_date, date(1815, 12, 10));
}

#[test]
fn test_update_student_birth_date() {
    let (_temp_file, mut db) = create_test_db();

    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    db.update_student(
        &StudentSelector::Id(student.id),
        &StudentUpdate::BirthDate(date(1815, 12, 11)),
    )
    .expect("Failed to update birth date");

    let reloaded = db
        .get_student(student.id)
        .expect("Failed to get student")
        .expect("Student should exist");
    assert_eq!(reloaded.birth_date.to_string(), "1815-12-11");
}

#[test]
fn test_update_student_id_requires_unused_id() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_student(&sample_student()).expect("Failed to insert student");
    let second = db
        .insert_student(&NewStudent {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            birth_date: date(1906, 12, 9),
        })
        .expect("Failed to insert second student");

    let err = db
        .update_student(
            &StudentSelector::Id(first.id),
            &StudentUpdate::Id(second.id),
        )
        .expect_err("Taken id should be rejected");
    assert!(matches!(
        err,
        RegistrarError::DuplicateStudentId { id } if id == second.id
    ));

    // An unused id is accepted.
    let rows = db
        .update_student(&StudentSelector::Id(first.id), &StudentUpdate::Id(50))
        .expect("Unused id should be accepted");
    assert_eq!(rows, 1);
    assert!(db.get_student(50).expect("Failed to get student").is_some());
}

#[test]
fn test_delete_student_cascades_registrations() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");
    let student = db.insert_student(&sample_student()).expect("Failed to insert student");
    db.enroll_student(student.id, class.id).expect("Failed to enroll");
    assert_eq!(db.roster().expect("Failed to list roster").len(), 1);

    db.delete_student(&StudentSelector::Id(student.id))
        .expect("Failed to delete student");

    // No registration row references the student, and the student is gone.
    assert!(db.roster().expect("Failed to list roster").is_empty());
    assert!(db
        .get_student(student.id)
        .expect("Failed to get student")
        .is_none());
    // The class itself is untouched.
    assert_eq!(db.list_classes().expect("Failed to list classes").len(), 1);
}

#[test]
fn test_delete_missing_student_reports_not_found() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .delete_student(&StudentSelector::BirthDate(date(2000, 1, 1)))
        .expect_err("Missing student should be reported");
    assert!(matches!(err, RegistrarError::StudentNotFound { .. }));
}

#[test]
fn test_enroll_in_nonexistent_class_reports_not_found() {
    let (_temp_file, mut db) = create_test_db();

    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    let err = db
        .enroll_student(student.id, 99)
        .expect_err("Unknown class should be rejected");
    assert!(matches!(err, RegistrarError::ClassNotFound { .. }));

    // No registration row was created.
    assert!(db.roster().expect("Failed to list roster").is_empty());
}

#[test]
fn test_enroll_nonexistent_student_reports_not_found() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");

    let err = db
        .enroll_student(99, class.id)
        .expect_err("Unknown student should be rejected");
    assert!(matches!(err, RegistrarError::StudentNotFound { .. }));
    assert!(db.roster().expect("Failed to list roster").is_empty());
}

#[test]
fn test_duplicate_enrollment_is_constraint_violation() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");
    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    db.enroll_student(student.id, class.id).expect("Failed to enroll");
    let err = db
        .enroll_student(student.id, class.id)
        .expect_err("Duplicate enrollment should be rejected");
    assert!(err.is_constraint_violation(), "unexpected error: {err:?}");
    assert_eq!(db.roster().expect("Failed to list roster").len(), 1);
}

#[test]
fn test_withdraw_nonexistent_registration_is_zero_rows() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");
    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    let rows = db
        .withdraw_student(student.id, class.id)
        .expect("Withdraw should not error");
    assert_eq!(rows, 0);
}

#[test]
fn test_withdraw_removes_only_the_matching_registration() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_class(&sample_class()).expect("Failed to insert class");
    let second = db
        .insert_class(&NewClass {
            code: "CS208".to_string(),
            ..sample_class()
        })
        .expect("Failed to insert second class");
    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    db.enroll_student(student.id, first.id).expect("Failed to enroll");
    db.enroll_student(student.id, second.id).expect("Failed to enroll");

    let rows = db
        .withdraw_student(student.id, first.id)
        .expect("Failed to withdraw");
    assert_eq!(rows, 1);

    let remaining = db.roster().expect("Failed to list roster");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].class_code, "CS208");
}

#[test]
fn test_roster_is_ordered_by_name_then_code() {
    let (_temp_file, mut db) = create_test_db();

    let class_b = db
        .insert_class(&NewClass {
            code: "MA201".to_string(),
            title: "Calculus".to_string(),
            description: "limits".to_string(),
            max_students: 40,
        })
        .expect("Failed to insert class");
    let class_a = db.insert_class(&sample_class()).expect("Failed to insert class");

    let turing = db
        .insert_student(&NewStudent {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            birth_date: date(1912, 6, 23),
        })
        .expect("Failed to insert student");
    let hopper = db
        .insert_student(&NewStudent {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            birth_date: date(1906, 12, 9),
        })
        .expect("Failed to insert student");

    db.enroll_student(turing.id, class_b.id).expect("Failed to enroll");
    db.enroll_student(hopper.id, class_b.id).expect("Failed to enroll");
    db.enroll_student(hopper.id, class_a.id).expect("Failed to enroll");

    let roster = db.roster().expect("Failed to list roster");
    let summary: Vec<(&str, &str)> = roster
        .iter()
        .map(|entry| (entry.student_name.as_str(), entry.class_code.as_str()))
        .collect();

    // Hopper before Turing; Hopper's classes ordered by code.
    assert_eq!(
        summary,
        vec![
            ("Grace Hopper", "CS101"),
            ("Grace Hopper", "MA201"),
            ("Alan Turing", "MA201"),
        ]
    );
}

#[test]
fn test_class_roster_filters_by_code() {
    let (_temp_file, mut db) = create_test_db();

    let class = db.insert_class(&sample_class()).expect("Failed to insert class");
    let other = db
        .insert_class(&NewClass {
            code: "CS208".to_string(),
            ..sample_class()
        })
        .expect("Failed to insert second class");

    let student = db.insert_student(&sample_student()).expect("Failed to insert student");
    db.enroll_student(student.id, class.id).expect("Failed to enroll");
    db.enroll_student(student.id, other.id).expect("Failed to enroll");

    let entries = db.class_roster("CS101").expect("Failed to list class roster");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].class_code, "CS101");
    assert_eq!(entries[0].student_name, "Ada Lovelace");

    // An unknown code simply matches nothing.
    assert!(db.class_roster("NOPE").expect("Listing should not error").is_empty());
}

#[test]
fn test_student_schedule_resolves_selector() {
    let (_temp_file, mut db) = create_test_db();

    let class_b = db
        .insert_class(&NewClass {
            code: "MA201".to_string(),
            ..sample_class()
        })
        .expect("Failed to insert class");
    let class_a = db.insert_class(&sample_class()).expect("Failed to insert class");
    let student = db.insert_student(&sample_student()).expect("Failed to insert student");

    db.enroll_student(student.id, class_b.id).expect("Failed to enroll");
    db.enroll_student(student.id, class_a.id).expect("Failed to enroll");

    let schedule = db
        .student_schedule(&StudentSelector::Name {
            first: "Ada".to_string(),
            last: "Lovelace".to_string(),
        })
        .expect("Failed to list schedule");

    let codes: Vec<&str> = schedule.iter().map(|e| e.class_code.as_str()).collect();
    assert_eq!(codes, vec!["CS101", "MA201"]);

    let err = db
        .student_schedule(&StudentSelector::Id(99))
        .expect_err("Unknown student should be reported");
    assert!(matches!(err, RegistrarError::StudentNotFound { .. }));
}
