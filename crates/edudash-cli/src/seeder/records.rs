//! Dashboard record generation.
//!
//! Builds a [`Dataset`] that matches the seeded users: every student gets a
//! progress summary, grades and goals, every class a roster and grade book,
//! and every class teacher a set of assignments.

use chrono::{Duration, Utc};
use edudash_models::{
    Assignment, AssignmentId, AssignmentKind, CalendarEvent, ClassGradeRow, ClassGrades, ClassId,
    ClassRoster, ClassStudent, EventKind, GradeEntry, Goal, ProgressPoint, RecordKey, StudentData,
    StudentGradeRecord, TeacherData, Trend, User,
};
use edudash_store::Dataset;
use fake::Fake;
use fake::faker::lorem::en::Sentence;

const MONTHS: [&str; 6] = ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"];
const GRADE_KINDS: [&str; 3] = ["test", "homework", "project"];

pub fn generate_dataset(students: &[User], teachers: &[User], assignments_per_class: usize) -> Dataset {
    let mut dataset = Dataset::default();

    for student in students {
        let grades = student_grades(teachers, student.class.as_ref());
        dataset.students.insert(student.id, student_data(student));
        dataset.goals.insert(student.id, goals());

        if let Some(class) = &student.class {
            dataset
                .classes
                .entry(class.clone())
                .or_insert_with(ClassRoster::default)
                .students
                .push(ClassStudent {
                    id: student.id,
                    name: student.name.clone(),
                    activity_score: (100..2000).fake(),
                    streak: (0..30).fake(),
                    avatar: None,
                });
            dataset
                .class_grades
                .entry(class.clone())
                .or_insert_with(|| ClassGrades {
                    class_id: class.clone(),
                    students: Vec::new(),
                })
                .students
                .push(ClassGradeRow {
                    student_id: student.id,
                    student_name: student.name.clone(),
                    subjects: grades.clone(),
                });
        }
        dataset.student_grades.insert(student.id, grades);
    }

    for teacher in teachers {
        let total_students = teacher
            .classes
            .iter()
            .filter_map(|class| dataset.classes.get(class))
            .map(|roster| roster.students.len() as u32)
            .sum();
        dataset.teachers.insert(
            teacher.id,
            TeacherData {
                id: teacher.id,
                name: teacher.name.clone(),
                subject: teacher.subjects.first().cloned().unwrap_or_default(),
                classes: teacher.classes.clone(),
                score: (500..5000).fake(),
                total_students,
                recent_feedback: Vec::new(),
            },
        );
        for class in &teacher.classes {
            dataset
                .assignments
                .extend((0..assignments_per_class).map(|idx| assignment(teacher, class, idx)));
        }
    }

    dataset.events = calendar_events();
    dataset
}

fn student_data(student: &User) -> StudentData {
    let goals_total: u32 = (3..8).fake();
    StudentData {
        id: student.id,
        gpa: (2.0..4.0).fake(),
        score: (100..2000).fake(),
        streak: (0..30).fake(),
        goals_completed: (0..=goals_total).fake(),
        goals_total,
        progress_data: MONTHS
            .iter()
            .map(|month| ProgressPoint {
                month: month.to_string(),
                overall: (55.0..98.0).fake(),
            })
            .collect(),
    }
}

/// One grade record per subject taught to the student's class.
fn student_grades(teachers: &[User], class: Option<&ClassId>) -> Vec<StudentGradeRecord> {
    let today = Utc::now().date_naive();
    teachers
        .iter()
        .filter(|teacher| class.is_some_and(|class| teacher.classes.contains(class)))
        .flat_map(|teacher| teacher.subjects.iter())
        .map(|subject| {
            let grades: Vec<GradeEntry> = GRADE_KINDS
                .iter()
                .enumerate()
                .map(|(idx, kind)| GradeEntry {
                    kind: kind.to_string(),
                    name: Sentence(2..4).fake(),
                    score: (50.0..100.0).fake(),
                    date: today - Duration::days(7 * (idx as i64 + 1)),
                })
                .collect();
            let current_percentage = grades.iter().map(|g| g.score).sum::<f32>() / grades.len() as f32;
            let trend = match (0..3).fake::<u8>() {
                0 => Trend::Up,
                1 => Trend::Down,
                _ => Trend::Stable,
            };
            StudentGradeRecord {
                subject: subject.clone(),
                grades,
                current_percentage,
                trend,
            }
        })
        .collect()
}

fn goals() -> Vec<Goal> {
    let today = Utc::now().date_naive();
    (0..3)
        .map(|idx| {
            let progress: u8 = (0..=100).fake();
            Goal {
                id: RecordKey::Number(idx + 1),
                title: Sentence(3..6).fake(),
                description: None,
                progress,
                deadline: Some(today + Duration::days(30 * (idx + 1))),
                completed: progress == 100,
            }
        })
        .collect()
}

fn assignment(teacher: &User, class: &ClassId, idx: usize) -> Assignment {
    let kind = match idx % 3 {
        0 => AssignmentKind::Homework,
        1 => AssignmentKind::Exam,
        _ => AssignmentKind::Project,
    };
    Assignment {
        id: AssignmentId::new(),
        class_id: class.clone(),
        teacher_id: teacher.id,
        teacher_name: teacher.name.clone(),
        subject: teacher.subjects.first().cloned().unwrap_or_default(),
        title: Sentence(2..5).fake(),
        description: Sentence(6..12).fake(),
        deadline: Utc::now() + Duration::days(3 * (idx as i64 + 1)),
        kind,
        status: None,
        completed_by: Vec::new(),
    }
}

fn calendar_events() -> Vec<CalendarEvent> {
    let today = Utc::now().date_naive();
    [
        ("Midterm exams", EventKind::Academic, 14),
        ("Science fair", EventKind::Social, 21),
        ("Spring break", EventKind::Holiday, 45),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (title, kind, days))| CalendarEvent {
        id: RecordKey::Number(idx as i64 + 1),
        title: title.to_string(),
        date: today + Duration::days(days),
        kind,
        description: None,
    })
    .collect()
}
