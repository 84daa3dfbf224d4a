//! Teacher-facing records: profile summary, class rosters and grade books.

use crate::feedback::FeedbackResponse;
use crate::ids::{ClassId, UserId};
use crate::students::StudentGradeRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherData {
    pub id: UserId,
    pub name: String,
    pub subject: String,
    pub classes: Vec<ClassId>,
    pub score: u32,
    pub total_students: u32,
    #[serde(default)]
    pub recent_feedback: Vec<FeedbackResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStudent {
    pub id: UserId,
    pub name: String,
    pub activity_score: u32,
    pub streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassRoster {
    pub students: Vec<ClassStudent>,
}

/// Rosters keyed by class name.
pub type ClassList = BTreeMap<ClassId, ClassRoster>;

/// One student's row in a class grade book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassGradeRow {
    pub student_id: UserId,
    pub student_name: String,
    pub subjects: Vec<StudentGradeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassGrades {
    pub class_id: ClassId,
    pub students: Vec<ClassGradeRow>,
}

impl ClassGrades {
    pub fn row_for(&self, student: UserId) -> Option<&ClassGradeRow> {
        self.students.iter().find(|row| row.student_id == student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_is_keyed_by_class_name() {
        let json = r#"{
            "10A": {"students": [{"id": "00000000-0000-0000-0000-000000000001",
                                  "name": "Ada", "activity_score": 80, "streak": 4}]},
            "9B": {"students": []}
        }"#;
        let list: ClassList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[&ClassId::new("10A")].students[0].name, "Ada");
    }

    #[test]
    fn test_row_for_finds_student() {
        let grades = ClassGrades {
            class_id: "10A".into(),
            students: vec![ClassGradeRow {
                student_id: UserId::from_u128(5),
                student_name: "Linus".into(),
                subjects: vec![],
            }],
        };
        assert!(grades.row_for(UserId::from_u128(5)).is_some());
        assert!(grades.row_for(UserId::from_u128(6)).is_none());
    }
}
