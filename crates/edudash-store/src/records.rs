//! Records read by the feature screens.
//!
//! Backends only load and save a whole [`Dataset`]; the query and update
//! helpers are provided methods on [`RecordStore`] so every backend answers
//! them the same way.

use async_trait::async_trait;
use edudash_models::{
    Assignment, CalendarEvent, ChatMessage, ClassGrades, ClassId, ClassList, FeedbackFormConfig,
    FeedbackResponse, FormId, Goal, StudentData, StudentGradeRecord, TeacherData, UserId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StoreError;

/// Every record the dashboard keeps, as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub students: BTreeMap<UserId, StudentData>,
    pub teachers: BTreeMap<UserId, TeacherData>,
    pub student_grades: BTreeMap<UserId, Vec<StudentGradeRecord>>,
    pub goals: BTreeMap<UserId, Vec<Goal>>,
    pub classes: ClassList,
    pub class_grades: BTreeMap<ClassId, ClassGrades>,
    pub assignments: Vec<Assignment>,
    pub events: Vec<CalendarEvent>,
    pub forms: BTreeMap<FormId, FeedbackFormConfig>,
    pub responses: Vec<FeedbackResponse>,
    pub chats: BTreeMap<UserId, Vec<ChatMessage>>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load_records(&self) -> Result<Dataset, StoreError>;

    async fn save_records(&self, records: &Dataset) -> Result<(), StoreError>;

    async fn student_data(&self, student: UserId) -> Result<Option<StudentData>, StoreError> {
        Ok(self.load_records().await?.students.remove(&student))
    }

    async fn teacher_data(&self, teacher: UserId) -> Result<Option<TeacherData>, StoreError> {
        Ok(self.load_records().await?.teachers.remove(&teacher))
    }

    async fn student_grades(&self, student: UserId) -> Result<Vec<StudentGradeRecord>, StoreError> {
        Ok(self
            .load_records()
            .await?
            .student_grades
            .remove(&student)
            .unwrap_or_default())
    }

    async fn goals(&self, student: UserId) -> Result<Vec<Goal>, StoreError> {
        Ok(self.load_records().await?.goals.remove(&student).unwrap_or_default())
    }

    /// Rosters of the given classes. Unknown classes are skipped.
    async fn class_list(&self, classes: &[ClassId]) -> Result<ClassList, StoreError> {
        let mut all = self.load_records().await?.classes;
        all.retain(|class, _| classes.contains(class));
        Ok(all)
    }

    async fn class_grades(&self, class: &ClassId) -> Result<Option<ClassGrades>, StoreError> {
        Ok(self.load_records().await?.class_grades.remove(class))
    }

    /// Assignments for one class, earliest deadline first.
    async fn assignments_for_class(&self, class: &ClassId) -> Result<Vec<Assignment>, StoreError> {
        let mut assignments: Vec<_> = self
            .load_records()
            .await?
            .assignments
            .into_iter()
            .filter(|a| &a.class_id == class)
            .collect();
        assignments.sort_by_key(|a| a.deadline);
        Ok(assignments)
    }

    async fn assignments_by_teacher(&self, teacher: UserId) -> Result<Vec<Assignment>, StoreError> {
        let mut assignments: Vec<_> = self
            .load_records()
            .await?
            .assignments
            .into_iter()
            .filter(|a| a.teacher_id == teacher)
            .collect();
        assignments.sort_by_key(|a| a.deadline);
        Ok(assignments)
    }

    /// Calendar events in date order.
    async fn calendar_events(&self) -> Result<Vec<CalendarEvent>, StoreError> {
        let mut events = self.load_records().await?.events;
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    async fn feedback_form(&self, form: &FormId) -> Result<Option<FeedbackFormConfig>, StoreError> {
        Ok(self.load_records().await?.forms.remove(form))
    }

    async fn feedback_forms_by_teacher(
        &self,
        teacher: UserId,
    ) -> Result<Vec<FeedbackFormConfig>, StoreError> {
        Ok(self
            .load_records()
            .await?
            .forms
            .into_values()
            .filter(|f| f.teacher_id == teacher)
            .collect())
    }

    async fn save_feedback_form(&self, form: FeedbackFormConfig) -> Result<(), StoreError> {
        let mut records = self.load_records().await?;
        records.forms.insert(form.id.clone(), form);
        self.save_records(&records).await
    }

    async fn feedback_responses(&self, form: &FormId) -> Result<Vec<FeedbackResponse>, StoreError> {
        Ok(self
            .load_records()
            .await?
            .responses
            .into_iter()
            .filter(|r| &r.form_id == form)
            .collect())
    }

    /// Stores an anonymous response. The form must exist and be active.
    async fn submit_feedback(&self, response: FeedbackResponse) -> Result<(), StoreError> {
        let mut records = self.load_records().await?;
        match records.forms.get(&response.form_id) {
            None => return Err(StoreError::FormNotFound(response.form_id)),
            Some(form) if !form.is_open() => return Err(StoreError::FormClosed(response.form_id)),
            Some(_) => {}
        }
        tracing::debug!(form_id = %response.form_id, "Feedback response stored");
        records.responses.push(response);
        self.save_records(&records).await
    }

    async fn chat_history(&self, user: UserId) -> Result<Vec<ChatMessage>, StoreError> {
        Ok(self.load_records().await?.chats.remove(&user).unwrap_or_default())
    }

    async fn append_chat_message(&self, user: UserId, message: ChatMessage) -> Result<(), StoreError> {
        let mut records = self.load_records().await?;
        records.chats.entry(user).or_default().push(message);
        self.save_records(&records).await
    }
}
