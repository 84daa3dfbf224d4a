use async_trait::async_trait;
use edudash_core::AppError;
use edudash_models::{ChatRole, ClassStudent, FeedbackRatings};

use super::model::TeacherScreen;
use super::{FeatureScreen, ScreenContext};

#[derive(Debug, Clone, Copy)]
pub struct TeacherView(pub TeacherScreen);

#[async_trait]
impl FeatureScreen for TeacherView {
    fn title(&self) -> &'static str {
        self.0.view().label()
    }

    async fn render(&self, ctx: &ScreenContext) -> Result<Vec<String>, AppError> {
        let user = ctx.signed_in_user()?;
        let records = &ctx.records;
        let mut lines = Vec::new();

        match self.0 {
            TeacherScreen::Profile => {
                lines.push(user.name.clone());
                if !user.subjects.is_empty() {
                    lines.push(format!("Subjects: {}", user.subjects.join(", ")));
                }
                if let Some(data) = records.teacher_data(user.id).await? {
                    lines.push(format!("Score {} | {} students", data.score, data.total_students));
                    let ratings: Vec<FeedbackRatings> =
                        data.recent_feedback.iter().map(|r| r.ratings).collect();
                    if !ratings.is_empty() {
                        let avg = ratings.iter().map(FeedbackRatings::average).sum::<f32>() / ratings.len() as f32;
                        lines.push(format!("Recent lesson rating {avg:.1}/5"));
                    }
                }
            }
            TeacherScreen::Leaderboard => {
                let mut students: Vec<ClassStudent> = records
                    .class_list(&user.classes)
                    .await?
                    .into_values()
                    .flat_map(|roster| roster.students)
                    .collect();
                students.sort_by(|a, b| b.activity_score.cmp(&a.activity_score));
                for (rank, student) in students.iter().enumerate() {
                    lines.push(format!("{}. {} {}", rank + 1, student.name, student.activity_score));
                }
            }
            TeacherScreen::Grades => {
                for class in &user.classes {
                    if let Some(book) = records.class_grades(class).await? {
                        lines.push(format!("{class}: {} students", book.students.len()));
                        for row in &book.students {
                            let subjects: Vec<String> = row
                                .subjects
                                .iter()
                                .map(|s| format!("{} {:.0}%", s.subject, s.current_percentage))
                                .collect();
                            lines.push(format!("  {}: {}", row.student_name, subjects.join(", ")));
                        }
                    }
                }
            }
            TeacherScreen::Classes => {
                for (class, roster) in records.class_list(&user.classes).await? {
                    lines.push(format!("{class}: {} students", roster.students.len()));
                }
            }
            TeacherScreen::Generator => {
                for message in records.chat_history(user.id).await? {
                    let who = match message.role {
                        ChatRole::User => "You",
                        ChatRole::Model => "Assistant",
                    };
                    lines.push(format!("{who}: {}", message.text));
                }
            }
            TeacherScreen::Feedback => {
                for form in records.feedback_forms_by_teacher(user.id).await? {
                    let responses = records.feedback_responses(&form.id).await?;
                    lines.push(format!(
                        "{} {} ({:?}, {} responses) {}",
                        form.date,
                        form.lesson_topic,
                        form.status,
                        responses.len(),
                        form.url
                    ));
                }
            }
            TeacherScreen::Homework => {
                for assignment in records.assignments_by_teacher(user.id).await? {
                    lines.push(format!(
                        "{} {} - {} (due {}, {} done)",
                        assignment.class_id,
                        assignment.subject,
                        assignment.title,
                        assignment.deadline.format("%Y-%m-%d"),
                        assignment.completed_by.len()
                    ));
                }
            }
        }

        if lines.is_empty() {
            lines.push("Nothing here yet.".to_string());
        }
        Ok(lines)
    }
}
