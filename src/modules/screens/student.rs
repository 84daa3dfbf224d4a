use async_trait::async_trait;
use edudash_core::AppError;
use edudash_models::{AssignmentStatus, ChatRole, ClassStudent};

use super::model::StudentScreen;
use super::{FeatureScreen, ScreenContext};

/// Text renderer for the student screens.
#[derive(Debug, Clone, Copy)]
pub struct StudentView(pub StudentScreen);

#[async_trait]
impl FeatureScreen for StudentView {
    fn title(&self) -> &'static str {
        self.0.view().label()
    }

    async fn render(&self, ctx: &ScreenContext) -> Result<Vec<String>, AppError> {
        let user = ctx.signed_in_user()?;
        let records = &ctx.records;
        let mut lines = Vec::new();

        match self.0 {
            StudentScreen::Dashboard => {
                lines.push(format!("Welcome back, {}!", user.first_name()));
                match records.student_data(user.id).await? {
                    Some(data) => {
                        lines.push(format!("GPA {:.2} | score {} | streak {} days", data.gpa, data.score, data.streak));
                        lines.push(format!(
                            "Goals {}/{} ({:.0}%)",
                            data.goals_completed,
                            data.goals_total,
                            data.goal_completion() * 100.0
                        ));
                    }
                    None => lines.push("No activity recorded yet.".to_string()),
                }
            }
            StudentScreen::Grades => {
                for record in records.student_grades(user.id).await? {
                    lines.push(format!(
                        "{}: {:.1}% ({:?}, {} grades)",
                        record.subject,
                        record.current_percentage,
                        record.trend,
                        record.grades.len()
                    ));
                }
            }
            StudentScreen::Leaderboard => {
                let classes: Vec<_> = user.class.iter().cloned().collect();
                let mut students: Vec<ClassStudent> = records
                    .class_list(&classes)
                    .await?
                    .into_values()
                    .flat_map(|roster| roster.students)
                    .collect();
                students.sort_by(|a, b| b.activity_score.cmp(&a.activity_score));
                for (rank, student) in students.iter().enumerate() {
                    let marker = if student.id == user.id { " (you)" } else { "" };
                    lines.push(format!("{}. {} {}{}", rank + 1, student.name, student.activity_score, marker));
                }
            }
            StudentScreen::Homework => {
                if let Some(class) = &user.class {
                    for assignment in records.assignments_for_class(class).await? {
                        let done = assignment.status_for(user.id) == AssignmentStatus::Completed;
                        lines.push(format!(
                            "[{}] {} - {} (due {})",
                            if done { "x" } else { " " },
                            assignment.subject,
                            assignment.title,
                            assignment.deadline.format("%Y-%m-%d %H:%M")
                        ));
                    }
                }
            }
            StudentScreen::Calendar => {
                for event in records.calendar_events().await? {
                    lines.push(format!("{} {:?}: {}", event.date, event.kind, event.title));
                }
            }
            StudentScreen::Learning => {
                for record in records.student_grades(user.id).await? {
                    lines.push(format!("Study materials: {}", record.subject));
                }
            }
            StudentScreen::Goals => {
                for goal in records.goals(user.id).await? {
                    let deadline = goal
                        .deadline
                        .map(|d| format!(" by {d}"))
                        .unwrap_or_default();
                    lines.push(format!("{} {}%{}", goal.title, goal.progress, deadline));
                }
            }
            StudentScreen::Portfolio => {
                if let Some(data) = records.student_data(user.id).await? {
                    for point in data.progress_data {
                        lines.push(format!("{}: {:.1}", point.month, point.overall));
                    }
                }
            }
            StudentScreen::Psychologist => {
                for message in records.chat_history(user.id).await? {
                    let who = match message.role {
                        ChatRole::User => "You",
                        ChatRole::Model => "Counselor",
                    };
                    lines.push(format!("{who}: {}", message.text));
                }
            }
        }

        if lines.is_empty() {
            lines.push("Nothing here yet.".to_string());
        }
        Ok(lines)
    }
}
