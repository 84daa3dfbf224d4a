//! View identifiers.
//!
//! [`ViewId`] is the closed set of screens the dashboard can show. It is
//! partitioned into three disjoint audiences:
//!
//! | Audience | Views |
//! |----------|-------|
//! | Student  | `dashboard`, `grades`, `leaderboard`, `homework`, `calendar`, `learning`, `goals`, `portfolio`, `psychologist` |
//! | Teacher  | `teacher-profile`, `teacher-leaderboard`, `teacher-grades`, `teacher-classes`, `teacher-generator`, `teacher-feedback`, `teacher-homework` |
//! | Public   | `feedback-form` |
//!
//! The first view of each role subset is that role's default landing view.

use crate::users::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Dashboard,
    Grades,
    Leaderboard,
    Homework,
    Calendar,
    Learning,
    Goals,
    Portfolio,
    Psychologist,
    TeacherProfile,
    TeacherLeaderboard,
    TeacherGrades,
    TeacherClasses,
    TeacherGenerator,
    TeacherFeedback,
    TeacherHomework,
    FeedbackForm,
}

/// Which part of the view partition an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAudience {
    Student,
    Teacher,
    Public,
}

impl ViewAudience {
    pub fn of_role(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Teacher => Self::Teacher,
        }
    }
}

impl ViewId {
    pub const STUDENT_VIEWS: [ViewId; 9] = [
        ViewId::Dashboard,
        ViewId::Grades,
        ViewId::Leaderboard,
        ViewId::Homework,
        ViewId::Calendar,
        ViewId::Learning,
        ViewId::Goals,
        ViewId::Portfolio,
        ViewId::Psychologist,
    ];

    pub const TEACHER_VIEWS: [ViewId; 7] = [
        ViewId::TeacherProfile,
        ViewId::TeacherLeaderboard,
        ViewId::TeacherGrades,
        ViewId::TeacherClasses,
        ViewId::TeacherGenerator,
        ViewId::TeacherFeedback,
        ViewId::TeacherHomework,
    ];

    pub const ALL: [ViewId; 17] = [
        ViewId::Dashboard,
        ViewId::Grades,
        ViewId::Leaderboard,
        ViewId::Homework,
        ViewId::Calendar,
        ViewId::Learning,
        ViewId::Goals,
        ViewId::Portfolio,
        ViewId::Psychologist,
        ViewId::TeacherProfile,
        ViewId::TeacherLeaderboard,
        ViewId::TeacherGrades,
        ViewId::TeacherClasses,
        ViewId::TeacherGenerator,
        ViewId::TeacherFeedback,
        ViewId::TeacherHomework,
        ViewId::FeedbackForm,
    ];

    pub const fn audience(self) -> ViewAudience {
        match self {
            Self::Dashboard
            | Self::Grades
            | Self::Leaderboard
            | Self::Homework
            | Self::Calendar
            | Self::Learning
            | Self::Goals
            | Self::Portfolio
            | Self::Psychologist => ViewAudience::Student,
            Self::TeacherProfile
            | Self::TeacherLeaderboard
            | Self::TeacherGrades
            | Self::TeacherClasses
            | Self::TeacherGenerator
            | Self::TeacherFeedback
            | Self::TeacherHomework => ViewAudience::Teacher,
            Self::FeedbackForm => ViewAudience::Public,
        }
    }

    pub fn is_public(self) -> bool {
        self.audience() == ViewAudience::Public
    }

    /// True when the view is in the subset owned by `role`.
    pub fn belongs_to(self, role: Role) -> bool {
        self.audience() == ViewAudience::of_role(role)
    }

    /// Landing view for a freshly authenticated session.
    pub const fn role_default(role: Role) -> ViewId {
        match role {
            Role::Student => ViewId::Dashboard,
            Role::Teacher => ViewId::TeacherProfile,
        }
    }

    /// The views a role's sidebar offers, in menu order.
    pub fn views_for(role: Role) -> &'static [ViewId] {
        match role {
            Role::Student => &Self::STUDENT_VIEWS,
            Role::Teacher => &Self::TEACHER_VIEWS,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Grades => "grades",
            Self::Leaderboard => "leaderboard",
            Self::Homework => "homework",
            Self::Calendar => "calendar",
            Self::Learning => "learning",
            Self::Goals => "goals",
            Self::Portfolio => "portfolio",
            Self::Psychologist => "psychologist",
            Self::TeacherProfile => "teacher-profile",
            Self::TeacherLeaderboard => "teacher-leaderboard",
            Self::TeacherGrades => "teacher-grades",
            Self::TeacherClasses => "teacher-classes",
            Self::TeacherGenerator => "teacher-generator",
            Self::TeacherFeedback => "teacher-feedback",
            Self::TeacherHomework => "teacher-homework",
            Self::FeedbackForm => "feedback-form",
        }
    }

    /// Menu label shown in the sidebar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Grades => "Grades",
            Self::Leaderboard => "Leaderboard",
            Self::Homework => "Homework",
            Self::Calendar => "Calendar",
            Self::Learning => "Learning Hub",
            Self::Goals => "Goals",
            Self::Portfolio => "Portfolio",
            Self::Psychologist => "AI Psychologist",
            Self::TeacherProfile => "Profile",
            Self::TeacherLeaderboard => "Leaderboard",
            Self::TeacherGrades => "Grade Book",
            Self::TeacherClasses => "Classes",
            Self::TeacherGenerator => "AI Generator",
            Self::TeacherFeedback => "Lesson Feedback",
            Self::TeacherHomework => "Homework",
            Self::FeedbackForm => "Feedback Form",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known view tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown view '{}'", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|view| view.as_str() == tag)
            .ok_or_else(|| UnknownView(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let students: HashSet<_> = ViewId::STUDENT_VIEWS.into_iter().collect();
        let teachers: HashSet<_> = ViewId::TEACHER_VIEWS.into_iter().collect();
        assert!(students.is_disjoint(&teachers));
        assert_eq!(students.len() + teachers.len() + 1, ViewId::ALL.len());

        let publics: Vec<_> = ViewId::ALL.into_iter().filter(|v| v.is_public()).collect();
        assert_eq!(publics, vec![ViewId::FeedbackForm]);
    }

    #[test]
    fn test_audience_matches_subsets() {
        for view in ViewId::STUDENT_VIEWS {
            assert!(view.belongs_to(Role::Student));
            assert!(!view.belongs_to(Role::Teacher));
        }
        for view in ViewId::TEACHER_VIEWS {
            assert!(view.belongs_to(Role::Teacher));
            assert!(!view.belongs_to(Role::Student));
        }
        assert!(!ViewId::FeedbackForm.belongs_to(Role::Student));
        assert!(!ViewId::FeedbackForm.belongs_to(Role::Teacher));
    }

    #[test]
    fn test_role_defaults_lead_their_menus() {
        assert_eq!(ViewId::role_default(Role::Student), ViewId::Dashboard);
        assert_eq!(ViewId::role_default(Role::Teacher), ViewId::TeacherProfile);
        for role in Role::ALL {
            assert_eq!(ViewId::views_for(role)[0], ViewId::role_default(role));
        }
    }

    #[test]
    fn test_tags_parse_back() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), view);
        }
    }

    #[test]
    fn test_unknown_tag_is_error() {
        let err = "teacher-lounge".parse::<ViewId>().unwrap_err();
        assert_eq!(err, UnknownView("teacher-lounge".into()));
    }

    #[test]
    fn test_serde_uses_kebab_case_tags() {
        for view in ViewId::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(ViewId::default(), ViewId::Dashboard);
    }
}
