use edudash_models::ViewId;

/// What the main content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenSelector {
    /// Sign-in screen for anonymous sessions.
    Auth,
    Student(StudentScreen),
    Teacher(TeacherScreen),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentScreen {
    Dashboard,
    Grades,
    Leaderboard,
    Homework,
    Calendar,
    Learning,
    Goals,
    Portfolio,
    Psychologist,
}

impl StudentScreen {
    /// The student screen for `view`, if the view is one of the student's.
    pub const fn for_view(view: ViewId) -> Option<Self> {
        match view {
            ViewId::Dashboard => Some(Self::Dashboard),
            ViewId::Grades => Some(Self::Grades),
            ViewId::Leaderboard => Some(Self::Leaderboard),
            ViewId::Homework => Some(Self::Homework),
            ViewId::Calendar => Some(Self::Calendar),
            ViewId::Learning => Some(Self::Learning),
            ViewId::Goals => Some(Self::Goals),
            ViewId::Portfolio => Some(Self::Portfolio),
            ViewId::Psychologist => Some(Self::Psychologist),
            ViewId::TeacherProfile
            | ViewId::TeacherLeaderboard
            | ViewId::TeacherGrades
            | ViewId::TeacherClasses
            | ViewId::TeacherGenerator
            | ViewId::TeacherFeedback
            | ViewId::TeacherHomework
            | ViewId::FeedbackForm => None,
        }
    }

    pub const fn view(self) -> ViewId {
        match self {
            Self::Dashboard => ViewId::Dashboard,
            Self::Grades => ViewId::Grades,
            Self::Leaderboard => ViewId::Leaderboard,
            Self::Homework => ViewId::Homework,
            Self::Calendar => ViewId::Calendar,
            Self::Learning => ViewId::Learning,
            Self::Goals => ViewId::Goals,
            Self::Portfolio => ViewId::Portfolio,
            Self::Psychologist => ViewId::Psychologist,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeacherScreen {
    Profile,
    Leaderboard,
    Grades,
    Classes,
    Generator,
    Feedback,
    Homework,
}

impl TeacherScreen {
    pub const fn for_view(view: ViewId) -> Option<Self> {
        match view {
            ViewId::TeacherProfile => Some(Self::Profile),
            ViewId::TeacherLeaderboard => Some(Self::Leaderboard),
            ViewId::TeacherGrades => Some(Self::Grades),
            ViewId::TeacherClasses => Some(Self::Classes),
            ViewId::TeacherGenerator => Some(Self::Generator),
            ViewId::TeacherFeedback => Some(Self::Feedback),
            ViewId::TeacherHomework => Some(Self::Homework),
            ViewId::Dashboard
            | ViewId::Grades
            | ViewId::Leaderboard
            | ViewId::Homework
            | ViewId::Calendar
            | ViewId::Learning
            | ViewId::Goals
            | ViewId::Portfolio
            | ViewId::Psychologist
            | ViewId::FeedbackForm => None,
        }
    }

    pub const fn view(self) -> ViewId {
        match self {
            Self::Profile => ViewId::TeacherProfile,
            Self::Leaderboard => ViewId::TeacherLeaderboard,
            Self::Grades => ViewId::TeacherGrades,
            Self::Classes => ViewId::TeacherClasses,
            Self::Generator => ViewId::TeacherGenerator,
            Self::Feedback => ViewId::TeacherFeedback,
            Self::Homework => ViewId::TeacherHomework,
        }
    }
}
