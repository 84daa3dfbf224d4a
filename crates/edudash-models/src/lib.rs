//! # edudash Models
//!
//! Domain model shared by the session store, the view router and the
//! feature screens.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed identifiers
//! - [`value_types`]: Validated primitives (email)
//! - [`users`]: Users and their role
//! - [`views`]: The closed set of view identifiers and their role partition
//! - [`students`]: Student progress, grades and goals
//! - [`teachers`]: Teacher profile, class rosters and class grade books
//! - [`academics`]: Assignments and calendar events
//! - [`feedback`]: Lesson feedback forms and responses
//! - [`chat`]: Messages exchanged with the AI assistant screens
//!
//! Records outside `users` and `views` are opaque payloads to the routing
//! core: they are only read by feature screens.
//!
//! # Example
//!
//! ```ignore
//! use edudash_models::{Role, ViewId};
//!
//! assert_eq!(ViewId::role_default(Role::Teacher), ViewId::TeacherProfile);
//! assert!(ViewId::Grades.belongs_to(Role::Student));
//! ```

pub mod academics;
pub mod chat;
pub mod feedback;
pub mod ids;
pub mod students;
pub mod teachers;
pub mod users;
pub mod value_types;
pub mod views;

pub use academics::{Assignment, AssignmentKind, AssignmentStatus, CalendarEvent, EventKind};
pub use chat::{ChatMessage, ChatRole};
pub use feedback::{
    FeedbackComments, FeedbackFormConfig, FeedbackRatings, FeedbackResponse, FormStatus,
};
pub use ids::{AssignmentId, ClassId, FormId, RecordKey, UserId};
pub use students::{GradeEntry, Goal, ProgressPoint, StudentData, StudentGradeRecord, Trend};
pub use teachers::{ClassGradeRow, ClassGrades, ClassList, ClassRoster, ClassStudent, TeacherData};
pub use users::{Role, UnknownRole, User};
pub use value_types::{Email, ValueTypeError};
pub use views::{UnknownView, ViewAudience, ViewId};
