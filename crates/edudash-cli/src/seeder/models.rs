//! Seeding configuration.

use edudash_models::User;

/// A generated user together with the hash its directory entry will carry.
pub struct UserSeed {
    pub user: User,
    pub password_hash: String,
}

/// How much demo data to generate.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    /// Class names, e.g. `10A`. One teacher is assigned per class.
    pub classes: Vec<String>,
    pub students_per_class: usize,
    pub assignments_per_class: usize,
    /// Password shared by every seeded account.
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            classes: vec!["9A".into(), "10A".into(), "11B".into()],
            students_per_class: 20,
            assignments_per_class: 4,
            password: "password123".into(),
        }
    }
}

impl SeedConfig {
    pub fn new(class_count: usize) -> Self {
        let classes = (0..class_count)
            .map(|idx| format!("{}{}", 9 + idx / 3, ['A', 'B', 'C'][idx % 3]))
            .collect();
        Self {
            classes,
            ..Self::default()
        }
    }

    pub fn with_students(mut self, students_per_class: usize) -> Self {
        self.students_per_class = students_per_class;
        self
    }

    pub fn with_assignments(mut self, assignments_per_class: usize) -> Self {
        self.assignments_per_class = assignments_per_class;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}
