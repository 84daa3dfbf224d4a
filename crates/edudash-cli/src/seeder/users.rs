//! User generation.

use edudash_models::{ClassId, Email, User, ValueTypeError};
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;

use super::models::UserSeed;

const SUBJECTS: [&str; 6] = [
    "Mathematics",
    "Physics",
    "Biology",
    "Literature",
    "History",
    "Computer Science",
];

/// One teacher per class, teaching a subject picked by class position.
pub fn generate_teachers(
    classes: &[ClassId],
    password_hash: &str,
) -> Result<Vec<UserSeed>, ValueTypeError> {
    classes
        .par_iter()
        .enumerate()
        .map(|(class_idx, class)| {
            let subject = SUBJECTS[class_idx % SUBJECTS.len()].to_string();
            let (name, email) = fake_identity("teacher", class_idx, 0)?;
            Ok::<_, ValueTypeError>(UserSeed {
                user: User::teacher(name, email, vec![subject], vec![class.clone()]),
                password_hash: password_hash.to_string(),
            })
        })
        .collect()
}

pub fn generate_students(
    classes: &[ClassId],
    students_per_class: usize,
    password_hash: &str,
) -> Result<Vec<UserSeed>, ValueTypeError> {
    classes
        .par_iter()
        .enumerate()
        .flat_map(|(class_idx, class)| {
            (0..students_per_class)
                .map(|student_idx| {
                    let (name, email) = fake_identity("student", class_idx, student_idx)?;
                    Ok::<_, ValueTypeError>(UserSeed {
                        user: User::student(name, email, Some(class.clone())),
                        password_hash: password_hash.to_string(),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn fake_identity(
    role_prefix: &str,
    group_idx: usize,
    user_idx: usize,
) -> Result<(String, Email), ValueTypeError> {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let address = format!(
        "{}.{}+{}{}@school.example",
        slug(&first_name),
        slug(&last_name),
        role_prefix,
        group_idx * 1000 + user_idx
    );
    Ok((format!("{first_name} {last_name}"), Email::new(address)?))
}

fn slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    if slug.is_empty() { "user".to_string() } else { slug }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudash_models::Role;
    use std::collections::HashSet;

    fn classes() -> Vec<ClassId> {
        vec![ClassId::new("9A"), ClassId::new("9B")]
    }

    #[test]
    fn test_generate_students_assigns_classes() {
        let seeds = generate_students(&classes(), 5, "hash").unwrap();
        assert_eq!(seeds.len(), 10);
        assert!(seeds.iter().all(|s| s.user.role == Role::Student));
        assert_eq!(
            seeds
                .iter()
                .filter(|s| s.user.class == Some(ClassId::new("9B")))
                .count(),
            5
        );
    }

    #[test]
    fn test_generated_emails_are_unique() {
        let seeds = generate_students(&classes(), 50, "hash").unwrap();
        let emails: HashSet<_> = seeds.iter().map(|s| s.user.email.normalized()).collect();
        assert_eq!(emails.len(), seeds.len());
    }

    #[test]
    fn test_one_teacher_per_class() {
        let seeds = generate_teachers(&classes(), "hash").unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[1].user.classes, vec![ClassId::new("9B")]);
        assert_eq!(seeds[1].user.subjects, vec!["Physics".to_string()]);
    }
}
