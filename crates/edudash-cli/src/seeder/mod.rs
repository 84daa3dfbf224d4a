//! Demo data seeding.
//!
//! Generation is pure and runs in parallel; writing goes through the store
//! traits so the same seeder fills a [`FileStore`](edudash_store::FileStore)
//! or an in-memory store.

pub mod models;
pub mod records;
pub mod users;

use std::time::Instant;

use edudash_core::hash_password;
use edudash_models::{ClassId, User};
use edudash_store::{Dataset, IdentityStore, RecordStore, UserRecord};

pub use models::{SeedConfig, UserSeed};

/// What a seeding run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub teachers: usize,
    pub students: usize,
    pub assignments: usize,
}

pub async fn seed_all<S>(store: &S, config: SeedConfig) -> Result<SeedSummary, Box<dyn std::error::Error>>
where
    S: IdentityStore + RecordStore,
{
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} classes with {} students each...",
        config.classes.len(),
        config.students_per_class
    );

    let password_hash = hash_password(&config.password).map_err(|e| e.to_string())?;
    let classes: Vec<ClassId> = config.classes.iter().map(ClassId::new).collect();

    let teachers = users::generate_teachers(&classes, &password_hash)?;
    let students = users::generate_students(&classes, config.students_per_class, &password_hash)?;

    let teacher_users = insert_users(store, teachers).await?;
    println!("   ✓ Inserted {} teachers", teacher_users.len());
    let student_users = insert_users(store, students).await?;
    println!("   ✓ Inserted {} students", student_users.len());

    let dataset = records::generate_dataset(&student_users, &teacher_users, config.assignments_per_class);
    let assignments = dataset.assignments.len();
    store.save_records(&dataset).await?;
    println!("   ✓ Wrote dashboard records ({} assignments)", assignments);

    println!("✅ Seeding finished in {:?}", start_time.elapsed());
    Ok(SeedSummary {
        teachers: teacher_users.len(),
        students: student_users.len(),
        assignments,
    })
}

async fn insert_users<S>(store: &S, seeds: Vec<UserSeed>) -> Result<Vec<User>, Box<dyn std::error::Error>>
where
    S: IdentityStore,
{
    let mut users = Vec::with_capacity(seeds.len());
    for seed in seeds {
        users.push(seed.user.clone());
        store
            .upsert_user(UserRecord {
                user: seed.user,
                password_hash: seed.password_hash,
            })
            .await?;
    }
    Ok(users)
}

/// Removes every dashboard record. Accounts are kept.
pub async fn clear_records<S>(store: &S) -> Result<(), Box<dyn std::error::Error>>
where
    S: RecordStore,
{
    store.save_records(&Dataset::default()).await?;
    println!("✅ Cleared dashboard records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudash_store::MemoryStore;

    #[tokio::test]
    async fn test_seed_all_fills_store() {
        let store = MemoryStore::new();
        let config = SeedConfig::new(2)
            .with_students(3)
            .with_assignments(1)
            .with_password("seeded-pass");

        let summary = seed_all(&store, config).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                teachers: 2,
                students: 6,
                assignments: 2
            }
        );
        assert_eq!(store.list_users().await.unwrap().len(), 8);
        assert_eq!(store.load_records().await.unwrap().students.len(), 6);

        clear_records(&store).await.unwrap();
        assert!(store.load_records().await.unwrap().students.is_empty());
    }
}
