use anyhow::anyhow;
use chrono::Utc;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use dotenvy::dotenv;
use edudash_cli::seeder::{self, SeedConfig};
use edudash_config::{SessionConfig, StorageConfig};
use edudash_core::{AppError, hash_password};
use edudash_models::{ClassId, Email, FeedbackFormConfig, FormId, FormStatus, Role, User};
use edudash_store::{FileStore, IdentityStore, RecordStore, UserRecord};

#[derive(Parser)]
#[command(name = "edudash-cli")]
#[command(about = "edudash CLI - Administrative tools for edudash", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a student or teacher account
    CreateUser {
        /// Full name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Role: student or teacher
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// Class for a student, or comma-separated classes for a teacher
        #[arg(short = 'c', long)]
        class: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the store with fake classes, users and dashboard records
    Seed {
        /// Number of classes to create
        #[arg(short = 'c', long, default_value = "3")]
        classes: usize,

        /// Number of students per class
        #[arg(long, default_value = "20")]
        students: usize,

        /// Number of assignments per class
        #[arg(long, default_value = "4")]
        assignments: usize,

        /// Password for every seeded account
        #[arg(long, default_value = "password123")]
        password: String,
    },
    /// Open a lesson feedback form and print its public link
    CreateForm {
        /// Email of the teacher who owns the form
        #[arg(short = 't', long)]
        teacher: String,

        /// Class the lesson was given to
        #[arg(short = 'c', long)]
        class: String,

        /// Lesson topic
        #[arg(long)]
        topic: String,

        /// Base URL the link is relative to
        #[arg(long, default_value = "http://localhost/")]
        base_url: String,
    },
    /// List all accounts
    ListUsers,
    /// Clear all dashboard records (keeps accounts)
    ClearRecords,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    edudash_observability::init_basic_console_logging();

    let store = FileStore::new(&StorageConfig::from_env(), SessionConfig::from_env());
    if let Err(e) = store.initialize_database().await {
        eprintln!("❌ Failed to open data directory {}: {}", store.data_dir().display(), e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::CreateUser {
            name,
            email,
            role,
            class,
            password,
        } => handle_create_user(&store, name, email, role, class, password).await,
        Commands::Seed {
            classes,
            students,
            assignments,
            password,
        } => handle_seed(&store, classes, students, assignments, password).await,
        Commands::CreateForm {
            teacher,
            class,
            topic,
            base_url,
        } => handle_create_form(&store, &teacher, class, topic, &base_url).await,
        Commands::ListUsers => handle_list_users(&store).await,
        Commands::ClearRecords => seeder::clear_records(&store)
            .await
            .map_err(|e| AppError::internal(anyhow!(e.to_string()))),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn prompt_text(prompt: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(AppError::internal)
}

async fn handle_create_user(
    store: &FileStore,
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    class: Option<String>,
    password: Option<String>,
) -> Result<(), AppError> {
    let name = match name {
        Some(name) => name,
        None => prompt_text("Full name")?,
    };
    let email = match email {
        Some(email) => email,
        None => prompt_text("Email address")?,
    };
    let email = Email::new(email).map_err(AppError::bad_request)?;
    let role = match role {
        Some(role) => role,
        None => {
            let labels: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
            let idx = Select::new()
                .with_prompt("Role")
                .items(&labels)
                .default(0)
                .interact()
                .map_err(AppError::internal)?;
            Role::ALL[idx]
        }
    };
    let class = match class {
        Some(class) => class,
        None => prompt_text("Class (comma-separated for teachers)")?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .map_err(AppError::internal)?,
    };

    let classes: Vec<ClassId> = class
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ClassId::from)
        .collect();
    let user = match role {
        Role::Student => User::student(name, email, classes.into_iter().next()),
        Role::Teacher => User::teacher(name, email, Vec::new(), classes),
    };

    if store.find_user_by_email(&user.email).await?.is_some() {
        return Err(AppError::bad_request(anyhow!(
            "Email {} already exists",
            user.email
        )));
    }

    store
        .upsert_user(UserRecord {
            user: user.clone(),
            password_hash: hash_password(&password)?,
        })
        .await?;

    println!("\n✅ User created successfully!");
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);
    println!("   Role: {}", user.role);
    Ok(())
}

async fn handle_seed(
    store: &FileStore,
    classes: usize,
    students: usize,
    assignments: usize,
    password: String,
) -> Result<(), AppError> {
    let config = SeedConfig::new(classes)
        .with_students(students)
        .with_assignments(assignments)
        .with_password(password);

    seeder::seed_all(store, config)
        .await
        .map(|_| ())
        .map_err(|e| AppError::internal(anyhow!(e.to_string())))
}

async fn handle_create_form(
    store: &FileStore,
    teacher_email: &str,
    class: String,
    topic: String,
    base_url: &str,
) -> Result<(), AppError> {
    let email = Email::new(teacher_email).map_err(AppError::bad_request)?;
    let teacher = store
        .find_user_by_email(&email)
        .await?
        .filter(|record| record.user.role == Role::Teacher)
        .ok_or_else(|| AppError::not_found(anyhow!("No teacher with email {}", teacher_email)))?
        .user;

    let id = FormId::new(uuid::Uuid::new_v4().simple().to_string());
    let url = FeedbackFormConfig::public_link(base_url, &id);
    store
        .save_feedback_form(FeedbackFormConfig {
            id,
            teacher_id: teacher.id,
            class_id: ClassId::new(class),
            lesson_topic: topic,
            date: Utc::now().date_naive(),
            url: url.clone(),
            status: FormStatus::Active,
        })
        .await?;

    println!("✅ Feedback form created");
    println!("   Link: {}", url);
    Ok(())
}

async fn handle_list_users(store: &FileStore) -> Result<(), AppError> {
    let users = store.list_users().await?;
    if users.is_empty() {
        println!("No users found. Run `create-user` or `seed` first.");
    }
    for user in users {
        println!("{:<8} {:<32} {}", user.role, user.email, user.name);
    }
    Ok(())
}
