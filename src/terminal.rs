//! Interactive terminal presenter.
//!
//! Draws each [`Frame`] as text and turns menu picks into [`App`] calls.
//! Transitions are not animated here, so every phase is completed as soon as
//! it starts.

use dialoguer::{Input, Password, Select};
use edudash_core::AppError;
use edudash_models::ViewId;
use tracing::debug;

use crate::app::{App, Frame};
use crate::modules::auth::LoginRequest;
use crate::modules::screens::feedback_form::FeedbackSubmission;
use crate::modules::screens::{FeatureScreen, ScreenRegistry};
use crate::modules::shell::ShellFrame;

enum Step {
    Continue,
    Quit,
}

pub async fn run(mut app: App) -> Result<(), AppError> {
    app.boot().await;
    loop {
        settle(&mut app);
        let step = match app.frame() {
            Frame::Loading => Step::Continue,
            Frame::PublicFeedback { .. } => public_form(&mut app).await?,
            Frame::Auth => sign_in(&mut app).await?,
            Frame::Shell(frame) => shell(&mut app, frame).await?,
        };
        if let Step::Quit = step {
            return Ok(());
        }
    }
}

fn settle(app: &mut App) {
    while let Some(event) = app.complete_transition_phase() {
        debug!(?event, "Transition settled by presenter");
    }
}

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::internal(e)
}

async fn public_form(app: &mut App) -> Result<Step, AppError> {
    let Some(screen) = app.public_form() else {
        return Ok(Step::Continue);
    };
    let ctx = app.screen_context();

    println!("\n== {} ==", screen.title());
    match screen.render(&ctx).await {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => println!("❌ {e}"),
    }

    let choice = Select::new()
        .with_prompt("Feedback")
        .items(&["Submit feedback", "Close"])
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    if choice == 0 {
        let submission = FeedbackSubmission {
            interest: rating("Interest")?,
            clarity: rating("Clarity")?,
            productivity: rating("Productivity")?,
            efficiency: rating("Efficiency")?,
            improve: text("What could be improved?")?,
            liked: text("What did you like?")?,
        };
        match screen.submit(ctx.records.as_ref(), submission).await {
            Ok(_) => println!("✅ Thank you for your feedback!"),
            Err(e) => println!("❌ {e}"),
        }
    }

    app.close_public_form().await;
    Ok(Step::Continue)
}

fn rating(prompt: &str) -> Result<u8, AppError> {
    Input::<u8>::new()
        .with_prompt(format!("{prompt} (1-5)"))
        .interact_text()
        .map_err(prompt_error)
}

fn text(prompt: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

async fn sign_in(app: &mut App) -> Result<Step, AppError> {
    println!("\n== Sign in ==");
    let choice = Select::new()
        .items(&["Sign in", "Quit"])
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    if choice == 1 {
        return Ok(Step::Quit);
    }

    let email: String = Input::new()
        .with_prompt("Email address")
        .interact_text()
        .map_err(prompt_error)?;
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;

    if let Err(e) = app.sign_in(LoginRequest::new(email, password)).await {
        println!("❌ {e}");
    }
    Ok(Step::Continue)
}

enum ShellAction {
    Open(ViewId),
    ToggleSidebar,
    Logout,
    Quit,
}

async fn shell(app: &mut App, frame: ShellFrame) -> Result<Step, AppError> {
    println!("\n== {} ({}) ==", frame.user.name, frame.user.role);

    let screen = ScreenRegistry::construct(&frame.content);
    println!("-- {} --", screen.title());
    match screen.render(&app.screen_context()).await {
        Ok(lines) => lines.iter().for_each(|line| println!("  {line}")),
        Err(e) => println!("❌ {e}"),
    }

    let mut actions = Vec::new();
    let mut labels = Vec::new();
    for item in frame.sidebar.iter().flatten() {
        let marker = if item.active { "> " } else { "  " };
        labels.push(format!("{marker}{}", item.label));
        actions.push(ShellAction::Open(item.view));
    }
    labels.push(if frame.sidebar_open { "Hide menu" } else { "Show menu" }.to_string());
    actions.push(ShellAction::ToggleSidebar);
    labels.push("Log out".to_string());
    actions.push(ShellAction::Logout);
    labels.push("Quit".to_string());
    actions.push(ShellAction::Quit);

    let choice = Select::new()
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    match actions.get(choice) {
        Some(ShellAction::Open(view)) => {
            if let Err(e) = app.navigate(*view) {
                println!("❌ {e}");
            }
        }
        Some(ShellAction::ToggleSidebar) => {
            app.toggle_sidebar();
        }
        Some(ShellAction::Logout) => {
            app.logout().await;
        }
        Some(ShellAction::Quit) | None => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}
