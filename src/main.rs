use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use edudash::modules::public_route::NavigationContext;
use edudash::state::{AppConfig, init_app_state};
use edudash::{App, terminal};
use edudash_observability::init_tracing;
use tracing::info;

#[derive(Parser)]
#[command(name = "edudash")]
#[command(about = "edudash - role-aware school dashboard", long_about = None)]
struct Cli {
    /// Launch URL or query string, e.g. `?view=feedback&id=abc123`
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Data directory (overrides EDUDASH_DATA_DIR)
    #[arg(short = 'd', long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    let _guards = init_tracing()?;

    let mut config = AppConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    info!(data_dir = %config.storage.data_dir.display(), "Starting edudash");

    let context = cli
        .url
        .as_deref()
        .map(NavigationContext::parse)
        .unwrap_or_default();
    let app = App::new(init_app_state(config), context);

    if let Err(e) = terminal::run(app).await {
        eprintln!("\n❌ {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}
