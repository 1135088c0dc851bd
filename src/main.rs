use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hilltop::auth::hash_password;
use hilltop::config::{Backend, ServerConfig, db_path};
use hilltop::content::ContentRepo;
use hilltop::server::validation::is_valid_email;
use hilltop::server::{AppState, create_router, seed_defaults};
use hilltop::store::{SqliteStore, row};
use hilltop::types::AdminUser;

#[derive(Parser)]
#[command(name = "hilltop")]
#[command(about = "School website and content backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "8080")]
        port: u16,

        /// Data directory for the local database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Base URL of a hosted content database. Requires --service-key.
        #[arg(long, env = "HILLTOP_SERVICE_URL")]
        service_url: Option<String>,

        /// API key for the hosted content database
        #[arg(long, env = "HILLTOP_SERVICE_KEY", hide_env_values = true)]
        service_key: Option<String>,

        /// Serve built-in content only, without any database
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Create the local database and seed default page content
    Init {
        /// Data directory for the local database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Add an admin account to the allow-list
    CreateUser {
        /// Data directory for the local database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Login email
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Password. Prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
    },
}

fn open_local(data_dir: &Path) -> anyhow::Result<ContentRepo> {
    fs::create_dir_all(data_dir)?;
    let store = SqliteStore::new(db_path(data_dir))?;
    store.initialize()?;
    Ok(ContentRepo::new(Arc::new(store)))
}

async fn run_init(data_dir: PathBuf, non_interactive: bool) -> anyhow::Result<()> {
    let repo = open_local(&data_dir)?;
    let seeded = seed_defaults(&repo).await?;

    println!();
    println!("Database ready at {}", db_path(&data_dir).display());
    println!("Seeded {seeded} page sections with default content.");
    println!();

    if non_interactive {
        return Ok(());
    }

    let create_user = inquire::Confirm::new("Would you like to create an admin account?")
        .with_default(true)
        .prompt()?;
    if !create_user {
        return Ok(());
    }

    let email = inquire::Text::new("Email:")
        .with_validator(|input: &str| {
            if is_valid_email(input.trim()) {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid(
                    "Please enter a valid email address.".into(),
                ))
            }
        })
        .prompt()?;
    let name = inquire::Text::new("Full name:").prompt()?;

    create_admin(&repo, &email, &name, None).await
}

async fn create_admin(repo: &ContentRepo, email: &str, name: &str, password: Option<String>) -> anyhow::Result<()> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        bail!("Invalid email address: {email}");
    }
    if name.trim().is_empty() {
        bail!("Name cannot be empty");
    }
    if repo.find_by::<AdminUser>("email", email.as_str()).await?.is_some() {
        bail!("An admin with email {email} already exists");
    }

    let password = match password {
        Some(password) => password,
        None => inquire::Password::new("Password:")
            .with_validator(|input: &str| {
                if input.len() < 8 {
                    Ok(inquire::validator::Validation::Invalid(
                        "Password must be at least 8 characters".into(),
                    ))
                } else {
                    Ok(inquire::validator::Validation::Valid)
                }
            })
            .prompt()?,
    };
    if password.is_empty() {
        bail!("Password cannot be empty");
    }

    let admin: AdminUser = repo
        .insert(row(json!({
            "email": email,
            "full_name": name.trim(),
            "password_hash": hash_password(&password)?,
            "is_active": true,
        })))
        .await?;

    println!();
    println!("Created admin '{}' <{}>", admin.full_name, admin.email);
    println!();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hilltop=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init {
                data_dir,
                non_interactive,
            } => {
                run_init(data_dir.into(), non_interactive).await?;
            }
            AdminCommands::CreateUser {
                data_dir,
                email,
                name,
                password,
            } => {
                let repo = open_local(Path::new(&data_dir))?;
                create_admin(&repo, &email, &name, password).await?;
            }
        },
        Commands::Serve {
            host,
            port,
            data_dir,
            service_url,
            service_key,
            offline,
        } => {
            let data_dir = PathBuf::from(data_dir);
            let backend = Backend::select(service_url, service_key, offline, db_path(&data_dir))?;
            if let Backend::Sqlite(_) = backend {
                fs::create_dir_all(&data_dir)?;
            }

            let config = ServerConfig {
                host,
                port,
                data_dir,
                backend,
            };

            info!("Content backend: {}", config.backend.describe());
            let store = config.backend.connect()?;

            let state = Arc::new(AppState::new(store));
            match state.repo.count(hilltop::types::Table::AdminUsers).await {
                Ok(0) => tracing::warn!("No admin accounts yet. Run 'hilltop admin create-user' to add one."),
                Ok(_) => {}
                Err(e) => tracing::warn!("Could not check admin accounts: {e}"),
            }

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
