use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use registration::{
    config::AppConfig,
    db,
    repositories::SqliteUserRegistrationRepository,
    services::{RegisterUserRequest, UserService},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "registration-cli")]
#[command(about = "CLI tool for managing registered users", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Register a new user
    Create {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "Other")]
        gender: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List,
}

fn prompt_password() -> anyhow::Result<String> {
    let password = rpassword::prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if password != confirm {
        bail!("Passwords do not match");
    }
    Ok(password)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    let pool = db::create_pool(&config.database_url)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    db::run_migrations(&pool).await?;

    let user_service = Arc::new(UserService::new(Arc::new(
        SqliteUserRegistrationRepository::new(pool),
    )));

    let cli = Cli::parse();

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                first_name,
                last_name,
                email,
                gender,
                password,
            } => {
                let password = match password {
                    Some(password) => password,
                    None => prompt_password()?,
                };

                let user = user_service
                    .register(RegisterUserRequest {
                        first_name,
                        last_name,
                        email,
                        password,
                        gender,
                    })
                    .await
                    .context("registering user")?;

                println!("Created user {} ({}) with id {}", user, user.email, user.id);
            }
            UserCommands::List => {
                let users = user_service.list_users().await?;

                if users.is_empty() {
                    println!("No users found.");
                } else {
                    println!("{:<6} {:<30} {:<40} {}", "ID", "Name", "Email", "Registered");
                    println!("{}", "-".repeat(100));
                    let total = users.len();
                    for user in users {
                        println!(
                            "{:<6} {:<30} {:<40} {}",
                            user.id,
                            user.to_string(),
                            user.email,
                            user.date_registration.format("%Y-%m-%d %H:%M:%S")
                        );
                    }
                    println!("\nTotal: {} user(s)", total);
                }
            }
        },
    }

    Ok(())
}
