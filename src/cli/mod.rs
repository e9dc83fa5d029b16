// CLI module for administrative operations requiring server access

pub mod bootstrap;

use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

/// Stoplist backend CLI
#[derive(Parser)]
#[command(name = "stoplist-backend")]
#[command(about = "Telephony stoplist administrative backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create an admin account
    Createsuperuser {
        /// Login for the new account
        login: String,

        /// Password; prompted interactively when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Seed the built-in admin and staff roles
    Generateroles,
}

/// Execute a non-server CLI command
///
/// The server path is handled by main; everything here only needs the
/// migrated database connection.
pub async fn execute_command(
    command: Commands,
    db: &DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => unreachable!("serve is handled by main"),
        Commands::Createsuperuser { login, password } => {
            bootstrap::create_superuser(db, &login, password).await?;
        }
        Commands::Generateroles => {
            bootstrap::generate_roles(db).await?;
        }
    }

    Ok(())
}
