use clap::Parser;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use std::sync::Arc;

use stoplist_backend::api::{AuthApi, HealthApi, LogApi, RoleApi, StoplistApi, UserApi, ViewsApi};
use stoplist_backend::app_data::AppData;
use stoplist_backend::cli::{self, Cli, Commands};
use stoplist_backend::config::{self, AmiConfig, StoplistPolicy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging()?;

    let cli = Cli::parse();

    let db = config::init_database().await?;
    config::migrate(&db).await?;

    match cli.command {
        None | Some(Commands::Serve) => serve(db).await,
        Some(command) => cli::execute_command(command, &db).await,
    }
}

async fn serve(db: sea_orm::DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
    let jwt_secret = std::env::var("JWT_SECRET")
        .map_err(|_| "JWT_SECRET environment variable must be set")?;
    let ami_config = AmiConfig::from_env()?;
    let policy = StoplistPolicy::from_env();

    let app_data = Arc::new(AppData::init(db, ami_config, jwt_secret, policy));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(
                app_data.user_store.clone(),
                app_data.token_service.clone(),
            ),
            StoplistApi::new(
                app_data.stoplist_coordinator.clone(),
                app_data.stoplist_store.clone(),
                app_data.token_service.clone(),
            ),
            UserApi::new(app_data.user_store.clone(), app_data.token_service.clone()),
            RoleApi::new(app_data.role_store.clone(), app_data.token_service.clone()),
            LogApi::new(app_data.log_store.clone(), app_data.token_service.clone()),
            ViewsApi::new(app_data.token_service.clone(), app_data.policy),
        ),
        "Stoplist",
        env!("CARGO_PKG_VERSION"),
    )
    .server("http://localhost:3000/api");

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!("Starting server on http://{}", bind_addr);
    tracing::info!("Swagger UI available under /swagger");

    Server::new(TcpListener::bind(bind_addr)).run(app).await?;

    Ok(())
}
