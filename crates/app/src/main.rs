use clap::{Parser, Subcommand, ValueEnum};
use migration::{Migrator, MigratorTrait};
use settings::Settings;

mod settings;

const DEFAULT_CONFIG_PATH: &str = "settings";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "expenses", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML, extension may be omitted).
    #[arg(long)]
    config: Option<String>,
    /// Override the listen address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Migrate the database and serve the API (default).
    Serve,
    /// Run schema migrations only.
    Migrate {
        #[arg(value_enum, default_value_t = Migration::Up)]
        direction: Migration,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Migration {
    Up,
    Down,
    Fresh,
    Status,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    let mut settings = Settings::new(args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH))?;
    if let Some(bind) = args.bind {
        settings.server.bind = Some(bind);
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expenses={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(settings).await,
        Command::Migrate { direction } => migrate(&settings, direction).await,
    }
}

async fn serve(settings: Settings) -> Result<(), BoxError> {
    let db = sea_orm::Database::connect(settings.server.database.url()).await?;
    Migrator::up(&db, None).await?;

    let engine = engine::Engine::builder().database(db).build().await?;

    let bind = settings
        .server
        .bind
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(engine, settings.server.options(), listener, shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn migrate(settings: &Settings, direction: Migration) -> Result<(), BoxError> {
    let db = sea_orm::Database::connect(settings.server.database.url()).await?;

    match direction {
        Migration::Up => Migrator::up(&db, None).await?,
        Migration::Down => Migrator::down(&db, None).await?,
        Migration::Fresh => Migrator::fresh(&db).await?,
        Migration::Status => Migrator::status(&db).await?,
    }
    tracing::info!("Migration {direction:?} done");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested...");
}
