use log::{error, info};
use migration::{Migrator, MigratorTrait};
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!(
        "Starting storefront_rs in {:?} mode",
        config.runtime_env()
    );

    let db = match service::init_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    info!("Applying pending migrations to [{}]...", config.database_url());

    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to apply migrations: {e}");
        std::process::exit(1);
    }

    info!("Database schema is up to date");
}
