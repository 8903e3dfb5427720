use domain::event_handler::{
    ConsoleLogHandler, CustomerAddressChangedLogHandler, SendEmailWhenProductIsCreatedHandler,
};
use events::{EventDispatcher, EventKind};
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Seeding database [{}]...", config.database_url());

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(&*db, None).await {
        error!("Failed to apply migrations: {e}");
        std::process::exit(1);
    }

    let service_state = service::AppState::new(config, &db);

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(EventKind::CustomerCreated, Arc::new(ConsoleLogHandler));
    dispatcher.register(
        EventKind::CustomerChangeAddress,
        Arc::new(CustomerAddressChangedLogHandler),
    );
    dispatcher.register(
        EventKind::ProductCreated,
        Arc::new(SendEmailWhenProductIsCreatedHandler::new(
            service_state.config.product_notification_email(),
        )),
    );

    if let Err(e) = domain::seed::seed_database(&service_state.db_conn(), &dispatcher).await {
        error!("Failed to seed database: {e}");
        std::process::exit(1);
    }

    info!("Database seeded");
}
