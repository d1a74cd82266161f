use database::{db::create_connection, services::course::CourseService};
use log::info;
use migration::{Migrator, MigratorTrait};
use routes::{AppState, router};
use utils::shutdown::shutdown_signal;

mod config;
mod doc;
mod dtos;
mod error;
mod response;
mod routes;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = config::Config::from_env()?;
    let db = create_connection(&config.database_url).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Migrations applied");
    }

    let app = router(AppState::new(CourseService::new(db)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
