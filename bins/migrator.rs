use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = models::db::connect().await?;
    info!("applying migrations");
    Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(())
}
