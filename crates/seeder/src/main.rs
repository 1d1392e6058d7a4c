use database::db::create_connection;
use log::{error, info};
use models::seed_data::SeedData;
use seeder::import::{SeedOutcome, seed_courses};

const DATASET_PATH: &str = "data/courses-data.json";

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(DATASET_PATH)?;
    let data: SeedData = serde_json::from_str(&raw)?;

    let db = create_connection().await?;

    info!("Setting up the courses template...");
    if seed_courses(&db, &data).await? == SeedOutcome::Imported {
        info!("Courses CMS ready to go!");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Best-effort one-shot: failures are logged, the process still exits 0
    if let Err(error) = run().await {
        error!("Could not import seed data: {error}");
    }
}
