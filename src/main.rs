use dotenvy::dotenv;
use punchcard::config::seed::load_default_seed_data;
use punchcard::core::{business, campaign, seed};
use punchcard::errors::Result;
use punchcard::config;
use punchcard::store::migrate::migrate_legacy_keys;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and ensure the key-value table exists
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Store initialized at {}", config::database::get_database_url());

    // 4. Upgrade any data left under superseded keys
    migrate_legacy_keys(&db).await?;

    // 5. Seed the demo dataset on first run
    let seed_data = load_default_seed_data()?;
    let seeded = seed::seed_if_empty(&db, &seed_data).await?;
    info!(
        "Seeding {}",
        if seeded { "ran" } else { "skipped (already initialized)" }
    );

    // 6. Log a summary of what the store holds
    let businesses = business::list_businesses(&db).await?;
    let campaigns = campaign::list_campaigns(&db).await?;
    info!(
        "Store holds {} business(es) and {} campaign(s)",
        businesses.len(),
        campaigns.len()
    );
    for b in &businesses {
        let count = campaign::campaigns_for_business(&db, &b.id).await?.len();
        info!("  {} ({}) - {} campaign(s)", b.name, b.slug, count);
    }

    Ok(())
}
