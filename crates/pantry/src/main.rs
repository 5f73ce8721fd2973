use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use pantry::clock::{FixedClock, SharedClock, SystemClock};
use pantry::config::PantryConfig;
use pantry::feasibility::ExpiryPolicy;
use pantry::lifecycle::{setup_tracing, KitchenSystem};
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

/// Stock the pantry and report what can be cooked.
#[derive(Debug, Parser)]
#[command(name = "pantry", version, about)]
struct Args {
    /// TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Judge expiry as of this date (YYYY-MM-DD) instead of the system date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Let expired lots count when matching recipes.
    #[arg(long)]
    include_expired: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PantryConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PantryConfig::default(),
    };

    setup_tracing(&config.logging.filter);

    let clock: SharedClock = match args.today {
        Some(date) => FixedClock::shared(date),
        None => SystemClock::shared(),
    };
    let policy = ExpiryPolicy::from(args.include_expired);

    let system = KitchenSystem::new(&config.runtime, clock)?;
    info!(today = %system.today(), ?policy, "Kitchen started");

    if config.bootstrap.seed_sample_data {
        system
            .seed_sample_data()
            .instrument(tracing::info_span!("seeding"))
            .await?;
    } else {
        warn!("Sample data disabled, inventory starts empty");
    }

    let span = tracing::info_span!("overview");
    async {
        for lot in system.inventory_client.all_lots().await? {
            info!("{}", lot);
        }
        for lot in system.inventory_client.expired_lots().await? {
            warn!("Expired: {}", lot);
        }
        let total = system.inventory_client.total_value().await?;
        let expired = system.inventory_client.total_expired_value().await?;
        info!("Total value: NOK {:.2} (expired: NOK {:.2})", total, expired);
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    let recipes = system.cookbook_client.cookable_now(policy).await?;
    if recipes.is_empty() {
        info!("Nothing can be cooked with the current inventory");
    }
    for recipe in &recipes {
        info!(id = %recipe.id(), serves = recipe.serves(), "Can cook {}", recipe);
    }

    system.shutdown().await?;
    Ok(())
}
