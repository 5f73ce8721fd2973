use crate::clients::{CookbookClient, InventoryClient};
use crate::clock::SharedClock;
use crate::config::{ConfigError, RuntimeConfig};
use crate::cookbook_actor::{CookbookContext, CookbookError};
use crate::inventory_actor::InventoryError;
use crate::model::{Grocery, GroceryError, Ingredients, RecipeCreate, RecipeError};
use chrono::{Days, Months, NaiveDate};
use thiserror::Error;
use tracing::{error, info};

/// Failures while bootstrapping or stopping the [`KitchenSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid runtime config: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid sample lot: {0}")]
    Grocery(#[from] GroceryError),

    #[error("Invalid sample recipe: {0}")]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Cookbook(#[from] CookbookError),

    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// Runtime orchestrator for the pantry: one inventory actor, one cookbook actor.
///
/// The cookbook actor is given a clone of the inventory client through its context so it can
/// answer [`CookbookClient::cookable_now`].
///
/// # Example
///
/// ```rust
/// use pantry::clock::SystemClock;
/// use pantry::config::RuntimeConfig;
/// use pantry::feasibility::ExpiryPolicy;
/// use pantry::lifecycle::KitchenSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = KitchenSystem::new(&RuntimeConfig::default(), SystemClock::shared())?;
///     system.seed_sample_data().await?;
///
///     let recipes = system.cookbook_client.cookable_now(ExpiryPolicy::FreshOnly).await?;
///     assert_eq!(recipes[0].name(), "Pancakes");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct KitchenSystem {
    /// Client for interacting with the Inventory actor
    pub inventory_client: InventoryClient,

    /// Client for interacting with the Cookbook actor
    pub cookbook_client: CookbookClient,

    clock: SharedClock,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KitchenSystem {
    /// Creates both actors, wires them and spawns them. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    /// [`SystemError::Config`] if `config` does not validate; nothing is spawned then.
    pub fn new(config: &RuntimeConfig, clock: SharedClock) -> Result<Self, SystemError> {
        config.validate()?;

        // 1. Create actors (no dependencies)
        let (inventory_actor, inventory_generic) =
            crate::inventory_actor::new(config.channel_capacity);
        let (cookbook_actor, cookbook_generic) =
            crate::cookbook_actor::new(config.channel_capacity);

        let inventory_client = InventoryClient::new(inventory_generic);
        let cookbook_client = CookbookClient::new(cookbook_generic);

        // 2. Start actors with injected context
        let inventory_handle = tokio::spawn(inventory_actor.run(clock.clone()));
        let cookbook_handle = tokio::spawn(cookbook_actor.run(CookbookContext {
            clock: clock.clone(),
            inventory: inventory_client.clone(),
        }));

        Ok(Self {
            inventory_client,
            cookbook_client,
            clock,
            handles: vec![cookbook_handle, inventory_handle],
        })
    }

    /// The date the system judges expiry against.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Stocks a small starter inventory and the Pancakes recipe, dated from today.
    pub async fn seed_sample_data(&self) -> Result<(), SystemError> {
        let today = self.today();
        let in_days = |days| today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        let in_six_months = today
            .checked_add_months(Months::new(6))
            .unwrap_or(NaiveDate::MAX);

        let lots = [
            Grocery::new("Milk", 2.0, "liters", 15.0, in_days(5))?,
            Grocery::new("Eggs", 12.0, "pieces", 2.0, in_days(10))?,
            Grocery::new("Flour", 1.0, "kg", 20.0, in_six_months)?,
        ];
        for lot in lots {
            self.inventory_client.add_lot(lot).await?;
        }

        let ingredients = Ingredients::from([
            ("Milk".to_string(), 1.5),
            ("Eggs".to_string(), 2.0),
            ("Flour".to_string(), 0.5),
        ]);
        let pancakes = RecipeCreate::new(
            "Pancakes",
            "Delicious breakfast",
            "Mix milk, eggs and flour. Cook on a hot skillet.",
            ingredients,
            4,
        )?;
        let id = self.cookbook_client.add_recipe(pancakes).await?;

        info!(%today, recipe_id = %id, "Sample data seeded");
        Ok(())
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the mailboxes. The cookbook goes first: its context holds
    /// an inventory client, and the inventory actor only stops once that clone is gone too.
    /// Every actor is awaited even if an earlier one failed; the first failure is returned.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down kitchen...");

        drop(self.cookbook_client);
        drop(self.inventory_client);

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                if first_failure.is_none() {
                    first_failure = Some(SystemError::ActorTaskFailed(e.to_string()));
                }
            }
        }

        match first_failure {
            Some(failure) => Err(failure),
            None => {
                info!("Kitchen shutdown complete.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_shutdown_awaits_every_actor_after_a_failure() {
        let (_inventory_actor, inventory_generic) = crate::inventory_actor::new(1);
        let (_cookbook_actor, cookbook_generic) = crate::cookbook_actor::new(1);

        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let failing = tokio::spawn(async { panic!("actor blew up") });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let system = KitchenSystem {
            inventory_client: InventoryClient::new(inventory_generic),
            cookbook_client: CookbookClient::new(cookbook_generic),
            clock: FixedClock::shared(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            handles: vec![failing, slow],
        };

        let result = system.shutdown().await;
        assert!(matches!(result, Err(SystemError::ActorTaskFailed(_))));
        assert!(finished.load(Ordering::SeqCst), "later actor must still be awaited");
    }

    #[tokio::test]
    async fn test_zero_capacity_is_rejected() {
        let config = RuntimeConfig {
            channel_capacity: 0,
        };
        let result = KitchenSystem::new(&config, FixedClock::shared(NaiveDate::MIN));
        assert!(matches!(
            result,
            Err(SystemError::Config(ConfigError::Invalid { .. }))
        ));
    }
}
