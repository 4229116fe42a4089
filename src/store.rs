//! Persistence of named rate scenarios.
//!
//! Every operation is a single statement against the `scenarios` table, so a
//! caller never observes a half-written scenario.

use chrono::Utc;
use common::{Scenario, ScenarioInput, ScenarioResult};
use migration::{Migrator, MigratorTrait};
use model::entities::scenario;
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use tracing::{debug, error, info, instrument, trace};

use crate::error::{Result, StoreError};

/// Scenario storage backed by a SeaORM connection.
#[derive(Clone, Debug)]
pub struct ScenarioStore {
    db: DatabaseConnection,
}

impl ScenarioStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connects to `database_url` without touching the schema.
    pub async fn connect(database_url: &str) -> Result<Self> {
        debug!("Database URL: {}", database_url);
        let db = Database::connect(database_url).await.map_err(|e| {
            error!("Failed to connect to database '{}': {}", database_url, e);
            StoreError::Storage(e)
        })?;
        info!("Successfully connected to database");
        Ok(Self::new(db))
    }

    /// Creates the schema if it does not exist yet. Safe to call on every start.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<()> {
        trace!("Running pending migrations");
        Migrator::up(&self.db, None).await.map_err(|e| {
            error!("Failed to run database migrations: {}", e);
            StoreError::Storage(e)
        })?;
        debug!("Schema is up to date");
        Ok(())
    }

    /// Computes the rates for `input` and stores them together with `name` and
    /// `description`. Returns the identifier of the new scenario.
    ///
    /// An empty description is stored as no description.
    #[instrument(skip(self, description))]
    pub async fn save(
        &self,
        name: &str,
        description: Option<&str>,
        input: &ScenarioInput,
    ) -> Result<i32> {
        trace!("Entering save function");

        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "scenario name must not be empty".to_string(),
            ));
        }

        let result = compute::compute_rates(input)?;
        debug!("Computed rates: {:?}", result);

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let scenario = scenario::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description),
            worker_count: Set(input.worker_count),
            cost_per_worker: Set(input.cost_per_worker),
            overhead_cost: Set(input.overhead_cost),
            billable_hours_per_worker: Set(input.billable_hours_per_worker),
            margin_fraction: Set(input.margin_fraction),
            vat_fraction: Set(input.vat_fraction),
            redistribution_enabled: Set(input.redistribution_enabled),
            self_cost_rate: Set(result.self_cost_rate),
            net_rate: Set(result.net_rate),
            gross_rate: Set(result.gross_rate),
            net_minus_self_cost_diff: Set(result.net_minus_self_cost_diff),
            redistribution_amount: Set(result.redistribution_amount),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let inserted = scenario.insert(&self.db).await.map_err(|e| {
            error!("Failed to save scenario: {}", e);
            StoreError::Storage(e)
        })?;

        info!("Scenario saved successfully: id={}", inserted.id);
        Ok(inserted.id)
    }

    /// All scenarios, newest first. Scenarios created within the same clock
    /// tick are ordered by descending identifier.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Scenario>> {
        let rows = scenario::Entity::find()
            .order_by_desc(scenario::Column::CreatedAt)
            .order_by_desc(scenario::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch scenarios: {}", e);
                StoreError::Storage(e)
            })?;

        debug!("Fetched {} scenarios", rows.len());
        Ok(rows.into_iter().map(scenario_from_model).collect())
    }

    /// Looks up one scenario. `Ok(None)` means no scenario has this identifier.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Scenario>> {
        let row = scenario::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch scenario {}: {}", id, e);
                StoreError::Storage(e)
            })?;

        if row.is_none() {
            debug!("Scenario {} not found", id);
        }
        Ok(row.map(scenario_from_model))
    }

    /// Deletes one scenario. Returns `false` when no scenario had this identifier.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let outcome = scenario::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete scenario {}: {}", id, e);
                StoreError::Storage(e)
            })?;

        let deleted = outcome.rows_affected > 0;
        if deleted {
            info!("Scenario {} deleted", id);
        } else {
            debug!("No scenario {} to delete", id);
        }
        Ok(deleted)
    }
}

fn scenario_from_model(model: scenario::Model) -> Scenario {
    Scenario {
        id: model.id,
        name: model.name,
        description: model.description,
        input: ScenarioInput {
            worker_count: model.worker_count,
            cost_per_worker: model.cost_per_worker,
            overhead_cost: model.overhead_cost,
            billable_hours_per_worker: model.billable_hours_per_worker,
            margin_fraction: model.margin_fraction,
            vat_fraction: model.vat_fraction,
            redistribution_enabled: model.redistribution_enabled,
        },
        result: ScenarioResult {
            self_cost_rate: model.self_cost_rate,
            net_rate: model.net_rate,
            gross_rate: model.gross_rate,
            net_minus_self_cost_diff: model.net_minus_self_cost_diff,
            redistribution_amount: model.redistribution_amount,
        },
        created_at: model.created_at,
    }
}
