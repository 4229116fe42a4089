use anyhow::Result;
use tracing::warn;

use crate::store::ScenarioStore;

/// Deletes scenario `id`. A missing scenario is reported, not treated as a failure.
pub async fn delete_scenario(store: &ScenarioStore, id: i32) -> Result<bool> {
    let deleted = store.delete_by_id(id).await?;

    if deleted {
        println!("Scenario {} deleted.", id);
    } else {
        warn!("Scenario {} does not exist", id);
        println!("No scenario with id {}.", id);
    }
    Ok(deleted)
}
