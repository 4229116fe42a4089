use anyhow::Result;
use common::ScenarioInput;
use tracing::{error, info};

use crate::store::ScenarioStore;

pub async fn save_scenario(
    store: &ScenarioStore,
    name: &str,
    description: Option<&str>,
    input: &ScenarioInput,
) -> Result<i32> {
    let id = store.save(name, description, input).await.map_err(|e| {
        error!("Failed to save scenario '{}': {}", name, e);
        e
    })?;

    info!("Saved scenario '{}' with id {}", name, id);
    println!("Scenario '{}' saved with id {}.", name.trim(), id);
    Ok(id)
}
