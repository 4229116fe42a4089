use anyhow::Result;
use common::NumberFormat;

use crate::error::StoreError;
use crate::render::scenario_details;
use crate::store::ScenarioStore;

pub async fn show_scenario(store: &ScenarioStore, id: i32, format: &NumberFormat, json: bool) -> Result<()> {
    let scenario = store.get_by_id(id).await?.ok_or(StoreError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scenario)?);
    } else {
        println!("{}", scenario_details(&scenario, format));
    }
    Ok(())
}
