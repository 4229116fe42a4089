use anyhow::Result;
use common::NumberFormat;
use tracing::debug;

use crate::render::scenarios_table;
use crate::store::ScenarioStore;

pub async fn list_scenarios(store: &ScenarioStore, format: &NumberFormat, json: bool) -> Result<()> {
    let scenarios = store.list_all().await?;
    debug!("Listing {} scenarios", scenarios.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&scenarios)?);
    } else if scenarios.is_empty() {
        println!("No scenarios saved yet. Use `ratecalc save --name <NAME>` to store one.");
    } else {
        println!("{}", scenarios_table(&scenarios, format));
    }
    Ok(())
}
