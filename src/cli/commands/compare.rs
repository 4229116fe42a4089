use anyhow::{bail, Result};
use common::{Comparison, NumberFormat, Scenario};
use tracing::debug;

use crate::error::StoreError;
use crate::render::comparison_table;
use crate::store::ScenarioStore;

/// Loads the scenarios in `ids` and prints them side by side.
///
/// Fails when fewer than two distinct scenarios are requested or an ID is unknown.
pub async fn compare_scenarios(store: &ScenarioStore, ids: &[i32], format: &NumberFormat) -> Result<()> {
    let scenarios = load_for_comparison(store, ids).await?;
    let comparison = Comparison::of(&scenarios);
    debug!("Comparing {} scenarios", comparison.scenario_count());

    println!("Scenario comparison (highest values in green, lowest in red):");
    println!("{}", comparison_table(&scenarios, &comparison, format));
    Ok(())
}

pub(crate) async fn load_for_comparison(store: &ScenarioStore, ids: &[i32]) -> Result<Vec<Scenario>> {
    // Keep the order given on the command line, drop repeated IDs
    let mut unique: Vec<i32> = Vec::with_capacity(ids.len());
    for &id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    if unique.len() < 2 {
        bail!("At least two different scenarios are needed for a comparison");
    }

    let mut scenarios = Vec::with_capacity(unique.len());
    for id in unique {
        let scenario = store.get_by_id(id).await?.ok_or(StoreError::NotFound(id))?;
        scenarios.push(scenario);
    }
    Ok(scenarios)
}
