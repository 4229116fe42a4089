use anyhow::Result;
use common::{NumberFormat, ScenarioInput};
use tracing::{debug, error};

use crate::render::rates_table;

/// Computes and prints the rates for `input` without touching the database.
pub fn calculate(input: &ScenarioInput, format: &NumberFormat) -> Result<()> {
    debug!("Calculating rates for {:?}", input);

    let result = compute::compute_rates(input).map_err(|e| {
        error!("Calculation failed: {}", e);
        e
    })?;

    println!("{}", rates_table(&result, format));
    Ok(())
}
