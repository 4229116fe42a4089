//! Hourly rate calculation.
//!
//! The formula runs on unrounded values from start to finish; only the five
//! returned figures are rounded, once, at the very end.

use common::{ScenarioInput, ScenarioResult};
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// Portion of the margin, scaled by the margin fraction itself, that is moved
/// out of the quoted rate when redistribution is enabled.
pub const REDISTRIBUTION_SHARE: f64 = 0.6;

/// Computes self-cost, net and gross hourly rates for `input`.
///
/// Validation happens before any arithmetic:
/// - `worker_count` must be greater than 0
/// - `billable_hours_per_worker` must be greater than 0
/// - costs must be finite and not negative
/// - margin and VAT fractions must lie in `[0, 1]`
/// - the total billable hours must not be 0
///
/// # Errors
/// `ComputeError::InvalidInput` when a check fails, `ComputeError::Calculation`
/// when the result is not a finite number.
#[instrument(level = "trace")]
pub fn compute_rates(input: &ScenarioInput) -> Result<ScenarioResult> {
    validate(input).inspect_err(|e| debug!("Rejected rate input: {}", e))?;

    let worker_count = f64::from(input.worker_count);

    let total_individual_cost = worker_count * input.cost_per_worker;
    let total_self_cost = total_individual_cost + input.overhead_cost;
    let total_billable_hours = worker_count * input.billable_hours_per_worker;

    if total_billable_hours == 0.0 {
        return Err(ComputeError::InvalidInput(
            "total billable hours must not be 0".to_string(),
        ));
    }

    let self_cost_rate = total_self_cost / total_billable_hours;
    let net_rate = self_cost_rate * (1.0 + input.margin_fraction);
    let mut gross_rate = net_rate * (1.0 + input.vat_fraction);
    let mut diff = net_rate - self_cost_rate;
    let mut redistribution_amount = 0.0;

    if input.redistribution_enabled {
        redistribution_amount = diff * (REDISTRIBUTION_SHARE * input.margin_fraction);
        diff -= redistribution_amount;
        gross_rate -= redistribution_amount;
    }

    trace!(
        self_cost_rate,
        net_rate,
        gross_rate,
        diff,
        redistribution_amount,
        "Unrounded rates"
    );

    Ok(ScenarioResult {
        self_cost_rate: finite_cents("self-cost rate", self_cost_rate)?,
        net_rate: finite_cents("net rate", net_rate)?,
        gross_rate: finite_cents("gross rate", gross_rate)?,
        net_minus_self_cost_diff: finite_cents("net minus self-cost difference", diff)?,
        redistribution_amount: finite_cents("redistribution amount", redistribution_amount)?,
    })
}

/// Rounds to two decimal places, half to even.
///
/// The value is scaled by 100, rounded with `f64::round_ties_even` and scaled
/// back, so `0.125` becomes `0.12` and `0.375` becomes `0.38`. Ties are judged
/// on the binary value of `value * 100`.
///
/// Values too large to scale have no fractional cents and are returned as is.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 100.0
}

fn finite_cents(field: &str, value: f64) -> Result<f64> {
    let rounded = round_cents(value);
    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(ComputeError::Calculation(format!(
            "{} is not a finite number",
            field
        )))
    }
}

fn validate(input: &ScenarioInput) -> Result<()> {
    if input.worker_count <= 0 {
        return Err(ComputeError::InvalidInput(
            "worker count must be greater than 0".to_string(),
        ));
    }
    // Written as a negated comparison so NaN is rejected as well
    if !(input.billable_hours_per_worker > 0.0) || input.billable_hours_per_worker.is_infinite() {
        return Err(ComputeError::InvalidInput(
            "billable hours must be greater than 0".to_string(),
        ));
    }
    non_negative("cost per worker", input.cost_per_worker)?;
    non_negative("overhead cost", input.overhead_cost)?;
    fraction("margin", input.margin_fraction)?;
    fraction("VAT", input.vat_fraction)?;
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ComputeError::InvalidInput(format!(
            "{} must be a finite number not below 0",
            field
        )))
    }
}

fn fraction(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ComputeError::InvalidInput(format!(
            "{} must be between 0 and 1",
            field
        )))
    }
}
