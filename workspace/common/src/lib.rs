//! Common types shared between the pricing engine, the scenario store and
//! the command-line front end.
//! The engine consumes `ScenarioInput` and produces `ScenarioResult`; the store
//! hands out `Scenario` values that bundle both with their bookkeeping fields.

mod comparison;
mod format;

pub use comparison::{Comparison, ColumnExtremes, Highlight, Metric};
pub use format::NumberFormat;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ===================== Inputs =====================

/// Cost and margin parameters for one hourly rate calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScenarioInput {
    /// Number of workers whose hours are billed
    pub worker_count: i32,
    /// Yearly cost per worker (salary, social contributions, ...)
    pub cost_per_worker: f64,
    /// Yearly overhead of the whole business (rent, administration, ...)
    pub overhead_cost: f64,
    /// Yearly billable hours per worker
    pub billable_hours_per_worker: f64,
    /// Profit margin as a fraction, e.g. 0.15 for 15 %
    pub margin_fraction: f64,
    /// VAT rate as a fraction, e.g. 0.19 for 19 %
    pub vat_fraction: f64,
    /// Whether part of the margin is redistributed to a separate share
    pub redistribution_enabled: bool,
}

impl Default for ScenarioInput {
    /// The preset values of the calculation form.
    fn default() -> Self {
        Self {
            worker_count: 8,
            cost_per_worker: 60_000.0,
            overhead_cost: 230_000.0,
            billable_hours_per_worker: 1_512.0,
            margin_fraction: 0.15,
            vat_fraction: 0.19,
            redistribution_enabled: false,
        }
    }
}

// ===================== Results =====================

/// Hourly rates derived from a `ScenarioInput`, each rounded to cents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ScenarioResult {
    /// Rate covering direct and overhead costs only
    pub self_cost_rate: f64,
    /// Self-cost rate plus margin, before tax
    pub net_rate: f64,
    /// Net rate including VAT, minus the redistributed share
    pub gross_rate: f64,
    /// Margin part of the net rate, minus the redistributed share
    pub net_minus_self_cost_diff: f64,
    /// Share of the margin moved out of the quoted rate
    pub redistribution_amount: f64,
}

// ===================== Scenarios =====================

/// A persisted, named calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub input: ScenarioInput,
    pub result: ScenarioResult,
    pub created_at: NaiveDateTime,
}
